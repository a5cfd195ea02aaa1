use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;

/// Serve a non-HTML resource (the data document, the stylesheet) verbatim.
pub fn bytes_response(content_type: &Mime, bytes: Vec<u8>) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .body(Body::new(bytes))
        .map_err(|_| ServerError::InternalError)
}
