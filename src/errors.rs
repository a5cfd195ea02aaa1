use astra::Response;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the listing data resource.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    DataError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::DataError(msg) => write!(f, "Data Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
