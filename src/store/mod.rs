use crate::domain::listing::{Catalog, Listing};
use crate::errors::ServerError;
use std::fs;

/// Handle on the listing data resource. Cheap to clone; every call to
/// [`Store::load`] re-reads the resource, so a page view always sees the
/// current document (no cross-view cache).
#[derive(Clone)]
pub struct Store {
    source: Source,
}

#[derive(Clone)]
enum Source {
    File(String),
    Http(String),
}

impl Store {
    /// `location` is a filesystem path, or an `http(s)://` URL fetched per view.
    pub fn new(location: impl Into<String>) -> Self {
        let location = location.into();
        let source = if location.starts_with("http://") || location.starts_with("https://") {
            Source::Http(location)
        } else {
            Source::File(location)
        };
        Self { source }
    }

    pub fn location(&self) -> &str {
        match &self.source {
            Source::File(loc) | Source::Http(loc) => loc,
        }
    }

    /// Load and decode the full listing set.
    pub fn load(&self) -> Result<Vec<Listing>, ServerError> {
        let catalog: Catalog = match &self.source {
            Source::File(path) => {
                let body = fs::read_to_string(path)
                    .map_err(|e| ServerError::DataError(format!("Read {path} failed: {e}")))?;
                serde_json::from_str(&body)
                    .map_err(|e| ServerError::DataError(format!("Decode {path} failed: {e}")))?
            }
            Source::Http(url) => reqwest::blocking::get(url)
                .and_then(|resp| resp.error_for_status())
                .map_err(|e| ServerError::DataError(format!("Fetch {url} failed: {e}")))?
                .json()
                .map_err(|e| ServerError::DataError(format!("Decode {url} failed: {e}")))?,
        };
        Ok(catalog.listings)
    }

    /// Raw bytes of the resource, for serving `/data.json` verbatim.
    pub fn raw(&self) -> Result<Vec<u8>, ServerError> {
        match &self.source {
            Source::File(path) => {
                fs::read(path).map_err(|e| ServerError::DataError(format!("Read {path} failed: {e}")))
            }
            Source::Http(url) => {
                let resp = reqwest::blocking::get(url)
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| ServerError::DataError(format!("Fetch {url} failed: {e}")))?;
                let bytes = resp
                    .bytes()
                    .map_err(|e| ServerError::DataError(format!("Read {url} failed: {e}")))?;
                Ok(bytes.to_vec())
            }
        }
    }
}
