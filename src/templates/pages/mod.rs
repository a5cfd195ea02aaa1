pub mod category;
pub mod directory;
pub mod listing;

pub use category::{category_page, category_unavailable_page};
pub use directory::{directory_page, directory_unavailable_page};
pub use listing::{listing_page, not_found_page};

/// Degraded-state copy shown when the data resource cannot be loaded.
pub const UNAVAILABLE: &str = "Unable to load listings right now.";
