use serde::Deserialize;

/// Shape of the data resource: `{ "listings": [...] }`.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub listings: Vec<Listing>,
}

/// One directory entry, exactly as the admin-maintained document stores it.
/// Listings are read-only; the document's array order is authoritative and
/// drives grid order, related selection and prev/next navigation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Present iff the listing has its own detail page. Listings without an
    /// id are preview-only entries and never get a link of their own.
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub area: Option<String>,

    /// Key into the category label table; unknown keys display raw.
    #[serde(default)]
    pub category: Option<String>,
    /// Key into the region label table (south/central/north).
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    // Optional display facts; absent or empty means "don't render the row".
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub parking: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,

    /// `YYYY-MM-DD`; anything else is shown best-effort.
    #[serde(default)]
    pub last_verified: Option<String>,

    /// Newest first, as entered by the admin. Never re-sorted.
    #[serde(default)]
    pub verification_log: Vec<VerificationEntry>,

    /// External URL for preview-only entries. Informational, never an href.
    #[serde(default)]
    pub link: Option<String>,
    /// Overrides the synthesized map search query.
    #[serde(default)]
    pub map_query: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerificationEntry {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub by: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Listing {
    /// Routable iff the listing carries a non-empty id.
    pub fn detail_href(&self) -> Option<String> {
        non_empty(&self.id).map(|id| format!("/listing.html?id={id}"))
    }

    /// Most recent verification entry, if any history exists.
    pub fn last_log(&self) -> Option<&VerificationEntry> {
        self.verification_log.first()
    }
}

/// Treats absent and empty-string fields the same way the site always has:
/// as missing.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
