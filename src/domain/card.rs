use crate::domain::format::verified_date;
use crate::domain::labels::{category_badge, region_display};
use crate::domain::listing::{non_empty, Listing};

/// Everything the directory grid needs to draw one card. Built once per
/// listing per view; the presentation layer only splices these fields.
#[derive(Debug, Clone)]
pub struct ListingCard {
    pub name: String,
    pub summary: String,
    pub badge: &'static str,
    pub region_tag: String,
    /// Labeled fact lines under the summary, in display order.
    pub meta: Vec<String>,
    pub tags: Vec<String>,
    /// Detail link for routable listings; preview-only entries get none.
    pub href: Option<String>,

    // Raw facet keys, matched against the active filter set.
    pub category_key: String,
    pub region_key: String,

    // Lowercased visible text, the search predicate's haystack.
    search_blob: String,
}

impl ListingCard {
    pub fn from_listing(listing: &Listing) -> Self {
        let badge = category_badge(listing.category.as_deref());
        let region_tag = region_display(listing.region.as_deref());
        let summary = listing.summary.clone().unwrap_or_default();

        let mut meta = Vec::new();
        meta.push(format!(
            "Area: {}",
            listing.area.as_deref().unwrap_or_default()
        ));
        meta.push(format!(
            "Verified: {}",
            verified_date(listing.last_verified.as_deref())
        ));
        if let Some(status) = non_empty(&listing.status) {
            meta.push(format!("Status: {status}"));
        }
        if let Some(log) = listing.last_log() {
            let by = non_empty(&log.by).unwrap_or("Admin");
            meta.push(format!(
                "Last update: {} by {by}",
                verified_date(log.date.as_deref())
            ));
        }

        let href = listing.detail_href();
        let action = if href.is_some() {
            "View details"
        } else {
            "Preview soon"
        };

        let mut blob_parts: Vec<&str> =
            vec![badge, region_tag.as_str(), listing.name.as_str(), summary.as_str()];
        blob_parts.extend(meta.iter().map(String::as_str));
        blob_parts.extend(listing.tags.iter().map(String::as_str));
        blob_parts.push(action);
        let search_blob = blob_parts.join(" ").to_lowercase();

        Self {
            name: listing.name.clone(),
            summary,
            badge,
            region_tag,
            meta,
            tags: listing.tags.clone(),
            href,
            category_key: listing.category.clone().unwrap_or_default(),
            region_key: listing.region.clone().unwrap_or_default(),
            search_blob,
        }
    }

    /// Case-insensitive substring match over the card's visible text.
    /// The empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.search_blob.contains(&term.to_lowercase())
    }
}
