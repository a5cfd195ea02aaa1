use crate::domain::labels::region_badge;
use crate::domain::listing::Listing;

/// Simplified card for the per-category pages.
#[derive(Debug)]
pub struct CategoryCard {
    pub badge: &'static str,
    pub name: String,
    pub summary: String,
    /// Detail link when the listing is routable. Preview-only entries keep
    /// their external `link` out of the page; the card stays non-actionable.
    pub href: Option<String>,
}

/// Exact single-category filter over the full set, in source order.
pub fn category_view(listings: &[Listing], category: &str) -> Vec<CategoryCard> {
    listings
        .iter()
        .filter(|listing| listing.category.as_deref() == Some(category))
        .map(|listing| CategoryCard {
            badge: region_badge(listing.region.as_deref()),
            name: listing.name.clone(),
            summary: listing.summary.clone().unwrap_or_default(),
            href: listing.detail_href(),
        })
        .collect()
}
