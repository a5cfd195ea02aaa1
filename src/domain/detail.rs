use crate::domain::format::verified_date;
use crate::domain::labels::{category_badge, category_display, region_display};
use crate::domain::listing::{non_empty, Listing};
use url::form_urlencoded;

pub const SITE_NAME: &str = "OkiUS Atlas";

const SUMMARY_FALLBACK: &str = "Admin-curated listing.";
const OVERVIEW_ATTRIBUTION: &str =
    "This listing is curated for Americans living on Okinawa Main Island.";
const OVERVIEW_FALLBACK: &str =
    "Admin-curated listing for Americans living on Okinawa Main Island.";
const NOTE_FALLBACK: &str = "Admin-curated. Verify details before visiting.";
const HIGHLIGHT_FALLBACKS: [&str; 2] = ["Admin curated", "Verify details before visiting"];
const GOOD_FOR_FALLBACK: &str = "Local favorite";
const LOG_AUTHOR_FALLBACK: &str = "Admin";
const LOG_NOTE_FALLBACK: &str = "Update logged.";

pub const NOT_FOUND_NAME: &str = "Listing not found";
pub const NOT_FOUND_SUMMARY: &str =
    "We could not find that listing. Please return to the directory.";
pub const NOT_FOUND_OVERVIEW: &str = "This listing may have been removed or renamed.";
pub const NOT_FOUND_NOTE: &str = "Check the directory for the latest listings.";
pub const NOT_FOUND_BREADCRUMB: &str = "Not found";

const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Fully assembled detail page: hero texts, chip row, highlights, quick
/// facts, map link, verification history, related panel and prev/next
/// navigation. Pure data; the template only splices it.
#[derive(Debug)]
pub struct DetailView {
    pub title: String,
    pub name: String,
    pub summary: String,
    pub overview: String,
    pub note: String,
    pub breadcrumb_category: String,
    pub breadcrumb_category_href: Option<String>,
    pub chips: Vec<String>,
    pub highlights: Vec<String>,
    pub quick_facts: Vec<QuickFact>,
    pub map_href: String,
    pub good_for: Vec<String>,
    pub log: Vec<LogCard>,
    pub related: Vec<RelatedCard>,
    /// Hrefs of the source-order neighbors. Absent (or preview-only)
    /// neighbors render as disabled placeholders.
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct QuickFact {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug)]
pub struct LogCard {
    pub date: String,
    pub by: String,
    pub note: String,
}

#[derive(Debug)]
pub struct RelatedCard {
    pub badge: &'static str,
    pub name: String,
    pub summary: String,
    pub href: Option<String>,
}

pub fn find_listing<'a>(listings: &'a [Listing], id: &str) -> Option<&'a Listing> {
    listings.iter().find(|item| item.id.as_deref() == Some(id))
}

/// Listings sharing the current listing's category or region, excluding the
/// listing itself, in source order, capped at three. No relevance ranking.
pub fn related<'a>(listings: &'a [Listing], current: &Listing) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|item| item.id != current.id)
        .filter(|item| item.category == current.category || item.region == current.region)
        .take(3)
        .collect()
}

/// Source-order neighbors of the current listing, located by id equality.
/// Positional adjacency in the raw data order, not in any filtered order.
pub fn neighbors<'a>(
    listings: &'a [Listing],
    current: &Listing,
) -> (Option<&'a Listing>, Option<&'a Listing>) {
    match listings.iter().position(|item| item.id == current.id) {
        Some(index) => {
            let prev = if index > 0 {
                listings.get(index - 1)
            } else {
                None
            };
            (prev, listings.get(index + 1))
        }
        None => (None, None),
    }
}

/// Map-search URL from the admin override, or synthesized from name and area.
pub fn map_search_href(listing: &Listing) -> String {
    let query = match non_empty(&listing.map_query) {
        Some(q) => q.to_string(),
        None => format!(
            "{} {} Okinawa",
            listing.name,
            listing.area.as_deref().unwrap_or_default()
        ),
    };
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("query", &query)
        .finish();
    format!("{MAP_SEARCH_BASE}?{encoded}")
}

/// Ordered quick-fact rows. Status slots in after Region when present;
/// rows with missing or empty values are omitted entirely.
pub fn quick_facts(listing: &Listing, category: &str, region: &str) -> Vec<QuickFact> {
    let mut rows: Vec<(&'static str, Option<String>)> = vec![
        ("Area", listing.area.clone()),
        ("Category", Some(category.to_string())),
        ("Region", Some(region.to_string())),
        ("Hours", listing.hours.clone()),
        ("Price", listing.price.clone()),
        ("English", listing.english.clone()),
        ("Parking", listing.parking.clone()),
        ("Phone", listing.phone.clone()),
        (
            "Verified",
            Some(verified_date(listing.last_verified.as_deref())),
        ),
    ];
    if non_empty(&listing.status).is_some() {
        rows.insert(3, ("Status", listing.status.clone()));
    }

    rows.into_iter()
        .filter_map(|(label, value)| {
            let value = value.filter(|v| !v.is_empty())?;
            Some(QuickFact { label, value })
        })
        .collect()
}

/// Resolves `id` against the full set and assembles the detail page.
/// `None` means the not-found state: terminal, no related or nav work.
pub fn detail_view(listings: &[Listing], id: &str) -> Option<DetailView> {
    let listing = find_listing(listings, id)?;

    let category = category_display(listing.category.as_deref());
    let region = region_display(listing.region.as_deref());

    let overview = match non_empty(&listing.summary) {
        Some(summary) => format!("{summary} {OVERVIEW_ATTRIBUTION}"),
        None => OVERVIEW_FALLBACK.to_string(),
    };

    let mut chips = vec![category.clone(), region.clone()];
    chips.extend(listing.tags.iter().cloned());

    let highlights = if listing.tags.is_empty() {
        HIGHLIGHT_FALLBACKS.iter().map(|s| s.to_string()).collect()
    } else {
        listing.tags.clone()
    };

    let good_for = if listing.tags.is_empty() {
        vec![GOOD_FOR_FALLBACK.to_string()]
    } else {
        listing.tags.clone()
    };

    // Rendered newest-first as given; the document's order is authoritative.
    let log = listing
        .verification_log
        .iter()
        .map(|entry| LogCard {
            date: verified_date(entry.date.as_deref()),
            by: non_empty(&entry.by).unwrap_or(LOG_AUTHOR_FALLBACK).to_string(),
            note: non_empty(&entry.note)
                .unwrap_or(LOG_NOTE_FALLBACK)
                .to_string(),
        })
        .collect();

    let related_cards = related(listings, listing)
        .into_iter()
        .map(|item| RelatedCard {
            badge: category_badge(item.category.as_deref()),
            name: item.name.clone(),
            summary: item.summary.clone().unwrap_or_default(),
            href: item.detail_href(),
        })
        .collect();

    let (prev, next) = neighbors(listings, listing);
    let facts = quick_facts(listing, &category, &region);

    Some(DetailView {
        title: format!("{} | {SITE_NAME}", listing.name),
        name: listing.name.clone(),
        summary: non_empty(&listing.summary)
            .unwrap_or(SUMMARY_FALLBACK)
            .to_string(),
        overview,
        note: non_empty(&listing.notes).unwrap_or(NOTE_FALLBACK).to_string(),
        breadcrumb_category: category,
        breadcrumb_category_href: non_empty(&listing.category)
            .map(|key| format!("/category-{key}.html")),
        chips,
        highlights,
        quick_facts: facts,
        map_href: map_search_href(listing),
        good_for,
        log,
        related: related_cards,
        prev_href: prev.and_then(Listing::detail_href),
        next_href: next.and_then(Listing::detail_href),
    })
}
