//! Fixed facet-key → human-label tables shared by all three views.

/// Category keys with their display labels. A category page exists for each
/// entry; keys outside this table display raw and get no page.
pub const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("local-eats", "Local Eats"),
    ("us-favorites", "US Favorites"),
    ("beach", "Beach"),
    ("hike", "Hike"),
    ("ocean", "Ocean Activities"),
    ("bar", "Bar"),
    ("shopping", "Shopping"),
    ("golf", "Golf"),
];

pub const REGION_LABELS: &[(&str, &str)] = &[
    ("south", "South"),
    ("central", "Central"),
    ("north", "North"),
];

pub fn category_label(key: &str) -> Option<&'static str> {
    lookup(CATEGORY_LABELS, key)
}

pub fn region_label(key: &str) -> Option<&'static str> {
    lookup(REGION_LABELS, key)
}

/// Label for a known key, the raw key otherwise, "Category" when absent.
pub fn category_display(key: Option<&str>) -> String {
    match key {
        Some(k) => category_label(k).unwrap_or(k).to_string(),
        None => "Category".to_string(),
    }
}

/// Label for a known key, the raw key otherwise, "Area" when absent.
pub fn region_display(key: Option<&str>) -> String {
    match key {
        Some(k) => region_label(k).unwrap_or(k).to_string(),
        None => "Area".to_string(),
    }
}

/// Card badge text: known label or the generic "Listing".
pub fn category_badge(key: Option<&str>) -> &'static str {
    key.and_then(category_label).unwrap_or("Listing")
}

/// Category-page badge text: known region label or the generic "Area".
pub fn region_badge(key: Option<&str>) -> &'static str {
    key.and_then(region_label).unwrap_or("Area")
}

fn lookup(table: &'static [(&str, &str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}
