use crate::domain::category::category_view;
use crate::domain::detail::{detail_view, map_search_href, neighbors, related};
use crate::domain::listing::VerificationEntry;
use crate::tests::utils::{listing, sample_listings};

#[test]
fn quick_facts_omit_missing_rows() {
    let mut spot = listing(Some("x"), "Spot", Some("beach"), Some("north"));
    spot.area = Some("Onna".to_string());
    spot.price = Some("$".to_string());
    let listings = vec![spot];

    let view = detail_view(&listings, "x").expect("listing resolves");
    let labels: Vec<&str> = view.quick_facts.iter().map(|fact| fact.label).collect();
    assert_eq!(labels, ["Area", "Category", "Region", "Price", "Verified"]);
}

#[test]
fn status_row_slots_in_before_hours() {
    let mut spot = listing(Some("x"), "Spot", Some("beach"), Some("north"));
    spot.area = Some("Onna".to_string());
    spot.status = Some("Open".to_string());
    spot.hours = Some("9:00-17:00".to_string());
    let listings = vec![spot];

    let view = detail_view(&listings, "x").expect("listing resolves");
    let labels: Vec<&str> = view.quick_facts.iter().map(|fact| fact.label).collect();
    assert_eq!(
        labels,
        ["Area", "Category", "Region", "Status", "Hours", "Verified"]
    );
}

#[test]
fn related_caps_at_three_in_source_order() {
    let mut listings = vec![listing(Some("cur"), "Current", Some("beach"), Some("south"))];
    for i in 1..=5 {
        listings.push(listing(
            Some(&format!("l{i}")),
            &format!("L{i}"),
            Some("beach"),
            Some("north"),
        ));
    }

    let picks = related(&listings, &listings[0]);
    let ids: Vec<&str> = picks.iter().filter_map(|item| item.id.as_deref()).collect();
    assert_eq!(ids, ["l1", "l2", "l3"]);
}

#[test]
fn related_requires_a_shared_facet() {
    let listings = vec![
        listing(Some("cur"), "Current", Some("beach"), Some("south")),
        listing(Some("far"), "Far", Some("hike"), Some("north")),
    ];
    assert!(related(&listings, &listings[0]).is_empty());
}

#[test]
fn neighbors_follow_source_order() {
    let listings = vec![
        listing(Some("x"), "X", Some("beach"), Some("south")),
        listing(Some("y"), "Y", Some("hike"), Some("north")),
        listing(Some("z"), "Z", Some("bar"), Some("central")),
    ];

    let (prev, next) = neighbors(&listings, &listings[1]);
    assert_eq!(prev.and_then(|l| l.id.as_deref()), Some("x"));
    assert_eq!(next.and_then(|l| l.id.as_deref()), Some("z"));

    let (prev, next) = neighbors(&listings, &listings[0]);
    assert!(prev.is_none());
    assert_eq!(next.and_then(|l| l.id.as_deref()), Some("y"));

    let (_, next) = neighbors(&listings, &listings[2]);
    assert!(next.is_none());
}

#[test]
fn unknown_id_resolves_to_nothing() {
    assert!(detail_view(&sample_listings(), "nope").is_none());
}

#[test]
fn overview_appends_attribution_to_summary() {
    let view = detail_view(&sample_listings(), "blue-beach-cafe").expect("listing resolves");
    assert_eq!(
        view.overview,
        "Seaside coffee stand. This listing is curated for Americans living on Okinawa Main Island."
    );
}

#[test]
fn tagless_listing_falls_back_on_fixed_copy() {
    let view = detail_view(&sample_listings(), "kouri-ocean-tower").expect("listing resolves");
    assert_eq!(
        view.highlights,
        ["Admin curated", "Verify details before visiting"]
    );
    assert_eq!(view.good_for, ["Local favorite"]);
}

#[test]
fn log_entries_default_author_and_note() {
    let mut spot = listing(Some("x"), "Spot", Some("beach"), Some("north"));
    spot.verification_log = vec![VerificationEntry {
        date: Some("2024-01-02".to_string()),
        by: None,
        note: None,
    }];
    let listings = vec![spot];

    let view = detail_view(&listings, "x").expect("listing resolves");
    assert_eq!(view.log.len(), 1);
    assert_eq!(view.log[0].date, "01/02/2024");
    assert_eq!(view.log[0].by, "Admin");
    assert_eq!(view.log[0].note, "Update logged.");
}

#[test]
fn map_href_prefers_the_admin_override() {
    let mut spot = listing(Some("x"), "Blue Beach Cafe", Some("beach"), Some("north"));
    spot.area = Some("Onna".to_string());
    assert_eq!(
        map_search_href(&spot),
        "https://www.google.com/maps/search/?api=1&query=Blue+Beach+Cafe+Onna+Okinawa"
    );

    spot.map_query = Some("Maeda Point".to_string());
    assert_eq!(
        map_search_href(&spot),
        "https://www.google.com/maps/search/?api=1&query=Maeda+Point"
    );
}

#[test]
fn category_view_is_exact_and_id_gated() {
    let cards = category_view(&sample_listings(), "hike");
    let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, ["Goya Ridge Hike", "Araha Taco Stand"]);

    assert_eq!(
        cards[0].href.as_deref(),
        Some("/listing.html?id=goya-ridge-hike")
    );
    // Preview-only entry: the external link never becomes an href.
    assert!(cards[1].href.is_none());
}
