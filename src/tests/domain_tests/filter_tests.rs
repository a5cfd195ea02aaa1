use crate::domain::card::ListingCard;
use crate::domain::filter::{directory_view, FilterState, ALL};
use crate::tests::utils::listing;

fn state_with(keys: &[&str]) -> FilterState {
    let pairs: Vec<(String, String)> = keys
        .iter()
        .map(|key| ("filter".to_string(), key.to_string()))
        .collect();
    FilterState::from_query(&pairs)
}

#[test]
fn filters_or_across_category_and_region() {
    let listings = vec![
        listing(Some("a"), "A", Some("beach"), Some("south")),
        listing(Some("b"), "B", Some("hike"), Some("north")),
    ];

    let both = directory_view(&listings, state_with(&["beach", "north"]));
    assert_eq!(both.visible, 2);

    let beach_only = directory_view(&listings, state_with(&["beach"]));
    assert_eq!(beach_only.visible, 1);
    assert!(beach_only.cards[0].1);
    assert!(!beach_only.cards[1].1);
}

#[test]
fn all_clears_specific_filters() {
    let state = state_with(&["beach", "north"]);
    let reset = state.toggle(ALL);
    assert!(reset.is_active(ALL));
    assert!(!reset.is_active("beach"));
    assert!(!reset.is_active("north"));
}

#[test]
fn toggling_last_specific_filter_reverts_to_all() {
    let state = state_with(&["beach"]);
    assert!(!state.is_active(ALL));
    assert!(state.toggle("beach").is_active(ALL));
}

#[test]
fn specific_filters_accumulate_and_drop_all() {
    let first = FilterState::default().toggle("beach");
    assert!(first.is_active("beach"));
    assert!(!first.is_active(ALL));

    let second = first.toggle("north");
    assert!(second.is_active("beach"));
    assert!(second.is_active("north"));
}

#[test]
fn search_is_substring_and_case_insensitive() {
    let cafe = listing(
        Some("cafe"),
        "Blue Beach Cafe",
        Some("local-eats"),
        Some("north"),
    );
    let card = ListingCard::from_listing(&cafe);
    assert!(card.matches_search(""));
    assert!(card.matches_search("cafe"));
    assert!(card.matches_search("BEACH"));
    assert!(!card.matches_search("mountain"));
}

#[test]
fn search_reaches_tags_and_meta_facts() {
    let mut spot = listing(Some("x"), "Spot", Some("hike"), Some("north"));
    spot.tags = vec!["waterfall".to_string()];
    spot.status = Some("Seasonal".to_string());

    let card = ListingCard::from_listing(&spot);
    assert!(card.matches_search("waterfall"));
    assert!(card.matches_search("seasonal"));
}

#[test]
fn filtering_hides_without_reordering() {
    let listings = vec![
        listing(Some("a"), "A", Some("beach"), Some("south")),
        listing(Some("b"), "B", Some("hike"), Some("north")),
        listing(Some("c"), "C", Some("beach"), Some("central")),
    ];

    let view = directory_view(&listings, state_with(&["beach"]));
    let names: Vec<&str> = view.cards.iter().map(|(card, _)| card.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);

    let shown: Vec<bool> = view.cards.iter().map(|(_, shown)| *shown).collect();
    assert_eq!(shown, [true, false, true]);
    assert_eq!(view.visible, 2);
}

#[test]
fn state_survives_a_query_round_trip() {
    let mut state = state_with(&["beach"]);
    state.search = "sea view".to_string();

    let query = state.to_query();
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    assert_eq!(FilterState::from_query(&pairs), state);
}
