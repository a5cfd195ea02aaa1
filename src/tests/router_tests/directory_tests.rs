use crate::router::handle;
use crate::tests::utils::{body_string, broken_store, get, sample_store, SAMPLE};

#[test]
fn directory_renders_every_card_with_count() {
    let store = sample_store();
    let mut resp = handle(get("/"), &store).expect("directory renders");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Blue Beach Cafe"));
    assert!(body.contains("Goya Ridge Hike"));
    assert!(body.contains("Kouri Ocean Tower"));
    assert!(body.contains("Araha Taco Stand"));
    assert!(body.contains(r#"<span id="listing-count">4</span>"#));
}

#[test]
fn filtering_hides_cards_in_place() {
    let store = sample_store();
    let mut resp = handle(get("/?filter=beach"), &store).expect("directory renders");
    let body = body_string(&mut resp);

    // The grid keeps all four cards; the two non-beach ones are hidden.
    assert_eq!(body.matches(r#"<article class="card""#).count(), 4);
    assert_eq!(body.matches(r#"<article class="card" hidden>"#).count(), 2);
    assert!(body.contains(r#"<span id="listing-count">2</span>"#));
}

#[test]
fn filters_combine_as_or() {
    let store = sample_store();
    let mut resp = handle(get("/?filter=beach&filter=north"), &store).expect("directory renders");
    let body = body_string(&mut resp);

    // beach matches two, north adds the ridge hike; only the central
    // taco stand stays hidden.
    assert!(body.contains(r#"<span id="listing-count">3</span>"#));
}

#[test]
fn search_narrows_case_insensitively() {
    let store = sample_store();
    let mut resp = handle(get("/?q=CAFE"), &store).expect("directory renders");
    let body = body_string(&mut resp);
    assert!(body.contains(r#"<span id="listing-count">1</span>"#));
}

#[test]
fn search_composes_with_filters() {
    let store = sample_store();
    let mut resp = handle(get("/?filter=north&q=tower"), &store).expect("directory renders");
    let body = body_string(&mut resp);
    assert!(body.contains(r#"<span id="listing-count">1</span>"#));
}

#[test]
fn active_filter_button_links_back_to_the_reset_state() {
    let store = sample_store();
    let mut resp = handle(get("/?filter=beach"), &store).expect("directory renders");
    let body = body_string(&mut resp);

    // Toggling the only active filter off reverts to the default state.
    assert!(body.contains(r#"href="/#directory""#));
}

#[test]
fn degraded_directory_keeps_the_page_up() {
    let store = broken_store();
    let mut resp = handle(get("/"), &store).expect("degraded page renders");
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Unable to load listings right now."));
}

#[test]
fn data_resource_is_served_verbatim() {
    let store = sample_store();
    let mut resp = handle(get("/data.json"), &store).expect("resource serves");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").map(|v| v.as_bytes()),
        Some("application/json".as_bytes())
    );
    assert_eq!(body_string(&mut resp), SAMPLE);
}
