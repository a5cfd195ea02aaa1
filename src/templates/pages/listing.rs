use crate::domain::detail::{
    DetailView, NOT_FOUND_BREADCRUMB, NOT_FOUND_NAME, NOT_FOUND_NOTE, NOT_FOUND_OVERVIEW,
    NOT_FOUND_SUMMARY, SITE_NAME,
};
use crate::templates::components::{log_card, related_card};
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn listing_page(view: &DetailView) -> Markup {
    site_layout(
        &view.title,
        html! {
            main class="container" {
                nav class="breadcrumb" {
                    a href="/index.html#directory" { "Home" }
                    " / "
                    @if let Some(href) = &view.breadcrumb_category_href {
                        a id="breadcrumb-category-link" href=(href) { (view.breadcrumb_category) }
                    } @else {
                        span { (view.breadcrumb_category) }
                    }
                    " / "
                    span id="breadcrumb-listing" { (view.name) }
                }

                section class="hero" {
                    h1 id="listing-name" { (view.name) }
                    p id="listing-summary" class="muted" { (view.summary) }
                    div id="listing-chips" class="chip-row" {
                        @for chip in &view.chips {
                            span class="chip" { (chip) }
                        }
                    }
                }

                section class="detail-grid" {
                    article class="detail-main" {
                        h2 { "Overview" }
                        p id="listing-overview" { (view.overview) }

                        h2 { "Highlights" }
                        ul id="listing-highlights" {
                            @for item in &view.highlights {
                                li { (item) }
                            }
                        }

                        h2 { "Admin note" }
                        p id="listing-note" class="muted" { (view.note) }

                        h2 { "Verification log" }
                        div id="verification-log" class="grid" {
                            @if view.log.is_empty() {
                                p class="muted" { "No verification history yet." }
                            } @else {
                                @for entry in &view.log {
                                    (log_card(entry))
                                }
                            }
                        }
                    }

                    aside class="detail-side" {
                        h2 { "Quick facts" }
                        div id="quick-facts" class="facts" {
                            @for fact in &view.quick_facts {
                                span { (fact.label) ": " (fact.value) }
                            }
                        }
                        a id="map-link" class="btn small" href=(view.map_href) { "Open in Maps" }

                        h2 { "Good for" }
                        div id="good-for" class="chip-row" {
                            @for tag in &view.good_for {
                                span class="chip" { (tag) }
                            }
                        }
                    }
                }

                section {
                    h2 { "Related listings" }
                    div id="related-grid" class="grid" {
                        @if view.related.is_empty() {
                            p class="muted" { "No related listings yet." }
                        } @else {
                            @for card in &view.related {
                                (related_card(card))
                            }
                        }
                    }
                }

                nav id="listing-nav" class="listing-nav" {
                    (nav_link("Previous", view.prev_href.as_deref()))
                    a class="filter-btn" href="/index.html#directory" { "Back to directory" }
                    (nav_link("Next", view.next_href.as_deref()))
                }
            }
        },
    )
}

fn nav_link(label: &str, href: Option<&str>) -> Markup {
    html! {
        @if let Some(href) = href {
            a class="filter-btn is-active" href=(href) { (label) }
        } @else {
            span class="filter-btn is-disabled" { (label) }
        }
    }
}

/// Terminal not-found state: fixed copy, no facts, related or nav sections.
pub fn not_found_page() -> Markup {
    site_layout(
        &format!("{NOT_FOUND_NAME} | {SITE_NAME}"),
        html! {
            main class="container" {
                nav class="breadcrumb" {
                    a href="/index.html#directory" { "Home" }
                    " / "
                    span id="breadcrumb-listing" { (NOT_FOUND_BREADCRUMB) }
                }
                section class="hero" {
                    h1 id="listing-name" { (NOT_FOUND_NAME) }
                    p id="listing-summary" class="muted" { (NOT_FOUND_SUMMARY) }
                    div id="listing-chips" class="chip-row" {}
                }
                section {
                    p id="listing-overview" { (NOT_FOUND_OVERVIEW) }
                    p id="listing-note" class="muted" { (NOT_FOUND_NOTE) }
                }
            }
        },
    )
}
