use crate::domain::detail::SITE_NAME;
use crate::domain::filter::{DirectoryView, FilterState, ALL};
use crate::domain::labels::{CATEGORY_LABELS, REGION_LABELS};
use crate::templates::components::{filter_link, listing_card};
use crate::templates::pages::UNAVAILABLE;
use crate::templates::site_layout;
use maud::{html, Markup};

/// Each filter button links to the state that clicking it would produce.
fn filter_href(state: &FilterState, key: &str) -> String {
    let query = state.toggle(key).to_query();
    if query.is_empty() {
        "/#directory".to_string()
    } else {
        format!("/?{query}#directory")
    }
}

fn directory_shell(content: Markup) -> Markup {
    site_layout(
        SITE_NAME,
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Find your spot on the island" }
                    p class="muted" {
                        "An admin-curated directory of places around Okinawa Main Island."
                    }
                }
                section id="directory" {
                    (content)
                }
            }
        },
    )
}

pub fn directory_page(view: &DirectoryView) -> Markup {
    directory_shell(html! {
        div class="filter-bar" {
            (filter_link("All", &filter_href(&view.state, ALL), view.state.is_active(ALL)))
            @for (key, label) in CATEGORY_LABELS {
                (filter_link(label, &filter_href(&view.state, key), view.state.is_active(key)))
            }
            @for (key, label) in REGION_LABELS {
                (filter_link(label, &filter_href(&view.state, key), view.state.is_active(key)))
            }
        }
        form class="search" method="get" action="/" {
            @for key in view.state.specific() {
                input type="hidden" name="filter" value=(key);
            }
            input
                id="search"
                type="search"
                name="q"
                value=(view.state.search)
                placeholder="Search by name, area, or tag";
            button class="btn small" type="submit" { "Search" }
        }
        p class="muted" {
            "Showing " span id="listing-count" { (view.visible) } " listings"
        }
        div id="listing-grid" class="grid" {
            @for (card, visible) in &view.cards {
                (listing_card(card, *visible))
            }
        }
    })
}

pub fn directory_unavailable_page() -> Markup {
    directory_shell(html! {
        div id="listing-grid" class="grid" {
            p class="muted" { (UNAVAILABLE) }
        }
    })
}
