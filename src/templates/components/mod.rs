use maud::{html, Markup};

pub mod card;

pub use card::{category_card, listing_card, log_card, related_card};

pub fn badge(text: &str) -> Markup {
    html! {
        span class="badge" { (text) }
    }
}

pub fn chip_row(labels: &[String]) -> Markup {
    html! {
        div class="chip-row" {
            @for label in labels {
                span class="chip" { (label) }
            }
        }
    }
}

pub fn filter_link(label: &str, href: &str, active: bool) -> Markup {
    html! {
        a class=(if active { "filter-btn is-active" } else { "filter-btn" }) href=(href) { (label) }
    }
}
