use crate::domain::category::CategoryCard;
use crate::domain::detail::SITE_NAME;
use crate::templates::components::category_card;
use crate::templates::pages::UNAVAILABLE;
use crate::templates::site_layout;
use maud::{html, Markup};

fn category_shell(label: &str, content: Markup) -> Markup {
    site_layout(
        &format!("{label} | {SITE_NAME}"),
        html! {
            main class="container" {
                nav class="breadcrumb" {
                    a href="/index.html#directory" { "Home" }
                    " / "
                    span { (label) }
                }
                section class="hero" {
                    h1 { (label) }
                    p class="muted" { "Admin-curated picks in this category." }
                }
                (content)
            }
        },
    )
}

pub fn category_page(label: &str, cards: &[CategoryCard]) -> Markup {
    category_shell(
        label,
        html! {
            div id="category-list" class="grid" {
                @for card in cards {
                    (category_card(card))
                }
            }
        },
    )
}

pub fn category_unavailable_page(label: &str) -> Markup {
    category_shell(
        label,
        html! {
            div id="category-list" class="grid" {
                p class="muted" { (UNAVAILABLE) }
            }
        },
    )
}
