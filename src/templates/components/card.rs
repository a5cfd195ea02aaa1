use crate::domain::card::ListingCard;
use crate::domain::category::CategoryCard;
use crate::domain::detail::{LogCard, RelatedCard};
use crate::templates::components::{badge, chip_row};
use maud::{html, Markup};

/// Directory grid card. Hidden cards stay in the grid so positions are
/// stable across filter changes.
pub fn listing_card(card: &ListingCard, visible: bool) -> Markup {
    html! {
        article class="card" hidden[!visible] {
            div class="card-top" {
                (badge(card.badge))
                span class="tag" { (card.region_tag) }
            }
            h3 { (card.name) }
            p class="muted" { (card.summary) }
            div class="card-meta" {
                @for line in &card.meta {
                    span { (line) }
                }
            }
            (chip_row(&card.tags))
            @if let Some(href) = &card.href {
                a class="btn ghost small" href=(href) { "View details" }
            } @else {
                button class="btn ghost small" type="button" { "Preview soon" }
            }
        }
    }
}

pub fn category_card(card: &CategoryCard) -> Markup {
    html! {
        article class="category-card" {
            (badge(card.badge))
            h3 { (card.name) }
            p class="muted" { (card.summary) }
            @if let Some(href) = &card.href {
                a class="btn small" href=(href) { "View details" }
            } @else {
                button class="btn ghost small" type="button" { "Preview soon" }
            }
        }
    }
}

pub fn related_card(card: &RelatedCard) -> Markup {
    html! {
        article class="category-card" {
            (badge(card.badge))
            h3 { (card.name) }
            p class="muted" { (card.summary) }
            @if let Some(href) = &card.href {
                a class="btn small" href=(href) { "View details" }
            } @else {
                button class="btn ghost small" type="button" { "Preview soon" }
            }
        }
    }
}

pub fn log_card(entry: &LogCard) -> Markup {
    html! {
        article class="category-card" {
            (badge(&entry.date))
            h3 { (entry.by) }
            p class="muted" { (entry.note) }
        }
    }
}
