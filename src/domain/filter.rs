use crate::domain::card::ListingCard;
use crate::domain::listing::Listing;
use std::collections::BTreeSet;
use url::form_urlencoded;

/// Sentinel filter key that matches every listing.
pub const ALL: &str = "all";

/// Directory view state: the active filter set and the search term. Owned by
/// the directory view for the duration of one request; every mutation is a
/// pure function returning the next state, which the page serializes back
/// into link hrefs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: BTreeSet<String>,
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        let mut active = BTreeSet::new();
        active.insert(ALL.to_string());
        Self {
            active,
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Rebuilds the state from decoded request query pairs
    /// (repeated `filter` keys plus an optional `q` term).
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let mut state = FilterState::default();
        for (key, value) in pairs {
            match key.as_str() {
                "filter" if !value.is_empty() && value != ALL => {
                    state.active.remove(ALL);
                    state.active.insert(value.clone());
                }
                "q" => state.search = value.clone(),
                _ => {}
            }
        }
        state
    }

    /// The state after clicking `key`. `all` clears every specific filter;
    /// a specific key toggles its own membership, and emptying the set
    /// reverts to `{all}`.
    pub fn toggle(&self, key: &str) -> Self {
        let mut next = self.clone();
        if key == ALL {
            next.active.clear();
            next.active.insert(ALL.to_string());
            return next;
        }
        next.active.remove(ALL);
        if !next.active.remove(key) {
            next.active.insert(key.to_string());
        }
        if next.active.is_empty() {
            next.active.insert(ALL.to_string());
        }
        next
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains(key)
    }

    /// Specific (non-`all`) active keys, in deterministic order.
    pub fn specific(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str).filter(|k| *k != ALL)
    }

    /// Filter match: `{all}` passes everything, otherwise the card's
    /// category or region key must be in the active set (OR, not AND).
    pub fn matches_filters(&self, card: &ListingCard) -> bool {
        if self.active.contains(ALL) {
            return true;
        }
        self.active.contains(card.category_key.as_str())
            || self.active.contains(card.region_key.as_str())
    }

    /// Visibility: filter match AND search match.
    pub fn matches(&self, card: &ListingCard) -> bool {
        self.matches_filters(card) && card.matches_search(&self.search)
    }

    /// Percent-encoded query string carrying this state in link hrefs.
    /// Empty when the state is the default.
    pub fn to_query(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for key in self.specific() {
            ser.append_pair("filter", key);
        }
        if !self.search.is_empty() {
            ser.append_pair("q", &self.search);
        }
        ser.finish()
    }
}

/// The directory grid for one request: every card in source order with its
/// visibility flag, plus the visible count. Filtering only hides cards, so
/// grid positions are stable across filter changes.
#[derive(Debug)]
pub struct DirectoryView {
    pub state: FilterState,
    pub cards: Vec<(ListingCard, bool)>,
    pub visible: usize,
}

pub fn directory_view(listings: &[Listing], state: FilterState) -> DirectoryView {
    let cards: Vec<(ListingCard, bool)> = listings
        .iter()
        .map(|listing| {
            let card = ListingCard::from_listing(listing);
            let visible = state.matches(&card);
            (card, visible)
        })
        .collect();
    let visible = cards.iter().filter(|(_, shown)| *shown).count();
    DirectoryView {
        state,
        cards,
        visible,
    }
}
