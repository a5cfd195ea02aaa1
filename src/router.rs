use crate::domain::category::category_view;
use crate::domain::detail::detail_view;
use crate::domain::filter::{directory_view, FilterState};
use crate::domain::labels::category_label;
use crate::errors::ServerError;
use crate::responses::{bytes_response, html_response, html_response_with_status, ResultResp};
use crate::store::Store;
use crate::templates::pages;
use astra::Request;
use url::form_urlencoded;

pub fn handle(req: Request, store: &Store) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = parse_query(&req);

    match (method, path) {
        ("GET", "/") | ("GET", "/index.html") => {
            directory(store, FilterState::from_query(&query))
        }

        ("GET", "/listing.html") => {
            let id = query
                .iter()
                .find(|(key, value)| key == "id" && !value.is_empty())
                .map(|(_, value)| value.as_str());
            listing(store, id)
        }

        ("GET", "/data.json") => bytes_response(&mime::APPLICATION_JSON, store.raw()?),

        ("GET", "/static/main.css") => stylesheet(),

        ("GET", other) => match category_page(other) {
            Some((key, label)) => category(store, key, label),
            None => Err(ServerError::NotFound),
        },

        _ => Err(ServerError::NotFound),
    }
}

/// The category pages are fixed at build time: one per entry in the label
/// table. Any other `/category-*.html` path simply does not exist.
fn category_page(path: &str) -> Option<(&str, &'static str)> {
    let key = path.strip_prefix("/category-")?.strip_suffix(".html")?;
    category_label(key).map(|label| (key, label))
}

fn directory(store: &Store, state: FilterState) -> ResultResp {
    match store.load() {
        Ok(listings) => html_response(pages::directory_page(&directory_view(&listings, state))),
        Err(err) => {
            log::warn!("directory view degraded: {err}");
            html_response(pages::directory_unavailable_page())
        }
    }
}

fn listing(store: &Store, id: Option<&str>) -> ResultResp {
    // No id on the URL means not-found before the data resource is touched.
    let Some(id) = id else {
        return html_response_with_status(404, pages::not_found_page());
    };

    let listings = match store.load() {
        Ok(listings) => listings,
        Err(err) => {
            log::warn!("detail view degraded: {err}");
            return html_response_with_status(404, pages::not_found_page());
        }
    };

    match detail_view(&listings, id) {
        Some(view) => html_response(pages::listing_page(&view)),
        None => html_response_with_status(404, pages::not_found_page()),
    }
}

fn category(store: &Store, key: &str, label: &str) -> ResultResp {
    match store.load() {
        Ok(listings) => html_response(pages::category_page(label, &category_view(&listings, key))),
        Err(err) => {
            log::warn!("category view degraded: {err}");
            html_response(pages::category_unavailable_page(label))
        }
    }
}

fn stylesheet() -> ResultResp {
    let bytes = std::fs::read("static/main.css").map_err(|_| ServerError::NotFound)?;
    bytes_response(&mime::TEXT_CSS, bytes)
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    match req.uri().query() {
        Some(q) => form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => Vec::new(),
    }
}
