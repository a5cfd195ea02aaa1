use crate::responses::error_to_response;
use crate::router::handle;
use crate::store::Store;
use astra::Server;
use std::net::SocketAddr;

mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod templates;


fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let data = std::env::var("ATLAS_DATA").unwrap_or_else(|_| "data/data.json".to_string());
    let store = Store::new(data);

    // Probe the data resource once so a bad path shows up at startup.
    // Page views degrade on their own if it goes away later.
    match store.load() {
        Ok(listings) => log::info!(
            "Loaded {} listings from {}",
            listings.len(),
            store.location()
        ),
        Err(err) => log::warn!("Data resource unavailable at startup: {err}"),
    }

    let addr: SocketAddr = std::env::var("ATLAS_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("ATLAS_ADDR must be a socket address");

    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
