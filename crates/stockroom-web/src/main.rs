//! Stockroom HTTP server
//!
//! Builds one store instance, seeds the demo items, and serves the item
//! routes until the process is stopped.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use stockroom_core::logging::{self, Profile};
use stockroom_core::ItemStore;
use stockroom_web::seed::seed_demo_items;
use stockroom_web::{build_router, AppState};
use tracing::info;

/// Load host/port from env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    Ok(format!("{host}:{port}").parse()?)
}

fn select_profile() -> Profile {
    match env::var("STOCKROOM_PROFILE").as_deref() {
        Ok("production") => Profile::Production,
        _ => Profile::Development,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init(select_profile());

    let store = Arc::new(ItemStore::new());
    seed_demo_items(&store);

    let app = build_router(AppState::new(store));
    let addr = load_bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "stockroom server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
