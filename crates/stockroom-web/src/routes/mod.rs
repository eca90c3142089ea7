pub mod catalog;
pub mod items;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(items::list_items).post(items::add_item))
        .route("/items/:item_id", get(items::item_detail))
        .route("/items/:item_id/edit", post(items::edit_item))
        .route("/catalog", get(catalog::catalog))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
