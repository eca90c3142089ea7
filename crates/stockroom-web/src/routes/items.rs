use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use serde::Deserialize;
use stockroom_core::{Item, ItemDraft, ItemId};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// List every item in creation order
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list_all())
}

/// Query flags carried by the post/redirect/get flow
#[derive(Debug, Deserialize)]
pub struct DetailParams {
    /// Set by the redirect issued after a successful save
    pub status: Option<bool>,
}

/// Fetch a single item
pub async fn item_detail(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
    Query(params): Query<DetailParams>,
) -> Result<Json<Item>, ApiError> {
    if params.status.unwrap_or(false) {
        debug!(item_id = %item_id, "serving detail after save redirect");
    }
    let item = state.store.find_by_id(item_id)?;
    Ok(Json(item))
}

/// Create an item and redirect to its detail URL
///
/// Post/redirect/get: answering the POST with a 303 pointing at the detail
/// URL keeps a client refresh from re-submitting the creation.
pub async fn add_item(State(state): State<AppState>, Json(draft): Json<ItemDraft>) -> Redirect {
    info!(
        open = ?draft.open,
        regions = ?draft.regions,
        item_type = ?draft.item_type,
        "binding new item"
    );
    let item = state.store.create(draft);
    Redirect::to(&format!("/items/{}?status=true", item.id))
}

/// Replace an item's attributes and redirect to its detail URL
pub async fn edit_item(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
    Json(draft): Json<ItemDraft>,
) -> Result<Redirect, ApiError> {
    state.store.update(item_id, draft)?;
    Ok(Redirect::to(&format!("/items/{item_id}")))
}
