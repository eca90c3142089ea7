use axum::Json;
use serde::Serialize;

use crate::catalog::{item_type_options, DeliveryCode, ItemTypeOption, Region, DELIVERY_CODES, REGIONS};

/// Reference data bundle served to item forms
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub regions: Vec<Region>,
    pub item_types: Vec<ItemTypeOption>,
    pub delivery_codes: Vec<DeliveryCode>,
}

/// Serve the selectable regions, item types, and delivery codes
pub async fn catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        regions: REGIONS.to_vec(),
        item_types: item_type_options(),
        delivery_codes: DELIVERY_CODES.to_vec(),
    })
}
