//! Static reference data for item forms
//!
//! The selectable regions, item types, and delivery codes every item form
//! offers. This is presentation-layer configuration; the store persists
//! whatever codes it is handed without consulting these tables.

use serde::Serialize;
use stockroom_core::ItemType;

/// Selectable sales region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub code: &'static str,
    pub label: &'static str,
}

/// Delivery option offered on the item form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryCode {
    pub code: &'static str,
    pub display_name: &'static str,
}

/// Item type option with its wire code and description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTypeOption {
    pub code: &'static str,
    pub description: &'static str,
}

/// Regions in display order
pub const REGIONS: [Region; 3] = [
    Region {
        code: "SEOUL",
        label: "Seoul",
    },
    Region {
        code: "BUSAN",
        label: "Busan",
    },
    Region {
        code: "JEJU",
        label: "Jeju",
    },
];

/// Delivery codes in display order
pub const DELIVERY_CODES: [DeliveryCode; 3] = [
    DeliveryCode {
        code: "FAST",
        display_name: "Fast delivery",
    },
    DeliveryCode {
        code: "NORMAL",
        display_name: "Normal delivery",
    },
    DeliveryCode {
        code: "SLOW",
        display_name: "Slow delivery",
    },
];

/// Item type options in declaration order
pub fn item_type_options() -> Vec<ItemTypeOption> {
    ItemType::ALL
        .iter()
        .map(|item_type| ItemTypeOption {
            code: item_type.code(),
            description: item_type.description(),
        })
        .collect()
}
