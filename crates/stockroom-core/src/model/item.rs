use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item_type::ItemType;

/// Identity assigned to an Item at creation, stable for its lifetime
///
/// Identities are positive integers allocated from a monotonically
/// increasing counter: they are never reused, and ascending identity order
/// is creation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw identity value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw identity value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item - the persisted catalog entity
///
/// The identity and the two timestamps are store-managed: the identity is
/// assigned at creation and immutable, `created_at` survives updates, and
/// `updated_at` is bumped by every update. Every other field is an
/// attribute the store persists verbatim without interpreting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identity
    pub id: ItemId,

    /// Display label; the store performs no validation on it
    pub name: String,

    /// Unit-less, non-negative price
    pub price: u32,

    /// Stocked count
    pub quantity: u32,

    /// Whether the item is open for sale
    pub open: Option<bool>,

    /// Classification selected on the item form
    pub item_type: Option<ItemType>,

    /// Selected sales region codes
    pub regions: Vec<String>,

    /// Selected delivery code
    pub delivery_code: Option<String>,

    /// Timestamp when this item was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this item was last updated
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Materialize a stored item from a draft and a store-assigned identity
    pub(crate) fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
            open: draft.open,
            item_type: draft.item_type,
            regions: draft.regions,
            delivery_code: draft.delivery_code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every non-identity attribute with the draft's
    ///
    /// This is a full replace, not a merge: attributes the draft leaves
    /// unset come through as their unset values. `created_at` is store
    /// metadata and survives; `updated_at` is bumped.
    pub(crate) fn replace_attributes(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.quantity = draft.quantity;
        self.open = draft.open;
        self.item_type = draft.item_type;
        self.regions = draft.regions;
        self.delivery_code = draft.delivery_code;
        self.updated_at = Utc::now();
    }
}

/// Identity-less input accepted by create and update
///
/// Carries the full attribute set of an item minus the store-managed
/// fields. The optional attributes default to unset so a caller binding a
/// partial payload gets the same reset-on-absence behavior as one passing
/// the struct directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: u32,
    pub quantity: u32,
    #[serde(default)]
    pub open: Option<bool>,
    #[serde(default)]
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub delivery_code: Option<String>,
}

impl ItemDraft {
    /// Draft with the display fields set and every extended attribute unset
    pub fn new(name: impl Into<String>, price: u32, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            ..Self::default()
        }
    }
}
