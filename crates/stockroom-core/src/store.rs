use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::errors::{Result, StockroomError};
use crate::model::{Item, ItemDraft, ItemId};

/// In-memory store for Items
///
/// Holds the authoritative item collection for the process lifetime and
/// exposes identity-stable CRUD primitives. The collection and the identity
/// counter form one shared resource guarded by one lock, so concurrent
/// callers always observe a consistent state and no two creates race to the
/// same identity.
///
/// The store is an explicitly constructed value: consumers receive an
/// instance (typically behind `Arc`) rather than reaching for ambient
/// global state, so tests can build isolated stores freely.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Items keyed by identity. Identities are allocated monotonically, so
    /// ascending key order is creation order.
    items: BTreeMap<ItemId, Item>,
    /// Last identity handed out; 0 means none yet.
    last_id: u64,
}

impl ItemStore {
    /// Create a new empty ItemStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new item built from the draft and return the stored form
    ///
    /// Assigns the next identity from the monotonic counter (the first item
    /// gets identity 1), stamps the timestamps, and stores a copy. Never
    /// fails; capacity is unbounded.
    pub fn create(&self, draft: ItemDraft) -> Item {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let id = ItemId::new(inner.last_id);
        let item = Item::from_draft(id, draft);
        inner.items.insert(id, item.clone());
        debug!(item_id = %id, name = %item.name, "item created");
        item
    }

    /// Snapshot of all items in creation order
    ///
    /// The returned vector owns its items: later mutation of the store does
    /// not alter an already-returned snapshot. No guarantee is made across
    /// separate calls that the store has not changed between them.
    pub fn list_all(&self) -> Vec<Item> {
        let inner = self.inner.read();
        inner.items.values().cloned().collect()
    }

    /// Fetch the item with the given identity
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item with that identity exists. The
    /// lookup never creates a default entity.
    pub fn find_by_id(&self, id: ItemId) -> Result<Item> {
        let inner = self.inner.read();
        inner
            .items
            .get(&id)
            .cloned()
            .ok_or(StockroomError::ItemNotFound { item_id: id })
    }

    /// Replace the non-identity attributes of the item at `id`
    ///
    /// Full replace, not a partial merge: every attribute takes the draft's
    /// value, so anything the draft leaves unset is reset rather than
    /// preserved. The identity and `created_at` survive; `updated_at` is
    /// bumped.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item with that identity exists.
    pub fn update(&self, id: ItemId, draft: ItemDraft) -> Result<()> {
        let mut inner = self.inner.write();
        let item = inner
            .items
            .get_mut(&id)
            .ok_or(StockroomError::ItemNotFound { item_id: id })?;
        item.replace_attributes(draft);
        debug!(item_id = %id, "item updated");
        Ok(())
    }
}
