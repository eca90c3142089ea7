use stockroom_core::{ItemDraft, ItemStore};
use tracing::info;

/// Insert the two demo items the storefront starts with
///
/// Called from the server binary at startup; tests reuse it when they want
/// a pre-populated store.
pub fn seed_demo_items(store: &ItemStore) {
    let first = store.create(ItemDraft::new("itemA", 10_000, 10));
    let second = store.create(ItemDraft::new("itemB", 20_000, 20));
    info!(first = %first.id, second = %second.id, "seeded demo items");
}
