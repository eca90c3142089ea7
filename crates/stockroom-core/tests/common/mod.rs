use stockroom_core::{ItemDraft, ItemStore, ItemType};

/// Create a new empty ItemStore for testing
#[allow(dead_code)]
pub fn new_store() -> ItemStore {
    ItemStore::new()
}

/// Draft with only the display fields set, extended attributes unset
#[allow(dead_code)]
pub fn draft(name: &str, price: u32, quantity: u32) -> ItemDraft {
    ItemDraft::new(name, price, quantity)
}

/// Draft with every extended attribute populated
#[allow(dead_code)]
pub fn full_draft(name: &str, price: u32, quantity: u32) -> ItemDraft {
    let mut draft = ItemDraft::new(name, price, quantity);
    draft.open = Some(true);
    draft.item_type = Some(ItemType::Book);
    draft.regions = vec!["SEOUL".to_string(), "BUSAN".to_string()];
    draft.delivery_code = Some("FAST".to_string());
    draft
}
