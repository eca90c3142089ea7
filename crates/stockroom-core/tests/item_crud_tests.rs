mod common;

use common::{draft, full_draft, new_store};
use stockroom_core::{ItemId, StockroomError};

// ===== CREATE TESTS =====

#[test]
fn test_create_assigns_identities_one_and_two() {
    let store = new_store();

    let item_a = store.create(draft("itemA", 10_000, 10));
    let item_b = store.create(draft("itemB", 20_000, 20));

    assert_eq!(item_a.id, ItemId::new(1));
    assert_eq!(item_b.id, ItemId::new(2));
}

#[test]
fn test_create_then_find_round_trips() {
    let store = new_store();

    let created = store.create(full_draft("itemA", 10_000, 10));
    let found = store.find_by_id(created.id).unwrap();

    assert_eq!(found, created);
}

#[test]
fn test_create_stamps_matching_timestamps() {
    let store = new_store();

    let item = store.create(draft("itemA", 10_000, 10));

    assert_eq!(item.created_at, item.updated_at);
}

#[test]
fn test_create_preserves_extended_attributes_verbatim() {
    let store = new_store();

    let created = store.create(full_draft("itemA", 10_000, 10));

    assert_eq!(created.open, Some(true));
    assert_eq!(created.regions, vec!["SEOUL", "BUSAN"]);
    assert_eq!(created.delivery_code.as_deref(), Some("FAST"));
}

// ===== LIST TESTS =====

#[test]
fn test_list_all_returns_items_in_creation_order() {
    let store = new_store();

    store.create(draft("itemA", 10_000, 10));
    store.create(draft("itemB", 20_000, 20));
    store.create(draft("itemC", 30_000, 30));

    let items = store.list_all();
    assert_eq!(items.len(), 3);
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["itemA", "itemB", "itemC"]);
}

#[test]
fn test_list_all_snapshot_is_immune_to_later_mutation() {
    let store = new_store();
    let item = store.create(draft("itemA", 10_000, 10));

    let snapshot = store.list_all();
    store
        .update(item.id, draft("itemA-updated", 15_000, 5))
        .unwrap();
    store.create(draft("itemB", 20_000, 20));

    // The earlier snapshot still shows the pre-mutation state.
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "itemA");
    assert_eq!(snapshot[0].price, 10_000);
}

// ===== FIND TESTS =====

#[test]
fn test_find_by_id_fails_on_empty_store() {
    let store = new_store();
    let result = store.find_by_id(ItemId::new(999));

    assert!(matches!(result, Err(StockroomError::ItemNotFound { .. })));
}

#[test]
fn test_find_by_id_fails_on_unassigned_identity() {
    let store = new_store();
    store.create(draft("itemA", 10_000, 10));

    let result = store.find_by_id(ItemId::new(999));

    assert!(matches!(
        result,
        Err(StockroomError::ItemNotFound { item_id }) if item_id == ItemId::new(999)
    ));
}

// ===== UPDATE TESTS =====

#[test]
fn test_update_replaces_display_fields() {
    let store = new_store();
    let item = store.create(draft("itemA", 10_000, 10));

    store
        .update(item.id, draft("itemA-updated", 15_000, 5))
        .unwrap();

    let updated = store.find_by_id(item.id).unwrap();
    assert_eq!(updated.id, ItemId::new(1));
    assert_eq!(updated.name, "itemA-updated");
    assert_eq!(updated.price, 15_000);
    assert_eq!(updated.quantity, 5);
}

#[test]
fn test_update_is_a_full_replace_not_a_merge() {
    // Replace-not-merge is the store's contract, verified here as an
    // explicit property: attributes the new draft leaves unset are reset,
    // never carried over from the previous state.
    let store = new_store();
    let item = store.create(full_draft("itemA", 10_000, 10));

    store
        .update(item.id, draft("itemA-updated", 15_000, 5))
        .unwrap();

    let updated = store.find_by_id(item.id).unwrap();
    assert!(updated.open.is_none());
    assert!(updated.item_type.is_none());
    assert!(updated.regions.is_empty());
    assert!(updated.delivery_code.is_none());
}

#[test]
fn test_update_preserves_identity_and_created_at() {
    let store = new_store();
    let item = store.create(draft("itemA", 10_000, 10));

    // Wait a tiny bit to ensure the timestamp changes
    std::thread::sleep(std::time::Duration::from_millis(10));

    store
        .update(item.id, draft("itemA-updated", 15_000, 5))
        .unwrap();

    let updated = store.find_by_id(item.id).unwrap();
    assert_eq!(updated.id, item.id);
    assert_eq!(updated.created_at, item.created_at);
    assert!(updated.updated_at > item.updated_at);
}

#[test]
fn test_update_fails_on_unassigned_identity() {
    let store = new_store();
    store.create(draft("itemA", 10_000, 10));

    let result = store.update(ItemId::new(999), draft("ghost", 1, 1));

    assert!(matches!(
        result,
        Err(StockroomError::ItemNotFound { item_id }) if item_id == ItemId::new(999)
    ));
}

#[test]
fn test_update_does_not_change_creation_order() {
    let store = new_store();
    let item_a = store.create(draft("itemA", 10_000, 10));
    store.create(draft("itemB", 20_000, 20));

    // Raising itemA's price must not re-order the listing.
    store
        .update(item_a.id, draft("itemA", 99_000, 10))
        .unwrap();

    let names: Vec<String> = store.list_all().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["itemA", "itemB"]);
}
