pub mod item;
pub mod item_type;

pub use item::{Item, ItemDraft, ItemId};
pub use item_type::ItemType;
