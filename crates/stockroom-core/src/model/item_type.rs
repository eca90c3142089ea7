use serde::{Deserialize, Serialize};

/// Classification selectable on the item form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Book,
    Food,
    Etc,
}

impl ItemType {
    /// All variants in declaration order
    pub const ALL: [ItemType; 3] = [ItemType::Book, ItemType::Food, ItemType::Etc];

    /// Stable wire code
    pub fn code(&self) -> &'static str {
        match self {
            ItemType::Book => "BOOK",
            ItemType::Food => "FOOD",
            ItemType::Etc => "ETC",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ItemType::Book => "Book",
            ItemType::Food => "Food",
            ItemType::Etc => "Etc.",
        }
    }
}
