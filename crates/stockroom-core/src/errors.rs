use thiserror::Error;

use crate::model::ItemId;

/// Result type alias using StockroomError
pub type Result<T> = std::result::Result<T, StockroomError>;

/// Error taxonomy for store operations
///
/// A single kind is in scope: lookups and updates against an identity that
/// was never assigned fail with `ItemNotFound`. The error is always
/// caller-recoverable; the store neither retries nor suppresses it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockroomError {
    /// Item not found in store
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: ItemId },
}
