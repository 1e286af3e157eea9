//! Error types for the storage layer.

use items_core::ItemId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Item not found.
    #[error("Item with id {0} not found")]
    ItemNotFound(ItemId),

    /// Duplicate item - an item with this ID already exists.
    #[error("duplicate item: {0}")]
    DuplicateItem(ItemId),

    /// A writer panicked while holding the store lock.
    #[error("item store lock poisoned")]
    Poisoned,
}
