//! Item service: business operations over an injected `ItemStore`.
//!
//! The service assigns ids and timestamps, applies list filters and
//! pagination, and turns missing records into `StoreError::ItemNotFound`.
//! Input is expected to be validated already (see `items_core::validation`).

use std::sync::Arc;

use items_core::{
    CreateItemInput, Item, ItemId, ListQuery, Page, Pagination, UpdateItemInput, next_timestamp,
    now_millis,
};

use crate::error::{StoreError, StoreResult};
use crate::store::{ItemStore, MemoryStore};

/// CRUD operations for catalog items.
#[derive(Debug, Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Create a service over a fresh `MemoryStore`.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.store
    }

    /// Create an item with a fresh id and equal creation/update timestamps.
    pub fn create(&self, input: CreateItemInput) -> StoreResult<Item> {
        let item = Item::new(ItemId::new(), input, now_millis());
        let item = self.store.insert(item)?;

        tracing::info!(item_id = %item.id, category = %item.category, "Created item");
        Ok(item)
    }

    /// List items matching `query`.
    ///
    /// The category filter runs before the search filter; `total` counts
    /// matches before paging. A page past the end yields empty `data` with
    /// the true `total` and `total_pages`.
    pub fn find_all(&self, query: &ListQuery) -> StoreResult<Page<Item>> {
        let mut items = self.store.list()?;

        if let Some(category) = &query.category {
            items.retain(|item| item.in_category(category));
        }
        if let Some(search) = &query.search {
            items.retain(|item| item.matches_search(search));
        }

        let total = items.len() as u64;
        let data: Vec<Item> = items
            .into_iter()
            .skip(query.offset())
            .take(query.limit as usize)
            .collect();

        tracing::debug!(
            page = query.page,
            limit = query.limit,
            total,
            returned = data.len(),
            "Listed items"
        );

        Ok(Page {
            data,
            pagination: Pagination::new(query.page, query.limit, total),
        })
    }

    /// Get an item by id.
    pub fn find_by_id(&self, id: ItemId) -> StoreResult<Item> {
        let item = self.store.get(id)?;
        tracing::debug!(item_id = %id, found = item.is_some(), "Looked up item");
        item.ok_or(StoreError::ItemNotFound(id))
    }

    /// Merge `changes` over an existing item and refresh `updated_at`.
    ///
    /// Fields absent from `changes` are left untouched; `updated_at` always
    /// moves forward, even for an empty update.
    pub fn update(&self, id: ItemId, changes: UpdateItemInput) -> StoreResult<Item> {
        let item = self
            .store
            .update(id, &mut |item| {
                item.apply(&changes);
                item.updated_at = next_timestamp(item.updated_at);
            })?
            .ok_or(StoreError::ItemNotFound(id))?;

        tracing::info!(item_id = %id, "Updated item");
        Ok(item)
    }

    /// Delete an item.
    pub fn delete(&self, id: ItemId) -> StoreResult<()> {
        self.store.remove(id)?.ok_or(StoreError::ItemNotFound(id))?;

        tracing::info!(item_id = %id, "Deleted item");
        Ok(())
    }

    /// Number of stored items.
    pub fn count(&self) -> StoreResult<usize> {
        self.store.len()
    }
}
