//! Storage abstraction and the in-memory implementation.
//!
//! `ItemService` only talks to `dyn ItemStore`, so a database-backed store
//! can replace `MemoryStore` without touching the service logic.

use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use items_core::{Item, ItemId};

use crate::error::{StoreError, StoreResult};

/// Storage operations for item records.
///
/// Implementations must keep ids unique and preserve insertion order in
/// `list`. Every method is atomic with respect to the others.
pub trait ItemStore: Send + Sync + fmt::Debug {
    /// Append a new record. Fails with `DuplicateItem` if the id exists.
    fn insert(&self, item: Item) -> StoreResult<Item>;

    /// Snapshot of all records in insertion order.
    fn list(&self) -> StoreResult<Vec<Item>>;

    /// Look up a record by id.
    fn get(&self, id: ItemId) -> StoreResult<Option<Item>>;

    /// Mutate a record in place. Returns the updated record, or `None` if
    /// the id is unknown.
    fn update(&self, id: ItemId, apply: &mut dyn FnMut(&mut Item)) -> StoreResult<Option<Item>>;

    /// Remove a record. Returns it, or `None` if the id is unknown.
    fn remove(&self, id: ItemId) -> StoreResult<Option<Item>>;

    /// Number of stored records.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory item store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Item>>> {
        self.items.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Item>>> {
        self.items.write().map_err(|_| StoreError::Poisoned)
    }
}

impl ItemStore for MemoryStore {
    fn insert(&self, item: Item) -> StoreResult<Item> {
        let mut items = self.write()?;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::DuplicateItem(item.id));
        }
        items.push(item.clone());
        Ok(item)
    }

    fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        Ok(self.read()?.iter().find(|item| item.id == id).cloned())
    }

    fn update(&self, id: ItemId, apply: &mut dyn FnMut(&mut Item)) -> StoreResult<Option<Item>> {
        let mut items = self.write()?;
        Ok(items.iter_mut().find(|item| item.id == id).map(|item| {
            apply(item);
            item.clone()
        }))
    }

    fn remove(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let mut items = self.write()?;
        let index = items.iter().position(|item| item.id == id);
        Ok(index.map(|index| items.remove(index)))
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items_core::{CreateItemInput, now_millis};

    fn item(name: &str) -> Item {
        Item::new(
            ItemId::new(),
            CreateItemInput {
                name: name.to_string(),
                description: None,
                price: 10.0,
                category: "Misc".to_string(),
                in_stock: true,
            },
            now_millis(),
        )
    }

    #[test]
    fn test_insert_preserves_order() {
        let store = MemoryStore::new();
        store.insert(item("first")).unwrap();
        store.insert(item("second")).unwrap();
        store.insert(item("third")).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let store = MemoryStore::new();
        let original = store.insert(item("first")).unwrap();

        let mut copy = item("copy");
        copy.id = original.id;
        let result = store.insert(copy);

        assert!(matches!(result, Err(StoreError::DuplicateItem(id)) if id == original.id));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_update_mutates_in_place() {
        let store = MemoryStore::new();
        let original = store.insert(item("before")).unwrap();

        let updated = store
            .update(original.id, &mut |i| i.name = "after".to_string())
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "after");
        assert_eq!(store.get(original.id).unwrap().unwrap().name, "after");
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let store = MemoryStore::new();
        let result = store.update(ItemId::new(), &mut |_| {}).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::with_items(vec![item("a"), item("b")]);
        let target = store.list().unwrap()[0].id;

        assert!(store.remove(target).unwrap().is_some());
        assert!(store.remove(target).unwrap().is_none());
        assert_eq!(store.len().unwrap(), 1);
        assert!(!store.is_empty().unwrap());
    }
}
