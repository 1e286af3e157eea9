//! Local transactions over hook state.
//!
//! An optimistic change captures a [`Snapshot`], edits the list right away,
//! and later either keeps the edit (reconciling with the server's answer) or
//! restores the snapshot.

use items_core::{CreateItemInput, Item, ItemId, Pagination, now_millis};

use crate::hook::ItemsState;

/// Items and pagination as they were before an optimistic change.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    items: Vec<Item>,
    pagination: Option<Pagination>,
}

impl Snapshot {
    /// Capture the list portion of `state`.
    pub fn capture(state: &ItemsState) -> Self {
        Self {
            items: state.items.clone(),
            pagination: state.pagination,
        }
    }

    /// Put the captured items and pagination back.
    pub fn restore(self, state: &mut ItemsState) {
        state.items = self.items;
        state.pagination = self.pagination;
    }
}

/// A placeholder record shown until the server confirms a create.
///
/// Gets a fresh random id and client-side timestamps.
pub fn temporary_item(input: &CreateItemInput) -> Item {
    Item::new(ItemId::new(), input.clone(), now_millis())
}

/// Put `item` at the top of the list and count it in the total.
pub fn prepend(state: &mut ItemsState, item: Item) {
    state.items.insert(0, item);
    if let Some(pagination) = state.pagination.as_mut() {
        pagination.total += 1;
    }
}

/// Drop the record with `id` and uncount it. Returns whether it was listed.
pub fn remove(state: &mut ItemsState, id: ItemId) -> bool {
    let before = state.items.len();
    state.items.retain(|item| item.id != id);
    if let Some(pagination) = state.pagination.as_mut() {
        pagination.total = pagination.total.saturating_sub(1);
    }
    state.items.len() != before
}

/// Swap the temporary record `temp_id` for the server's record.
///
/// Does nothing if the temporary record is no longer listed.
pub fn replace(state: &mut ItemsState, temp_id: ItemId, item: Item) {
    if let Some(slot) = state.items.iter_mut().find(|i| i.id == temp_id) {
        *slot = item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> CreateItemInput {
        CreateItemInput {
            name: name.to_string(),
            description: None,
            price: 5.0,
            category: "Misc".to_string(),
            in_stock: true,
        }
    }

    fn state_with(names: &[&str]) -> ItemsState {
        let items: Vec<Item> = names.iter().map(|n| temporary_item(&input(n))).collect();
        let total = items.len() as u64;
        ItemsState {
            items,
            pagination: Some(Pagination::new(1, 10, total)),
            ..ItemsState::default()
        }
    }

    #[test]
    fn test_prepend_then_restore() {
        let mut state = state_with(&["a", "b"]);
        let snapshot = Snapshot::capture(&state);

        prepend(&mut state, temporary_item(&input("new")));
        assert_eq!(state.items[0].name, "new");
        assert_eq!(state.pagination.unwrap().total, 3);

        snapshot.restore(&mut state);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.pagination.unwrap().total, 2);
    }

    #[test]
    fn test_remove_saturates_total() {
        let mut state = state_with(&["a"]);
        state.pagination = Some(Pagination::new(1, 10, 0));
        let id = state.items[0].id;

        assert!(remove(&mut state, id));
        assert!(!remove(&mut state, id));
        assert_eq!(state.pagination.unwrap().total, 0);
    }

    #[test]
    fn test_prepend_without_pagination() {
        let mut state = ItemsState::default();
        prepend(&mut state, temporary_item(&input("new")));
        assert_eq!(state.items.len(), 1);
        assert!(state.pagination.is_none());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut state = state_with(&["a", "b", "c"]);
        let temp_id = state.items[1].id;
        let confirmed = temporary_item(&input("confirmed"));

        replace(&mut state, temp_id, confirmed.clone());
        assert_eq!(state.items[1], confirmed);

        replace(&mut state, ItemId::new(), temporary_item(&input("ghost")));
        assert!(state.items.iter().all(|i| i.name != "ghost"));
    }

    #[test]
    fn test_temporary_item_defaults() {
        let item = temporary_item(&input("x"));
        assert!(item.in_stock);
        assert_eq!(item.created_at, item.updated_at);
    }
}
