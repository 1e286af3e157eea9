//! Client-side view of the item list with optimistic create and delete.
//!
//! [`ItemsHook`] owns an [`ItemsApi`] and the [`ItemsState`] a UI renders.
//! Creates and deletes show up in the state before the server answers and
//! roll back if it refuses; updates wait for the server and then refetch.
//!
//! The optimistic operations are also exposed in two phases
//! (`begin_*` / `finish_*`) so callers can render the state while the
//! request is in flight.

use std::collections::HashSet;

use items_core::{CreateItemInput, Item, ItemId, ListQuery, Pagination, UpdateItemInput};

use crate::api::ItemsApi;
use crate::error::{ClientError, ClientResult};
use crate::optimistic::{self, Snapshot};

/// Everything a list view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsState {
    pub items: Vec<Item>,
    /// `None` until the first successful fetch.
    pub pagination: Option<Pagination>,
    pub loading: bool,
    /// Message of the last failed operation, cleared by the next fetch.
    pub error: Option<String>,
    pub query: ListQuery,
    /// Ids of temporary records awaiting server confirmation.
    pub pending: HashSet<ItemId>,
}

impl Default for ItemsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            loading: true,
            error: None,
            query: ListQuery::default(),
            pending: HashSet::new(),
        }
    }
}

impl ItemsState {
    /// Whether `id` is a temporary record not yet confirmed by the server.
    pub fn is_pending(&self, id: ItemId) -> bool {
        self.pending.contains(&id)
    }
}

/// An optimistic create awaiting the server's answer.
#[derive(Debug)]
#[must_use = "a pending create must be finished to confirm or roll back"]
pub struct PendingCreate {
    temp_id: ItemId,
    input: CreateItemInput,
    snapshot: Snapshot,
}

impl PendingCreate {
    /// Id of the temporary record in the list.
    pub fn temp_id(&self) -> ItemId {
        self.temp_id
    }

    /// Input to send to the server.
    pub fn input(&self) -> &CreateItemInput {
        &self.input
    }
}

/// An optimistic delete awaiting the server's answer.
#[derive(Debug)]
#[must_use = "a pending delete must be finished to confirm or roll back"]
pub struct PendingDelete {
    id: ItemId,
    snapshot: Snapshot,
}

impl PendingDelete {
    pub fn id(&self) -> ItemId {
        self.id
    }
}

/// Item list state bound to an API.
#[derive(Debug)]
pub struct ItemsHook<A> {
    api: A,
    state: ItemsState,
}

impl<A: ItemsApi> ItemsHook<A> {
    /// Create a hook with the default query. Nothing is fetched until
    /// [`mount`](Self::mount).
    pub fn new(api: A) -> Self {
        Self::with_query(api, ListQuery::default())
    }

    /// Create a hook starting from `query`.
    pub fn with_query(api: A, query: ListQuery) -> Self {
        Self {
            api,
            state: ItemsState {
                query,
                ..ItemsState::default()
            },
        }
    }

    pub fn state(&self) -> &ItemsState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial fetch.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Refetch the list for the current query.
    ///
    /// On failure the list is left as it was and the error is recorded.
    pub async fn refresh(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.api.list(&self.state.query).await {
            Ok(page) => {
                self.state.items = page.data;
                self.state.pagination = Some(page.pagination);
                self.state.pending.clear();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch items");
                self.record_error(&err);
            }
        }

        self.state.loading = false;
    }

    /// Replace the query and refetch.
    pub async fn set_query(&mut self, query: ListQuery) {
        self.state.query = query;
        self.refresh().await;
    }

    /// Create an item, showing it immediately.
    pub async fn create(&mut self, input: CreateItemInput) -> ClientResult<Item> {
        let pending = self.begin_create(input);
        let result = self.api.create(pending.input()).await;
        self.finish_create(pending, result)
    }

    /// Show a temporary record for `input` at the top of the list.
    pub fn begin_create(&mut self, input: CreateItemInput) -> PendingCreate {
        let snapshot = Snapshot::capture(&self.state);
        let temp = optimistic::temporary_item(&input);
        let temp_id = temp.id;

        optimistic::prepend(&mut self.state, temp);
        self.state.pending.insert(temp_id);

        PendingCreate {
            temp_id,
            input,
            snapshot,
        }
    }

    /// Reconcile a create with the server's answer.
    ///
    /// Success swaps the temporary record for the server's; failure restores
    /// the list and pagination captured by `begin_create`.
    pub fn finish_create(
        &mut self,
        pending: PendingCreate,
        result: ClientResult<Item>,
    ) -> ClientResult<Item> {
        self.state.pending.remove(&pending.temp_id);

        match result {
            Ok(item) => {
                optimistic::replace(&mut self.state, pending.temp_id, item.clone());
                Ok(item)
            }
            Err(err) => {
                pending.snapshot.restore(&mut self.state);
                self.forget_unlisted_pending();
                self.record_error(&err);
                Err(err)
            }
        }
    }

    /// Delete an item, hiding it immediately.
    pub async fn delete(&mut self, id: ItemId) -> ClientResult<()> {
        let pending = self.begin_delete(id);
        let result = self.api.delete(id).await.map(|_| ());
        self.finish_delete(pending, result)
    }

    /// Hide the record `id` from the list.
    pub fn begin_delete(&mut self, id: ItemId) -> PendingDelete {
        let snapshot = Snapshot::capture(&self.state);
        optimistic::remove(&mut self.state, id);
        PendingDelete { id, snapshot }
    }

    /// Reconcile a delete with the server's answer. Failure restores the
    /// list and pagination captured by `begin_delete`.
    pub fn finish_delete(
        &mut self,
        pending: PendingDelete,
        result: ClientResult<()>,
    ) -> ClientResult<()> {
        match result {
            Ok(()) => {
                tracing::debug!(item_id = %pending.id, "Delete confirmed");
                Ok(())
            }
            Err(err) => {
                pending.snapshot.restore(&mut self.state);
                self.forget_unlisted_pending();
                self.record_error(&err);
                Err(err)
            }
        }
    }

    /// Update an item on the server, then refetch the list.
    pub async fn update(&mut self, id: ItemId, input: UpdateItemInput) -> ClientResult<Item> {
        match self.api.update(id, &input).await {
            Ok(item) => {
                self.refresh().await;
                Ok(item)
            }
            Err(err) => {
                self.record_error(&err);
                Err(err)
            }
        }
    }

    fn record_error(&mut self, err: &ClientError) {
        self.state.error = Some(err.to_string());
    }

    fn forget_unlisted_pending(&mut self) {
        let items = &self.state.items;
        self.state
            .pending
            .retain(|id| items.iter().any(|item| item.id == *id));
    }
}
