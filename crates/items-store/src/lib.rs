//! items-store: Storage layer for the items catalog
//!
//! This crate provides:
//! - The `ItemStore` trait, the seam where a persistence backend plugs in
//! - `MemoryStore`, an insertion-ordered in-memory implementation
//! - `ItemService`, the create/list/get/update/delete operations with
//!   category filtering, search, and pagination
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use items_store::{ItemService, MemoryStore};
//!
//! let service = ItemService::new(Arc::new(MemoryStore::new()));
//! let item = service.create(input)?;
//! let page = service.find_all(&ListQuery::default())?;
//! ```

pub mod error;
pub mod service;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use service::ItemService;
pub use store::{ItemStore, MemoryStore};

// Re-export items-core for downstream crates
pub use items_core;
