//! items-client: HTTP client and data hook for the items catalog
//!
//! This crate provides:
//! - `ItemsApi`, the server operations a client view needs, and `ApiClient`,
//!   its reqwest implementation
//! - `ItemsHook`, list state with optimistic create and delete that roll
//!   back when the server refuses
//!
//! # Usage
//!
//! ```rust,ignore
//! use items_client::{ApiClient, ItemsHook};
//!
//! let mut hook = ItemsHook::new(ApiClient::new("http://localhost:3000")?);
//! hook.mount().await;
//! hook.create(input).await?;
//! println!("{} items", hook.state().items.len());
//! ```

pub mod api;
pub mod error;
pub mod hook;
pub mod optimistic;

pub use api::{ApiClient, DEFAULT_BASE_URL, ItemsApi};
pub use error::{ClientError, ClientResult};
pub use hook::{ItemsHook, ItemsState, PendingCreate, PendingDelete};
pub use optimistic::Snapshot;

// Re-export items-core for downstream crates
pub use items_core;
