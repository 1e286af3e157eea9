//! items-core: Core types for the items catalog
//!
//! This crate provides:
//! - Domain types (`Item`, `ItemId`, create/update inputs, list queries)
//! - Pagination results shared by the server and the client
//! - JSON envelopes used on the wire (`{success, data}` / `{success, error}`)
//! - Declarative validation schemas returning every offending field
//!
//! # Usage
//!
//! ```rust,ignore
//! use items_core::{CreateItemInput, Schema};
//!
//! let body = serde_json::json!({ "name": "Laptop", "price": 1299.99, "category": "Electronics" });
//! let input = CreateItemInput::parse(&body)?;
//! assert!(input.in_stock);
//! ```

pub mod envelope;
pub mod types;
pub mod validation;

pub use envelope::{ApiResponse, ErrorBody, ErrorDetail, ErrorResponse, HealthResponse, MessageResponse};
pub use types::{
    CreateItemInput, Item, ItemId, ListQuery, Page, Pagination, UpdateItemInput, next_timestamp,
    now_millis,
};
pub use validation::{Constraint, FieldError, Schema, ValidationErrors};
