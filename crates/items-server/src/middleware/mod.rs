//! Middleware layered around the router.

pub mod cors;
pub mod redact;
pub mod request_id;
