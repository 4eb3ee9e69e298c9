//! Models for the Construction Quotation Builder backend
//!
//! Re-exports models from the shared crate; the backend adds no
//! storage-specific model types of its own

pub use shared::models::*;
