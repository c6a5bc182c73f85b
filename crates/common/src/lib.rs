//! Shared types for the storefront services.

mod types;

pub use types::RecordId;
