pub mod error;
pub mod memory;
pub mod store;

pub use common::RecordId;
pub use error::{RecordStoreError, Result};
pub use memory::InMemoryRecordStore;
pub use store::{Record, RecordStore, RecordStoreExt};
