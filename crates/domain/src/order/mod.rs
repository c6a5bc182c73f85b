//! Order aggregate and related types.

mod aggregate;
mod commands;
mod service;
mod state;
mod value_objects;

pub use aggregate::Order;
pub use commands::{CreateOrder, UpdateOrder};
pub use service::OrderService;
pub use state::{OrderStatus, ParsePolicyError, TransitionPolicy};
pub use value_objects::{LineItem, OwnerId, ProductId};

use common::RecordId;
use record_store::RecordStoreError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order is stored under the given id.
    #[error("Order not found: {0}")]
    NotFound(RecordId),

    /// The transition policy forbids moving between these statuses.
    #[error("Invalid status transition: cannot move order from {from} to {to}")]
    InvalidStateTransition { from: OrderStatus, to: OrderStatus },

    /// The order total doesn't fit in a decimal.
    #[error("Order total overflows the supported amount range")]
    AmountOverflow,

    /// The underlying record store failed.
    #[error("Record store error: {0}")]
    Store(#[from] RecordStoreError),
}
