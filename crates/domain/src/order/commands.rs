//! Order commands.

use common::RecordId;

use super::{LineItem, OrderStatus, OwnerId};

/// Command to place a new order.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    /// The user placing the order.
    pub owner_id: OwnerId,

    /// The line items, in the order supplied.
    pub items: Vec<LineItem>,
}

impl CreateOrder {
    /// Creates a new CreateOrder command.
    pub fn new(owner_id: impl Into<OwnerId>, items: Vec<LineItem>) -> Self {
        Self {
            owner_id: owner_id.into(),
            items,
        }
    }
}

/// Command to update an existing order.
///
/// Only the status can change after placement.
#[derive(Debug, Clone)]
pub struct UpdateOrder {
    /// The order to update.
    pub order_id: RecordId,

    /// The new status, or None to leave it unchanged.
    pub status: Option<OrderStatus>,
}

impl UpdateOrder {
    /// Creates an update that only refreshes the order's timestamp.
    pub fn new(order_id: RecordId) -> Self {
        Self {
            order_id,
            status: None,
        }
    }

    /// Creates an update that sets the order's status.
    pub fn set_status(order_id: RecordId, status: OrderStatus) -> Self {
        Self {
            order_id,
            status: Some(status),
        }
    }
}
