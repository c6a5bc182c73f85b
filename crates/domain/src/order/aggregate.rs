//! Order aggregate implementation.

use chrono::{DateTime, Utc};
use common::RecordId;
use record_store::Record;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LineItem, OrderError, OrderStatus, OwnerId, TransitionPolicy};

/// Order aggregate root.
///
/// Identity, owner, line items and total are fixed when the order is
/// placed. Only the status (and the `updated_at` stamp) change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier, assigned at placement.
    id: RecordId,

    /// User who placed the order.
    #[serde(rename = "user_id")]
    owner_id: OwnerId,

    /// Line items, in the order they were supplied.
    items: Vec<LineItem>,

    /// Sum of `price * quantity` over the line items.
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,

    /// Current fulfillment stage.
    status: OrderStatus,

    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Record for Order {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

/// Sums `price * quantity` over `items`.
///
/// Returns `AmountOverflow` if any product or the running sum leaves the
/// decimal range.
fn compute_total(items: &[LineItem]) -> Result<Decimal, OrderError> {
    items.iter().try_fold(Decimal::ZERO, |acc, item| {
        item.line_total()
            .and_then(|line| acc.checked_add(line))
            .ok_or(OrderError::AmountOverflow)
    })
}

// Query methods
impl Order {
    /// Returns the order ID.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the owner ID.
    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Returns the line items.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the total amount.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns when the order was placed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the order was last modified.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true if the order belongs to `owner_id`.
    pub fn is_owned_by(&self, owner_id: &OwnerId) -> bool {
        self.owner_id == *owner_id
    }
}

// Lifecycle methods
impl Order {
    /// Places a new order.
    ///
    /// The status is forced to `Pending`, both timestamps are set to `now`
    /// and the total is computed from `items`.
    pub fn place(
        id: RecordId,
        owner_id: OwnerId,
        items: Vec<LineItem>,
        now: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        let total = compute_total(&items)?;

        Ok(Self {
            id,
            owner_id,
            items,
            total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a status-only update.
    ///
    /// When `new_status` is None the status is kept. `updated_at` is
    /// refreshed either way.
    pub fn apply_update(
        &mut self,
        new_status: Option<OrderStatus>,
        policy: TransitionPolicy,
        now: DateTime<Utc>,
    ) -> Result<(), OrderError> {
        if let Some(target) = new_status {
            if !self.status.can_transition_to(target, policy) {
                return Err(OrderError::InvalidStateTransition {
                    from: self.status,
                    to: target,
                });
            }
            self.status = target;
        }

        self.touch(now);
        Ok(())
    }

    /// Refreshes `updated_at`, never moving it backwards.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.updated_at);
    }
}
