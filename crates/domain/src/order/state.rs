//! Order status and transition rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fulfillment stage of an order.
///
/// Strict transitions:
/// ```text
/// Pending ──► Confirmed ──► Shipped ──► Delivered
///    │            │
///    └────────────┴──► Cancelled
/// ```
/// Under the permissive policy every status may move to every other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Newly placed, not yet confirmed.
    #[default]
    Pending,

    /// Accepted for fulfillment.
    Confirmed,

    /// Handed to the carrier.
    Shipped,

    /// Received by the customer (terminal under the strict policy).
    Delivered,

    /// Cancelled before shipping (terminal under the strict policy).
    Cancelled,
}

impl OrderStatus {
    /// Returns the statuses the strict lifecycle allows moving to.
    pub fn strict_successors(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    /// Returns true if `policy` allows moving from this status to `target`.
    ///
    /// Re-asserting the current status is always allowed.
    pub fn can_transition_to(&self, target: OrderStatus, policy: TransitionPolicy) -> bool {
        match policy {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Strict => {
                *self == target || self.strict_successors().contains(&target)
            }
        }
    }

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown transition policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transition policy: {0}")]
pub struct ParsePolicyError(String);

/// Which status transitions an update may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may be set from any status.
    #[default]
    Permissive,

    /// Only the transitions in [`OrderStatus::strict_successors`].
    Strict,
}

impl std::str::FromStr for TransitionPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "strict" => Ok(TransitionPolicy::Strict),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
