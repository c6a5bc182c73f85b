//! Order lifecycle service.

use chrono::Utc;
use common::RecordId;
use record_store::{RecordStore, RecordStoreExt};

use super::{CreateOrder, Order, OrderError, OwnerId, TransitionPolicy, UpdateOrder};

/// Service for managing orders.
///
/// Turns creation input into persisted orders, applies status updates and
/// answers read/list/delete requests. Storage is delegated to the injected
/// record store.
pub struct OrderService<S: RecordStore<Order>> {
    store: S,
    policy: TransitionPolicy,
}

impl<S: RecordStore<Order>> OrderService<S> {
    /// Creates a new order service that accepts any status transition.
    pub fn new(store: S) -> Self {
        Self::with_policy(store, TransitionPolicy::Permissive)
    }

    /// Creates a new order service with an explicit transition policy.
    pub fn with_policy(store: S, policy: TransitionPolicy) -> Self {
        Self { store, policy }
    }

    /// Places a new order and persists it.
    #[tracing::instrument(skip(self, cmd), fields(owner_id = %cmd.owner_id, items = cmd.items.len()))]
    pub async fn create_order(&self, cmd: CreateOrder) -> Result<Order, OrderError> {
        let order = Order::place(RecordId::generate(), cmd.owner_id, cmd.items, Utc::now())?;
        let order = self.store.insert(order).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id(), total = %order.total(), "created order");
        Ok(order)
    }

    /// Loads an order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: &RecordId) -> Result<Order, OrderError> {
        self.store
            .get(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))
    }

    /// Lists orders in placement order, optionally only those of one owner.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self, owner_id: Option<&OwnerId>) -> Result<Vec<Order>, OrderError> {
        let orders = match owner_id {
            Some(owner_id) => {
                let owner_id = owner_id.clone();
                self.store
                    .list_where(move |order: &Order| order.is_owned_by(&owner_id))
                    .await?
            }
            None => self.store.list().await?,
        };
        Ok(orders)
    }

    /// Applies a status update to an order.
    #[tracing::instrument(skip(self))]
    pub async fn update_order(&self, cmd: UpdateOrder) -> Result<Order, OrderError> {
        let policy = self.policy;
        let status = cmd.status;

        let order = self
            .store
            .update(&cmd.order_id, move |order: &mut Order| {
                order.apply_update(status, policy, Utc::now())
            })
            .await?
            .ok_or_else(|| OrderError::NotFound(cmd.order_id.clone()))?;

        metrics::counter!("orders_updated_total").increment(1);
        tracing::info!(order_id = %order.id(), status = %order.status(), "updated order");
        Ok(order)
    }

    /// Deletes an order permanently.
    #[tracing::instrument(skip(self))]
    pub async fn delete_order(&self, order_id: &RecordId) -> Result<(), OrderError> {
        self.store
            .remove(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))?;

        metrics::counter!("orders_deleted_total").increment(1);
        tracing::info!(%order_id, "deleted order");
        Ok(())
    }

    /// Returns the number of stored orders.
    pub async fn count_orders(&self) -> Result<usize, OrderError> {
        Ok(self.store.count().await?)
    }
}
