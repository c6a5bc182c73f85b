//! Order lifecycle endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::RecordId;
use domain::{
    CreateOrder, LineItem, Order, OrderService, OrderStatus, OwnerId, TransitionPolicy,
    UpdateOrder,
};
use record_store::{InMemoryRecordStore, RecordStore};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::metrics::count_body;

/// Shared state for the order service handlers.
pub struct OrdersState<S: RecordStore<Order>> {
    pub service_name: &'static str,
    pub order_service: OrderService<S>,
}

impl OrdersState<InMemoryRecordStore<Order>> {
    /// Creates state backed by a fresh in-memory store.
    pub fn in_memory(service_name: &'static str, policy: TransitionPolicy) -> Arc<Self> {
        Arc::new(Self {
            service_name,
            order_service: OrderService::with_policy(InMemoryRecordStore::new(), policy),
        })
    }
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    #[serde(alias = "owner_id", alias = "ownerId")]
    pub user_id: String,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Deserialize)]
pub struct OrderItemRequest {
    #[serde(alias = "productId")]
    pub product_id: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<OrderStatus>,
}

#[derive(Deserialize)]
pub struct ListOrdersQuery {
    #[serde(alias = "owner_id", alias = "ownerId")]
    pub user_id: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: usize,
}

// -- Handlers --

/// POST /api/v1/orders: place a new pending order.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: RecordStore<Order> + 'static>(
    State(state): State<Arc<OrdersState<S>>>,
    ApiJson(req): ApiJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let items = req
        .items
        .into_iter()
        .map(|item| LineItem::new(item.product_id, item.quantity, item.price))
        .collect();

    let order = state
        .order_service
        .create_order(CreateOrder::new(req.user_id, items))
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/v1/orders/{id}
#[tracing::instrument(skip(state))]
pub async fn get<S: RecordStore<Order> + 'static>(
    State(state): State<Arc<OrdersState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let order = state.order_service.get_order(&RecordId::from(id)).await?;
    Ok(Json(order))
}

/// GET /api/v1/orders: all orders, or one owner's when `user_id` is given.
///
/// An empty `user_id` is treated as absent.
#[tracing::instrument(skip(state, query))]
pub async fn list<S: RecordStore<Order> + 'static>(
    State(state): State<Arc<OrdersState<S>>>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let owner = query
        .user_id
        .filter(|id| !id.is_empty())
        .map(OwnerId::from);

    let orders = state.order_service.list_orders(owner.as_ref()).await?;
    let total = orders.len();
    Ok(Json(OrderListResponse { orders, total }))
}

/// PUT /api/v1/orders/{id}: change the status and refresh `updated_at`.
#[tracing::instrument(skip(state, req))]
pub async fn update<S: RecordStore<Order> + 'static>(
    State(state): State<Arc<OrdersState<S>>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateOrderRequest>,
) -> Result<Json<Order>, ApiError> {
    let order_id = RecordId::from(id);
    let cmd = match req.status {
        Some(status) => UpdateOrder::set_status(order_id, status),
        None => UpdateOrder::new(order_id),
    };
    let order = state.order_service.update_order(cmd).await?;
    Ok(Json(order))
}

/// DELETE /api/v1/orders/{id}
#[tracing::instrument(skip(state))]
pub async fn delete<S: RecordStore<Order> + 'static>(
    State(state): State<Arc<OrdersState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .order_service
        .delete_order(&RecordId::from(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /metrics: number of stored orders.
pub async fn metrics<S: RecordStore<Order> + 'static>(
    State(state): State<Arc<OrdersState<S>>>,
) -> Result<Json<Value>, ApiError> {
    let total = state.order_service.count_orders().await?;
    Ok(Json(count_body("orders", total, state.service_name)))
}
