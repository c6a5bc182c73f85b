//! HTTP services for users, products and orders.
//!
//! Each service is an axum router over its in-memory record store, with
//! probe endpoints, a record count at `/metrics` and Prometheus output at
//! `/metrics/prometheus`. The three binaries in `src/bin` run one service
//! each.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::{Order, Product, User};
use metrics_exporter_prometheus::PrometheusHandle;
use record_store::RecordStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::health::ServiceInfo;
use routes::orders::OrdersState;
use routes::products::ProductsState;
use routes::users::UsersState;

/// Creates the order service router.
pub fn create_orders_app<S: RecordStore<Order> + 'static>(
    state: Arc<OrdersState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let info = ServiceInfo::new(state.service_name);
    let resource = Router::new()
        .route(
            "/api/v1/orders",
            get(routes::orders::list::<S>).post(routes::orders::create::<S>),
        )
        .route(
            "/api/v1/orders/{id}",
            get(routes::orders::get::<S>)
                .put(routes::orders::update::<S>)
                .delete(routes::orders::delete::<S>),
        )
        .route("/metrics", get(routes::orders::metrics::<S>))
        .with_state(state);

    with_common_routes(resource, info, metrics_handle)
}

/// Creates the user service router.
pub fn create_users_app<S: RecordStore<User> + 'static>(
    state: Arc<UsersState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let info = ServiceInfo::new(state.service_name);
    let resource = Router::new()
        .route(
            "/api/v1/users",
            get(routes::users::list::<S>).post(routes::users::create::<S>),
        )
        .route(
            "/api/v1/users/{id}",
            get(routes::users::get::<S>)
                .put(routes::users::update::<S>)
                .delete(routes::users::delete::<S>),
        )
        .route("/metrics", get(routes::users::metrics::<S>))
        .with_state(state);

    with_common_routes(resource, info, metrics_handle)
}

/// Creates the product service router.
pub fn create_products_app<S: RecordStore<Product> + 'static>(
    state: Arc<ProductsState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let info = ServiceInfo::new(state.service_name);
    let resource = Router::new()
        .route(
            "/api/v1/products",
            get(routes::products::list::<S>).post(routes::products::create::<S>),
        )
        .route(
            "/api/v1/products/{id}",
            get(routes::products::get::<S>)
                .put(routes::products::update::<S>)
                .delete(routes::products::delete::<S>),
        )
        .route("/metrics", get(routes::products::metrics::<S>))
        .with_state(state);

    with_common_routes(resource, info, metrics_handle)
}

/// Adds probes, Prometheus output, CORS and request tracing.
fn with_common_routes(
    resource: Router,
    info: ServiceInfo,
    metrics_handle: PrometheusHandle,
) -> Router {
    let probes = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::check))
        .route("/ready", get(routes::health::ready))
        .with_state(info);

    let metrics_router = Router::new()
        .route("/metrics/prometheus", get(routes::metrics::prometheus))
        .with_state(metrics_handle);

    resource
        .merge(probes)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
