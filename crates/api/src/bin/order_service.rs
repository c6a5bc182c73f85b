//! Order service entry point.

use api::config::{Config, ServiceKind};
use api::routes::orders::OrdersState;

#[tokio::main]
async fn main() {
    let config = Config::from_env(ServiceKind::Orders);
    api::server::init_tracing(&config);

    let metrics_handle =
        api::server::install_metrics_recorder().expect("failed to install Prometheus recorder");

    let state = OrdersState::in_memory(config.service.name(), config.transitions);
    let app = api::create_orders_app(state, metrics_handle);

    api::server::serve(app, &config).await.expect("server error");
}
