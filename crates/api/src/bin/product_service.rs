//! Product service entry point.

use api::config::{Config, ServiceKind};
use api::routes::products::ProductsState;

#[tokio::main]
async fn main() {
    let config = Config::from_env(ServiceKind::Products);
    api::server::init_tracing(&config);

    let metrics_handle =
        api::server::install_metrics_recorder().expect("failed to install Prometheus recorder");

    // Seed the catalog before accepting traffic
    let state = ProductsState::seeded(config.service.name())
        .await
        .expect("failed to seed product catalog");
    let app = api::create_products_app(state, metrics_handle);

    api::server::serve(app, &config).await.expect("server error");
}
