//! User service entry point.

use api::config::{Config, ServiceKind};
use api::routes::users::UsersState;

#[tokio::main]
async fn main() {
    let config = Config::from_env(ServiceKind::Users);
    api::server::init_tracing(&config);

    let metrics_handle =
        api::server::install_metrics_recorder().expect("failed to install Prometheus recorder");

    let state = UsersState::in_memory(config.service.name());
    let app = api::create_users_app(state, metrics_handle);

    api::server::serve(app, &config).await.expect("server error");
}
