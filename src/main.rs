mod cli;

use std::sync::Arc;

use wanderlust::config::AppConfig;
use wanderlust::handlers::terminal::TerminalPresenter;
use wanderlust::service::gateway::HttpGateway;
use wanderlust::service::view_flow::ViewController;
use wanderlust::store::{PlanStore, get_plans_location};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wanderlust=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load();

    let store = match config.get("PLANS_LOCATION") {
        Some(path) => PlanStore::new(path),
        None => PlanStore::new(get_plans_location()),
    };
    let gateway = Arc::new(HttpGateway::from_config(&config));
    let presenter = Arc::new(TerminalPresenter);
    let controller = ViewController::new(gateway, store, presenter);

    cli::cli(controller).await;
}
