use std::env;
use std::sync::Arc;

use homeplan_rs::api::server::PlannerServer;
use homeplan_rs::helpers::{load_config_from_env, spawn_llm_router};
use homeplan_rs::llm::{CompletionClient, FakeAdapter};
use homeplan_rs::Planner;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(8080);

    let config = load_config_from_env();
    let client: Arc<dyn CompletionClient> = match spawn_llm_router(&config).await {
        Ok(router) => {
            tracing::info!(provider = router.default_provider(), "provider router ready");
            Arc::new(router)
        }
        Err(err) => {
            tracing::warn!(error = %err, "no usable provider, every request will use fallbacks");
            Arc::new(FakeAdapter::new())
        }
    };

    let server = PlannerServer::new(port, Arc::new(Planner::new(config, client)));
    if let Err(err) = server.start().await {
        tracing::error!(error = %err, "server error");
    }
}
