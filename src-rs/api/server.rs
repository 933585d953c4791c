use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::api::handlers::{
    handle_classify, handle_extract, handle_health, handle_plan, handle_recipes, handle_reply,
};
use crate::planner::Planner;

pub struct PlannerServer {
    pub port: u16,
    pub planner: Arc<Planner>,
}

impl PlannerServer {
    pub fn new(port: u16, planner: Arc<Planner>) -> Self {
        Self { port, planner }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handle_health))
            .route("/tasks/extract", post(handle_extract))
            .route("/tasks/plan", post(handle_plan))
            .route("/tasks/classify", post(handle_classify))
            .route("/recipes", post(handle_recipes))
            .route("/reply", post(handle_reply))
            .with_state(self.planner.clone())
    }

    pub async fn start(&self) -> Result<(), String> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        tracing::info!(%addr, provider = %self.planner.config.provider, "homeplan listening");
        axum::Server::bind(&addr)
            .serve(self.router().into_make_service())
            .await
            .map_err(|err| err.to_string())
    }
}
