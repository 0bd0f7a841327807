use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/probe", get(handlers::probe))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}
