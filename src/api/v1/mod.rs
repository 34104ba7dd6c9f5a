//! v1 API endpoints

pub mod hosts;
pub mod models;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/models",
            get(models::list_created_models).post(models::create_model),
        )
        .route("/models/implemented", get(models::list_implemented_types))
        .route(
            "/models/{model_id}",
            get(models::list_function_calls)
                .post(models::run_function)
                .delete(models::delete_model),
        )
        .route(
            "/hosts",
            get(hosts::list_remote_hosts)
                .post(hosts::add_remote_host)
                .delete(hosts::delete_remote_host),
        )
}
