//! Prediction Model Gateway
//!
//! A management service for prediction models:
//! - Type-driven model construction from a startup-time registry
//! - Concurrency-safe in-memory model store keyed by generated IDs
//! - Generic invocation of named function calls with a normalized
//!   response envelope
//! - A flat directory of remote execution hosts

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::model_types::{registry_from_config, ModelFactory};
use infrastructure::services::{HostService, ModelService};
use infrastructure::storage::{InMemoryHostDirectory, InMemoryModelStore};
use tracing::info;

/// Create the application state with all services initialized
///
/// The model-type registry is built once from configuration and is
/// immutable afterwards; the model store and host directory start empty.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let registry = registry_from_config(&config.models.implemented)?;
    info!(
        implemented = ?registry.type_names(),
        "Model type registry initialized"
    );

    let model_service = ModelService::new(
        ModelFactory::new(Arc::new(registry)),
        Arc::new(InMemoryModelStore::new()),
    );
    let host_service = HostService::new(Arc::new(InMemoryHostDirectory::new()));

    Ok(AppState::new(
        Arc::new(model_service),
        Arc::new(host_service),
    ))
}
