//! API layer - HTTP endpoints

pub mod health;
pub mod router;
pub mod state;
pub mod types;
pub mod v1;

pub use router::{create_router, create_router_with_state};
pub use state::AppState;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::state::AppState;
    use crate::infrastructure::model_types::{registry_from_config, ModelFactory};
    use crate::infrastructure::services::{HostService, ModelService};
    use crate::infrastructure::storage::{InMemoryHostDirectory, InMemoryModelStore};

    /// Application state over fresh in-memory stores with the default
    /// type registry
    pub fn test_state() -> AppState {
        let registry =
            registry_from_config(&["lda".to_string(), "generic".to_string()]).unwrap();
        let model_service = ModelService::new(
            ModelFactory::new(Arc::new(registry)),
            Arc::new(InMemoryModelStore::new()),
        );
        let host_service = HostService::new(Arc::new(InMemoryHostDirectory::new()));

        AppState::new(Arc::new(model_service), Arc::new(host_service))
    }
}
