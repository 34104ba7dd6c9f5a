//! Model store seam — the registry core

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{ModelId, PredictionModel};
use crate::domain::DomainError;

/// Concurrency-safe store of live model instances, keyed by ID
///
/// The store owns every model exclusively: a model enters through `add`
/// and leaves only through `remove`. Callers must insert freshly
/// generated IDs only; `add` with an ID already present is a contract
/// violation and fails with an internal error rather than silently
/// overwriting the existing model.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// Insert a model keyed by its ID
    async fn add(&self, model: Arc<dyn PredictionModel>) -> Result<(), DomainError>;

    /// Look up a model; absence is a normal, non-exceptional outcome
    async fn get(&self, id: &ModelId) -> Result<Option<Arc<dyn PredictionModel>>, DomainError>;

    /// Remove a model; fails with `ModelNotFound` if the ID is absent
    async fn remove(&self, id: &ModelId) -> Result<(), DomainError>;

    /// Every live model; order irrelevant, unique by ID
    async fn list(&self) -> Result<Vec<Arc<dyn PredictionModel>>, DomainError>;
}
