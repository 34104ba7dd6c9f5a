//! In-memory storage implementations
//!
//! The only storage backends in this service: nothing is persisted beyond
//! process memory. Both types wrap a `HashMap` in an `RwLock`, so
//! concurrent reads never observe a partially inserted or partially
//! removed entry, and a removal racing a lookup resolves to
//! found-or-not-found.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::host::HostDirectory;
use crate::domain::model::{ModelId, ModelStore, PredictionModel};
use crate::domain::{DomainError, RemoteHost};

/// Thread-safe in-memory model store
///
/// Models are heterogeneous trait objects, shared out behind `Arc`; the
/// store holds the only long-lived reference.
#[derive(Debug, Default)]
pub struct InMemoryModelStore {
    models: RwLock<HashMap<String, Arc<dyn PredictionModel>>>,
}

impl InMemoryModelStore {
    /// Creates a new empty model store
    pub fn new() -> Self {
        Self {
            models: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ModelStore for InMemoryModelStore {
    async fn add(&self, model: Arc<dyn PredictionModel>) -> Result<(), DomainError> {
        let id = model.id().as_str().to_string();
        let mut models = self.models.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if models.contains_key(&id) {
            return Err(DomainError::internal(format!(
                "Model ID '{}' already present in store",
                id
            )));
        }

        models.insert(id, model);
        Ok(())
    }

    async fn get(&self, id: &ModelId) -> Result<Option<Arc<dyn PredictionModel>>, DomainError> {
        let models = self.models.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(models.get(id.as_str()).cloned())
    }

    async fn remove(&self, id: &ModelId) -> Result<(), DomainError> {
        let mut models = self.models.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        models
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::model_not_found(id.as_str()))
    }

    async fn list(&self) -> Result<Vec<Arc<dyn PredictionModel>>, DomainError> {
        let models = self.models.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(models.values().cloned().collect())
    }
}

/// Thread-safe in-memory host directory
#[derive(Debug, Default)]
pub struct InMemoryHostDirectory {
    hosts: RwLock<HashMap<String, RemoteHost>>,
}

impl InMemoryHostDirectory {
    /// Creates a new empty host directory
    pub fn new() -> Self {
        Self {
            hosts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl HostDirectory for InMemoryHostDirectory {
    async fn add(&self, host: RemoteHost) -> Result<(), DomainError> {
        let mut hosts = self.hosts.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        hosts.insert(host.ip.clone(), host);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RemoteHost>, DomainError> {
        let hosts = self.hosts.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(hosts.values().cloned().collect())
    }

    async fn remove(&self, ip: &str) -> Result<bool, DomainError> {
        let mut hosts = self.hosts.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(hosts.remove(ip).is_some())
    }
}
