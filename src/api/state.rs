//! Application state for shared services

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::{DomainError, RemoteHost};
use crate::infrastructure::services::{HostService, ModelService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub model_service: Arc<dyn ModelServiceTrait>,
    pub host_service: Arc<dyn HostServiceTrait>,
}

impl AppState {
    pub fn new(
        model_service: Arc<dyn ModelServiceTrait>,
        host_service: Arc<dyn HostServiceTrait>,
    ) -> Self {
        Self {
            model_service,
            host_service,
        }
    }
}

/// Trait for model service operations
#[async_trait::async_trait]
pub trait ModelServiceTrait: Send + Sync {
    fn implemented_types(&self) -> Vec<String>;
    async fn create(
        &self,
        model_type: &str,
        specification: Map<String, Value>,
    ) -> Result<String, DomainError>;
    async fn list_ids(&self) -> Result<Vec<String>, DomainError>;
    async fn function_calls(&self, id: &str) -> Result<Vec<String>, DomainError>;
    async fn invoke(
        &self,
        id: &str,
        function: &str,
        input: Map<String, Value>,
    ) -> Result<Map<String, Value>, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

/// Trait for host service operations
#[async_trait::async_trait]
pub trait HostServiceTrait: Send + Sync {
    async fn add(&self, host: RemoteHost) -> Result<RemoteHost, DomainError>;
    async fn list(&self) -> Result<Vec<RemoteHost>, DomainError>;
    async fn remove(&self, ip: &str) -> Result<(), DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl ModelServiceTrait for ModelService {
    fn implemented_types(&self) -> Vec<String> {
        ModelService::implemented_types(self)
    }

    async fn create(
        &self,
        model_type: &str,
        specification: Map<String, Value>,
    ) -> Result<String, DomainError> {
        ModelService::create(self, model_type, specification).await
    }

    async fn list_ids(&self) -> Result<Vec<String>, DomainError> {
        ModelService::list_ids(self).await
    }

    async fn function_calls(&self, id: &str) -> Result<Vec<String>, DomainError> {
        ModelService::function_calls(self, id).await
    }

    async fn invoke(
        &self,
        id: &str,
        function: &str,
        input: Map<String, Value>,
    ) -> Result<Map<String, Value>, DomainError> {
        ModelService::invoke(self, id, function, input).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        ModelService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl HostServiceTrait for HostService {
    async fn add(&self, host: RemoteHost) -> Result<RemoteHost, DomainError> {
        HostService::add(self, host).await
    }

    async fn list(&self) -> Result<Vec<RemoteHost>, DomainError> {
        HostService::list(self).await
    }

    async fn remove(&self, ip: &str) -> Result<(), DomainError> {
        HostService::remove(self, ip).await
    }
}
