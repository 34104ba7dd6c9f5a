//! Model factory
//!
//! Resolves a declared model-type name through the registry and constructs
//! the concrete variant from the free-form specification payload.
//! Construction has no side effects; inserting the result into a store is
//! the caller's responsibility.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use super::registry::ModelTypeRegistry;
use crate::domain::model::PredictionModel;
use crate::domain::DomainError;

/// Type-driven model instantiation
#[derive(Debug)]
pub struct ModelFactory {
    registry: Arc<ModelTypeRegistry>,
}

impl ModelFactory {
    pub fn new(registry: Arc<ModelTypeRegistry>) -> Self {
        Self { registry }
    }

    /// Every implemented type name, in registration order
    pub fn implemented_types(&self) -> Vec<String> {
        self.registry.type_names()
    }

    /// Construct a model of the named type from the given specification
    ///
    /// Fails with `TypeNotImplemented` if no registry entry matches, or
    /// with `ConstructionRejected` if the variant's schema rejects the
    /// payload. On success the model carries a freshly assigned ID.
    pub fn create(
        &self,
        model_type: &str,
        specification: Map<String, Value>,
    ) -> Result<Arc<dyn PredictionModel>, DomainError> {
        let builder = self
            .registry
            .lookup(model_type)
            .ok_or_else(|| DomainError::type_not_implemented(model_type))?;

        let model = builder(model_type, specification)?;
        debug!(model_type = %model_type, model_id = %model.id(), "Constructed model");

        Ok(model)
    }
}
