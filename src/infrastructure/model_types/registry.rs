//! Model type registry
//!
//! Startup-time dispatch table mapping a model-type name to the builder
//! that constructs the concrete variant. Read-only once the application
//! state is assembled.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::model::PredictionModel;
use crate::domain::DomainError;

/// Builds a concrete model variant from its type tag and the free-form
/// specification payload
pub type ModelBuilder =
    fn(&str, Map<String, Value>) -> Result<Arc<dyn PredictionModel>, DomainError>;

#[derive(Debug)]
struct ModelTypeEntry {
    name: String,
    builder: ModelBuilder,
}

/// Ordered registry of model types
///
/// Lookup scans entries in registration order and the first entry with a
/// matching name wins; a duplicate name silently shadows later entries.
/// The implemented-types listing reports every entry, shadowed ones
/// included.
#[derive(Debug, Default)]
pub struct ModelTypeRegistry {
    entries: Vec<ModelTypeEntry>,
}

impl ModelTypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a type entry
    pub fn register(&mut self, name: impl Into<String>, builder: ModelBuilder) {
        let name = name.into();
        debug!(model_type = %name, "Registering model type");
        self.entries.push(ModelTypeEntry { name, builder });
    }

    /// Resolve a type name to its builder; first registration wins
    pub fn lookup(&self, name: &str) -> Option<ModelBuilder> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.builder)
    }

    /// Every registered type name, in registration order
    pub fn type_names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }
}
