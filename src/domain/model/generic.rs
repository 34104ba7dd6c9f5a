//! Generic model variant
//!
//! A data-driven model whose function calls are declared in the
//! construction payload: each entry maps an operation name to a canned
//! response value. Useful as a stand-in model and as the reference
//! implementation of the capability contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{ModelId, PredictionModel};
use crate::domain::DomainError;

/// Construction payload for the generic model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericModelSpec {
    pub name: String,
    pub created_by: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub creation_parameters: Map<String, Value>,
    #[serde(default)]
    pub function_calls: Map<String, Value>,
}

/// Generic model instance
#[derive(Debug)]
pub struct GenericModel {
    id: ModelId,
    model_type: String,
    spec: GenericModelSpec,
    created_at: DateTime<Utc>,
}

impl GenericModel {
    /// Construct from a validated specification, assigning a fresh ID
    pub fn from_spec(model_type: impl Into<String>, spec: GenericModelSpec) -> Self {
        Self {
            id: ModelId::generate(),
            model_type: model_type.into(),
            spec,
            created_at: Utc::now(),
        }
    }

    pub fn created_by(&self) -> &str {
        &self.spec.created_by
    }

    pub fn description(&self) -> &str {
        &self.spec.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl PredictionModel for GenericModel {
    fn id(&self) -> &ModelId {
        &self.id
    }

    fn model_type(&self) -> &str {
        &self.model_type
    }

    fn name(&self) -> &str {
        &self.spec.name
    }

    fn function_calls(&self) -> Vec<String> {
        self.spec.function_calls.keys().cloned().collect()
    }

    fn invoke(&self, function: &str, _args: &Map<String, Value>) -> Result<Value, DomainError> {
        self.spec
            .function_calls
            .get(function)
            .cloned()
            .ok_or_else(|| DomainError::function_not_implemented(function))
    }
}
