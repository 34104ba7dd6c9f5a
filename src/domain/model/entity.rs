//! Model identity and the capability contract every model variant implements

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::DomainError;

/// Opaque model identifier, generated at construction time
///
/// The ID is the sole external handle for a stored model. It is unique
/// across all live models in a store and never reused for the model's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(String);

impl ModelId {
    /// Generate a fresh, never-before-issued identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier received from a caller (e.g., a path parameter)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability contract for prediction model variants
///
/// Every variant exposes a finite set of named operations ("function
/// calls") and supports invocation of any one of them by name with
/// keyword-style arguments (a JSON object). Invoking a name not listed in
/// `function_calls` fails with `FunctionNotImplemented`; a failure inside
/// the operation itself surfaces as `OperationFailure`.
///
/// Invocations may run concurrently against the same instance; each
/// variant is responsible for its own interior synchronization. The
/// dispatcher imposes no timeout on a long-running operation.
pub trait PredictionModel: Send + Sync + Debug {
    /// The model's unique identifier
    fn id(&self) -> &ModelId;

    /// The type tag this model was created under (immutable)
    fn model_type(&self) -> &str;

    /// Display name from the construction payload
    fn name(&self) -> &str;

    /// Names of the operations this model exposes
    fn function_calls(&self) -> Vec<String>;

    /// Invoke a named operation with keyword-style arguments
    fn invoke(&self, function: &str, args: &Map<String, Value>) -> Result<Value, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ModelId::generate();
        let b = ModelId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_id_is_uuid() {
        let id = ModelId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_from_string_round_trip() {
        let id = ModelId::from_string("some-opaque-handle");
        assert_eq!(id.as_str(), "some-opaque-handle");
        assert_eq!(id.to_string(), "some-opaque-handle");
    }
}
