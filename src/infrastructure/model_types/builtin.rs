//! Built-in model type builders
//!
//! Adding a new variant means implementing the capability contract and
//! adding one entry to `builtin_builders`.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::registry::{ModelBuilder, ModelTypeRegistry};
use crate::domain::model::{
    GenericModel, GenericModelSpec, LdaModel, LdaModelSpec, PredictionModel,
};
use crate::domain::DomainError;

/// Every builder shipped with the service, keyed by its default type name
pub fn builtin_builders() -> Vec<(&'static str, ModelBuilder)> {
    vec![("lda", build_lda), ("generic", build_generic)]
}

/// Build a registry from the configured implemented-type list
///
/// The list selects and orders entries from the built-in set; a name with
/// no built-in builder is a configuration error.
pub fn registry_from_config(implemented: &[String]) -> Result<ModelTypeRegistry, DomainError> {
    let builders = builtin_builders();
    let mut registry = ModelTypeRegistry::new();

    for name in implemented {
        let builder = builders
            .iter()
            .find(|(builtin, _)| *builtin == name.as_str())
            .map(|(_, builder)| *builder)
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "No built-in model type named '{}'",
                    name
                ))
            })?;

        registry.register(name, builder);
    }

    Ok(registry)
}

fn build_generic(
    model_type: &str,
    spec: Map<String, Value>,
) -> Result<Arc<dyn PredictionModel>, DomainError> {
    let spec: GenericModelSpec = deserialize_spec(model_type, spec)?;
    Ok(Arc::new(GenericModel::from_spec(model_type, spec)))
}

fn build_lda(
    model_type: &str,
    spec: Map<String, Value>,
) -> Result<Arc<dyn PredictionModel>, DomainError> {
    let spec: LdaModelSpec = deserialize_spec(model_type, spec)?;
    Ok(Arc::new(LdaModel::from_spec(model_type, spec)))
}

/// Validate the free-form payload against the variant's typed schema
fn deserialize_spec<T: serde::de::DeserializeOwned>(
    model_type: &str,
    spec: Map<String, Value>,
) -> Result<T, DomainError> {
    serde_json::from_value(Value::Object(spec))
        .map_err(|e| DomainError::construction_rejected(model_type, e.to_string()))
}
