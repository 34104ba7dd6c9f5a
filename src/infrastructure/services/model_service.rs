//! Model service - creation, listing, deletion, and generic dispatch

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::model::{ModelId, ModelStore};
use crate::domain::DomainError;
use crate::infrastructure::model_types::ModelFactory;

/// Model management and invocation over a factory and a store
pub struct ModelService {
    factory: ModelFactory,
    store: Arc<dyn ModelStore>,
}

impl ModelService {
    /// Create a new ModelService over the given factory and store
    pub fn new(factory: ModelFactory, store: Arc<dyn ModelStore>) -> Self {
        Self { factory, store }
    }

    /// Every implemented model-type name, in registration order
    pub fn implemented_types(&self) -> Vec<String> {
        self.factory.implemented_types()
    }

    /// Construct a model of the named type and insert it into the store
    ///
    /// Returns the freshly assigned model ID. Nothing is inserted when
    /// construction fails.
    pub async fn create(
        &self,
        model_type: &str,
        specification: Map<String, Value>,
    ) -> Result<String, DomainError> {
        let model = self.factory.create(model_type, specification)?;
        let id = model.id().as_str().to_string();

        self.store.add(model).await?;
        debug!(model_id = %id, model_type = %model_type, "Model created");

        Ok(id)
    }

    /// IDs of every live model
    pub async fn list_ids(&self) -> Result<Vec<String>, DomainError> {
        let models = self.store.list().await?;
        Ok(models.iter().map(|m| m.id().as_str().to_string()).collect())
    }

    /// Function-call names of the addressed model
    pub async fn function_calls(&self, id: &str) -> Result<Vec<String>, DomainError> {
        let model = self
            .store
            .get(&ModelId::from_string(id))
            .await?
            .ok_or_else(|| DomainError::model_not_found(id))?;

        Ok(model.function_calls())
    }

    /// Invoke a named operation on the addressed model
    ///
    /// Resolution failures are distinguishable: an absent model fails
    /// `ModelNotFound`, an absent function `FunctionNotImplemented`, and a
    /// failure inside the operation itself propagates unmodified.
    pub async fn invoke(
        &self,
        id: &str,
        function: &str,
        input: Map<String, Value>,
    ) -> Result<Map<String, Value>, DomainError> {
        let model = self
            .store
            .get(&ModelId::from_string(id))
            .await?
            .ok_or_else(|| DomainError::model_not_found(id))?;

        debug!(model_id = %id, function = %function, "Invoking function call");
        let output = model.invoke(function, &input)?;

        Ok(normalize_output(function, output))
    }

    /// Delete the addressed model; fails with `ModelNotFound` if absent
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.remove(&ModelId::from_string(id)).await?;
        debug!(model_id = %id, "Model deleted");
        Ok(())
    }
}

/// Normalize an operation result into the uniform envelope body
///
/// Objects pass through unchanged. Anything else lands under the function
/// name as the single key: strings keep their content, other values take
/// their JSON rendering. Lossy for structured non-object results; kept
/// for wire compatibility.
fn normalize_output(function: &str, output: Value) -> Map<String, Value> {
    match output {
        Value::Object(map) => map,
        Value::String(s) => {
            let mut map = Map::new();
            map.insert(function.to_string(), Value::String(s));
            map
        }
        other => {
            let mut map = Map::new();
            map.insert(function.to_string(), Value::String(other.to_string()));
            map
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MockModelStore;
    use crate::infrastructure::model_types::registry_from_config;
    use crate::infrastructure::storage::InMemoryModelStore;
    use serde_json::json;

    fn service() -> ModelService {
        let registry =
            registry_from_config(&["lda".to_string(), "generic".to_string()]).unwrap();
        ModelService::new(
            ModelFactory::new(Arc::new(registry)),
            Arc::new(InMemoryModelStore::new()),
        )
    }

    fn generic_spec() -> Map<String, Value> {
        json!({
            "name": "G",
            "createdBy": "A",
            "description": "d",
            "creationParameters": {},
            "functionCalls": {
                "structured": {"topic": "ai", "score": 1},
                "scalar": 42,
                "greeting": "hello"
            }
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[tokio::test]
    async fn test_create_returns_id_and_stores_model() {
        let service = service();
        let id = service.create("generic", generic_spec()).await.unwrap();

        let ids = service.list_ids().await.unwrap();
        assert_eq!(ids, vec![id]);
    }

    #[tokio::test]
    async fn test_create_unregistered_type_inserts_nothing() {
        let service = service();
        let err = service.create("bert", generic_spec()).await.unwrap_err();

        assert!(matches!(err, DomainError::TypeNotImplemented { .. }));
        assert!(service.list_ids().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejected_specification_inserts_nothing() {
        let service = service();
        let err = service.create("generic", Map::new()).await.unwrap_err();

        assert!(matches!(err, DomainError::ConstructionRejected { .. }));
        assert!(service.list_ids().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let service = service();
        let first = service.create("generic", generic_spec()).await.unwrap();
        let second = service.create("generic", generic_spec()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(service.list_ids().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_function_calls_of_created_model() {
        let service = service();
        let id = service.create("generic", generic_spec()).await.unwrap();

        let mut calls = service.function_calls(&id).await.unwrap();
        calls.sort();
        assert_eq!(calls, vec!["greeting", "scalar", "structured"]);
    }

    #[tokio::test]
    async fn test_function_calls_of_absent_model() {
        let service = service();
        let err = service.function_calls("missing").await.unwrap_err();

        assert!(matches!(err, DomainError::ModelNotFound { .. }));
    }

    #[tokio::test]
    async fn test_invoke_mapping_result_passes_through() {
        let service = service();
        let id = service.create("generic", generic_spec()).await.unwrap();

        let output = service.invoke(&id, "structured", Map::new()).await.unwrap();
        assert_eq!(Value::Object(output), json!({"topic": "ai", "score": 1}));
    }

    #[tokio::test]
    async fn test_invoke_scalar_result_is_wrapped_under_function_name() {
        let service = service();
        let id = service.create("generic", generic_spec()).await.unwrap();

        let output = service.invoke(&id, "scalar", Map::new()).await.unwrap();
        assert_eq!(Value::Object(output), json!({"scalar": "42"}));
    }

    #[tokio::test]
    async fn test_invoke_string_result_keeps_its_content() {
        let service = service();
        let id = service.create("generic", generic_spec()).await.unwrap();

        let output = service.invoke(&id, "greeting", Map::new()).await.unwrap();
        assert_eq!(Value::Object(output), json!({"greeting": "hello"}));
    }

    #[tokio::test]
    async fn test_invoke_unknown_function_on_existing_model() {
        let service = service();
        let id = service.create("generic", generic_spec()).await.unwrap();

        let err = service.invoke(&id, "missing", Map::new()).await.unwrap_err();
        assert!(matches!(err, DomainError::FunctionNotImplemented { .. }));
    }

    #[tokio::test]
    async fn test_invoke_on_absent_model() {
        let service = service();
        let err = service
            .invoke("missing", "anything", Map::new())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ModelNotFound { .. }));
    }

    #[tokio::test]
    async fn test_operation_failure_propagates_unmodified() {
        let service = service();
        let spec = json!({
            "name": "Topics",
            "createdBy": "A",
            "creationParameters": {"numberOfTopics": 3}
        });
        let id = service
            .create("lda", spec.as_object().unwrap().clone())
            .await
            .unwrap();

        let args = json!({"document": "anything"});
        let err = service
            .invoke(&id, "predict", args.as_object().unwrap().clone())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::OperationFailure { .. }));
    }

    #[tokio::test]
    async fn test_delete_then_lookups_report_not_found() {
        let service = service();
        let id = service.create("generic", generic_spec()).await.unwrap();

        service.delete(&id).await.unwrap();

        assert!(service.list_ids().await.unwrap().is_empty());
        assert!(matches!(
            service.function_calls(&id).await.unwrap_err(),
            DomainError::ModelNotFound { .. }
        ));
        assert!(matches!(
            service.delete(&id).await.unwrap_err(),
            DomainError::ModelNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_lda_end_to_end_through_dispatch() {
        let service = service();
        let spec = json!({
            "name": "Topics",
            "createdBy": "A",
            "creationParameters": {"numberOfTopics": 2, "iterations": 3}
        });
        let id = service
            .create("lda", spec.as_object().unwrap().clone())
            .await
            .unwrap();

        let train = json!({"documents": ["alpha beta gamma", "beta gamma delta"]});
        service
            .invoke(&id, "train", train.as_object().unwrap().clone())
            .await
            .unwrap();

        let topics = service.invoke(&id, "getTopics", Map::new()).await.unwrap();
        assert_eq!(topics["topics"].as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_from_invoke() {
        let mut store = MockModelStore::new();
        store
            .expect_get()
            .returning(|_| Err(DomainError::storage("read lock poisoned")));

        let registry = registry_from_config(&["generic".to_string()]).unwrap();
        let service = ModelService::new(
            ModelFactory::new(Arc::new(registry)),
            Arc::new(store),
        );

        let err = service
            .invoke("any", "anything", Map::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[test]
    fn test_normalize_output_shapes() {
        assert_eq!(
            Value::Object(normalize_output("f", json!({"a": 1}))),
            json!({"a": 1})
        );
        assert_eq!(
            Value::Object(normalize_output("f", json!("text"))),
            json!({"f": "text"})
        );
        assert_eq!(
            Value::Object(normalize_output("f", json!(1.5))),
            json!({"f": "1.5"})
        );
        assert_eq!(
            Value::Object(normalize_output("f", json!([1, 2]))),
            json!({"f": "[1,2]"})
        );
        assert_eq!(
            Value::Object(normalize_output("f", Value::Null)),
            json!({"f": "null"})
        );
    }
}
