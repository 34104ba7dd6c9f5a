//! Model endpoint wire types
//!
//! Field names follow the service's established wire format
//! (`modelType`, `modelSpecification`, `functionCall`, `inputData`,
//! `outputData`, `modelID`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to create a model: the declared type plus the free-form
/// specification the variant's schema validates
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCreationRequest {
    pub model_type: String,
    #[serde(default)]
    pub model_specification: Map<String, Value>,
}

/// Response for a successful model creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCreationResponse {
    #[serde(rename = "modelID")]
    pub model_id: String,
}

/// Response for a successful model deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDeletionResponse {
    #[serde(rename = "modelID")]
    pub model_id: String,
}

/// Response listing model-type names or created model IDs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelListResponse {
    pub models: Vec<String>,
}

/// Response listing a model's function calls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallsResponse {
    pub function_calls: Vec<String>,
}

/// Request to invoke a named function call with keyword-style arguments
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    pub function_call: String,
    #[serde(default)]
    pub input_data: Map<String, Value>,
}

/// Normalized invocation result envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub output_data: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_creation_request_wire_format() {
        let request: ModelCreationRequest = serde_json::from_value(json!({
            "modelType": "generic",
            "modelSpecification": {"name": "G", "createdBy": "A"}
        }))
        .unwrap();

        assert_eq!(request.model_type, "generic");
        assert_eq!(request.model_specification["name"], json!("G"));
    }

    #[test]
    fn test_creation_request_defaults_specification() {
        let request: ModelCreationRequest =
            serde_json::from_value(json!({"modelType": "generic"})).unwrap();
        assert!(request.model_specification.is_empty());
    }

    #[test]
    fn test_creation_response_uses_model_id_key() {
        let response = ModelCreationResponse {
            model_id: "abc".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"modelID":"abc"}"#);
    }

    #[test]
    fn test_invocation_request_wire_format() {
        let request: InvocationRequest = serde_json::from_value(json!({
            "functionCall": "predict",
            "inputData": {"document": "text"}
        }))
        .unwrap();

        assert_eq!(request.function_call, "predict");
        assert_eq!(request.input_data["document"], json!("text"));
    }

    #[test]
    fn test_invocation_response_wire_format() {
        let mut output = Map::new();
        output.insert("predict".to_string(), json!("ok"));

        let json = serde_json::to_string(&InvocationResponse { output_data: output }).unwrap();
        assert_eq!(json, r#"{"outputData":{"predict":"ok"}}"#);
    }

    #[test]
    fn test_function_calls_response_wire_format() {
        let response = FunctionCallsResponse {
            function_calls: vec!["train".to_string()],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"functionCalls":["train"]}"#);
    }
}
