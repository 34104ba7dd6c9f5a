//! Model endpoint handlers

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, FunctionCallsResponse, InvocationRequest, InvocationResponse, ModelCreationRequest,
    ModelCreationResponse, ModelDeletionResponse, ModelListResponse,
};

/// GET /v1/models/implemented
pub async fn list_implemented_types(
    State(state): State<AppState>,
) -> Result<Json<ModelListResponse>, ApiError> {
    debug!("Listing implemented model types");

    Ok(Json(ModelListResponse {
        models: state.model_service.implemented_types(),
    }))
}

/// GET /v1/models
pub async fn list_created_models(
    State(state): State<AppState>,
) -> Result<Json<ModelListResponse>, ApiError> {
    debug!("Listing created models");

    let models = state
        .model_service
        .list_ids()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ModelListResponse { models }))
}

/// POST /v1/models
pub async fn create_model(
    State(state): State<AppState>,
    Json(request): Json<ModelCreationRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ModelCreationResponse>), ApiError> {
    debug!(model_type = %request.model_type, "Creating model");

    let model_id = state
        .model_service
        .create(&request.model_type, request.model_specification)
        .await
        .map_err(ApiError::from)?;

    let location = format!("/v1/models/{}", model_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ModelCreationResponse { model_id }),
    ))
}

/// GET /v1/models/:model_id
pub async fn list_function_calls(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<FunctionCallsResponse>, ApiError> {
    debug!(model_id = %model_id, "Listing function calls");

    let function_calls = state
        .model_service
        .function_calls(&model_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(FunctionCallsResponse { function_calls }))
}

/// POST /v1/models/:model_id
pub async fn run_function(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
    Json(request): Json<InvocationRequest>,
) -> Result<Json<InvocationResponse>, ApiError> {
    debug!(model_id = %model_id, function = %request.function_call, "Running function call");

    let output_data = state
        .model_service
        .invoke(&model_id, &request.function_call, request.input_data)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(InvocationResponse { output_data }))
}

/// DELETE /v1/models/:model_id
pub async fn delete_model(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<ModelDeletionResponse>, ApiError> {
    debug!(model_id = %model_id, "Deleting model");

    state
        .model_service
        .delete(&model_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ModelDeletionResponse { model_id }))
}
