//! Remote host endpoint handlers

use axum::{extract::State, Json};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, RemoteHostDeleteRequest, RemoteHostListResponse};
use crate::domain::RemoteHost;

/// GET /v1/hosts
pub async fn list_remote_hosts(
    State(state): State<AppState>,
) -> Result<Json<RemoteHostListResponse>, ApiError> {
    debug!("Listing remote hosts");

    let remote_host_list = state.host_service.list().await.map_err(ApiError::from)?;

    Ok(Json(RemoteHostListResponse { remote_host_list }))
}

/// POST /v1/hosts
pub async fn add_remote_host(
    State(state): State<AppState>,
    Json(host): Json<RemoteHost>,
) -> Result<Json<RemoteHost>, ApiError> {
    debug!(ip = %host.ip, "Adding remote host");

    let added = state.host_service.add(host).await.map_err(ApiError::from)?;

    Ok(Json(added))
}

/// DELETE /v1/hosts
pub async fn delete_remote_host(
    State(state): State<AppState>,
    Json(request): Json<RemoteHostDeleteRequest>,
) -> Result<Json<RemoteHostDeleteRequest>, ApiError> {
    debug!(ip = %request.ip, "Deleting remote host");

    state
        .host_service
        .remove(&request.ip)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_state;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_add_echoes_and_lists_host() {
        let state = test_state();
        let host = RemoteHost::new("10.0.0.4").with_models(vec!["lda".to_string()]);

        let Json(added) = add_remote_host(State(state.clone()), Json(host.clone()))
            .await
            .unwrap();
        assert_eq!(added, host);

        let Json(response) = list_remote_hosts(State(state)).await.unwrap();
        assert_eq!(response.remote_host_list, vec![host]);
    }

    #[tokio::test]
    async fn test_delete_echoes_the_request() {
        let state = test_state();
        add_remote_host(State(state.clone()), Json(RemoteHost::new("10.0.0.4")))
            .await
            .unwrap();

        let request = RemoteHostDeleteRequest {
            ip: "10.0.0.4".to_string(),
        };
        let Json(deleted) = delete_remote_host(State(state.clone()), Json(request))
            .await
            .unwrap();
        assert_eq!(deleted.ip, "10.0.0.4");

        let Json(response) = list_remote_hosts(State(state)).await.unwrap();
        assert!(response.remote_host_list.is_empty());
    }

    #[tokio::test]
    async fn test_delete_absent_host_is_not_found() {
        let state = test_state();
        let request = RemoteHostDeleteRequest {
            ip: "10.0.0.9".to_string(),
        };

        let err = delete_remote_host(State(state), Json(request))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.response.error.code.as_deref(), Some("host_not_found"));
    }

    #[tokio::test]
    async fn test_add_invalid_address_is_bad_request() {
        let state = test_state();

        let err = add_remote_host(State(state), Json(RemoteHost::new("not-an-ip")))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
