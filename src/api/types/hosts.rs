//! Host endpoint wire types

use serde::{Deserialize, Serialize};

use crate::domain::RemoteHost;

/// Response listing every tracked remote host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteHostListResponse {
    pub remote_host_list: Vec<RemoteHost>,
}

/// Request/response for host deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteHostDeleteRequest {
    pub ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_wire_format() {
        let response = RemoteHostListResponse {
            remote_host_list: vec![RemoteHost::new("10.0.0.4")],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"remote_host_list\""));
        assert!(json.contains("\"10.0.0.4\""));
    }

    #[test]
    fn test_delete_request_round_trip() {
        let request: RemoteHostDeleteRequest =
            serde_json::from_str(r#"{"ip": "10.0.0.4"}"#).unwrap();
        assert_eq!(request.ip, "10.0.0.4");
    }
}
