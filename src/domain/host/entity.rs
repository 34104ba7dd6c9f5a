//! Remote host entity

use serde::{Deserialize, Serialize};

/// A remote execution target tracked by the host directory
///
/// Hosts are keyed by address and carry the model-type names they claim
/// to serve. No relationship to stored models is enforced in this
/// version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteHost {
    /// Network address, the directory key
    pub ip: String,

    /// Service port, if the host does not use the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Model-type names the host claims to serve
    #[serde(default)]
    pub models: Vec<String>,
}

impl RemoteHost {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            port: None,
            models: Vec::new(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_builder() {
        let host = RemoteHost::new("10.0.0.4")
            .with_port(8001)
            .with_models(vec!["lda".to_string()]);

        assert_eq!(host.ip, "10.0.0.4");
        assert_eq!(host.port, Some(8001));
        assert_eq!(host.models, vec!["lda"]);
    }

    #[test]
    fn test_host_serialization_skips_absent_port() {
        let host = RemoteHost::new("10.0.0.4");
        let json = serde_json::to_string(&host).unwrap();

        assert!(json.contains("\"ip\":\"10.0.0.4\""));
        assert!(!json.contains("port"));
    }

    #[test]
    fn test_host_deserialization_defaults_models() {
        let host: RemoteHost = serde_json::from_str(r#"{"ip": "10.0.0.4"}"#).unwrap();
        assert!(host.models.is_empty());
    }
}
