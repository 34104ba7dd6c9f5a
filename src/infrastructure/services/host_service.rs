//! Host service - CRUD over the remote host directory

use std::sync::Arc;

use tracing::debug;

use crate::domain::host::{validate_host_ip, HostDirectory};
use crate::domain::{DomainError, RemoteHost};

/// Remote host management
pub struct HostService {
    directory: Arc<dyn HostDirectory>,
}

impl HostService {
    /// Create a new HostService over the given directory
    pub fn new(directory: Arc<dyn HostDirectory>) -> Self {
        Self { directory }
    }

    /// Add a host; re-adding an address replaces the existing record
    pub async fn add(&self, host: RemoteHost) -> Result<RemoteHost, DomainError> {
        validate_host_ip(&host.ip).map_err(|e| DomainError::validation(e.to_string()))?;

        self.directory.add(host.clone()).await?;
        debug!(ip = %host.ip, "Remote host added");

        Ok(host)
    }

    /// Every tracked host
    pub async fn list(&self) -> Result<Vec<RemoteHost>, DomainError> {
        self.directory.list().await
    }

    /// Remove by address; fails with `HostNotFound` if absent
    pub async fn remove(&self, ip: &str) -> Result<(), DomainError> {
        if !self.directory.remove(ip).await? {
            return Err(DomainError::host_not_found(ip));
        }

        debug!(ip = %ip, "Remote host removed");
        Ok(())
    }
}
