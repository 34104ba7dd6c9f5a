//! Host directory seam

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::RemoteHost;
use crate::domain::DomainError;

/// Flat directory of remote hosts, keyed by address
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HostDirectory: Send + Sync {
    /// Insert a host; re-adding an address replaces the existing record
    async fn add(&self, host: RemoteHost) -> Result<(), DomainError>;

    /// Every tracked host
    async fn list(&self) -> Result<Vec<RemoteHost>, DomainError>;

    /// Remove by address, returning whether an entry existed
    async fn remove(&self, ip: &str) -> Result<bool, DomainError>;
}
