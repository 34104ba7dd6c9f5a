//! Remote host domain: entity, validation, and the directory seam

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::RemoteHost;
pub use repository::HostDirectory;
pub use validation::{validate_host_ip, HostValidationError};

#[cfg(test)]
pub use repository::MockHostDirectory;
