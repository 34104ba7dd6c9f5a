//! Domain layer - Core business logic and entities

pub mod error;
pub mod host;
pub mod model;

pub use error::DomainError;
pub use host::{validate_host_ip, HostDirectory, HostValidationError, RemoteHost};
pub use model::{
    GenericModel, GenericModelSpec, LdaModel, LdaModelSpec, LdaParameters, ModelId, ModelStore,
    PredictionModel,
};
