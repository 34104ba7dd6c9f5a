//! API wire types

pub mod error;
pub mod hosts;
pub mod models;

pub use error::{ApiError, ApiErrorResponse};
pub use hosts::{RemoteHostDeleteRequest, RemoteHostListResponse};
pub use models::{
    FunctionCallsResponse, InvocationRequest, InvocationResponse, ModelCreationRequest,
    ModelCreationResponse, ModelDeletionResponse, ModelListResponse,
};
