use thiserror::Error;

/// Core domain errors
///
/// The first six variants form the outward-facing failure taxonomy; each
/// maps to a distinct HTTP status and error code at the API boundary. The
/// remaining variants cover internal conditions.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Model type '{model_type}' not implemented")]
    TypeNotImplemented { model_type: String },

    #[error("Model specification rejected for type '{model_type}': {message}")]
    ConstructionRejected { model_type: String, message: String },

    #[error("Model '{id}' not found")]
    ModelNotFound { id: String },

    #[error("Function '{function}' not implemented")]
    FunctionNotImplemented { function: String },

    #[error("Function '{function}' failed: {message}")]
    OperationFailure { function: String, message: String },

    #[error("Host '{ip}' not found")]
    HostNotFound { ip: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn type_not_implemented(model_type: impl Into<String>) -> Self {
        Self::TypeNotImplemented {
            model_type: model_type.into(),
        }
    }

    pub fn construction_rejected(
        model_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ConstructionRejected {
            model_type: model_type.into(),
            message: message.into(),
        }
    }

    pub fn model_not_found(id: impl Into<String>) -> Self {
        Self::ModelNotFound { id: id.into() }
    }

    pub fn function_not_implemented(function: impl Into<String>) -> Self {
        Self::FunctionNotImplemented {
            function: function.into(),
        }
    }

    pub fn operation_failure(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OperationFailure {
            function: function.into(),
            message: message.into(),
        }
    }

    pub fn host_not_found(ip: impl Into<String>) -> Self {
        Self::HostNotFound { ip: ip.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
