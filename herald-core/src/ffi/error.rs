//! Error types exposed across the FFI boundary

use crate::api::BindingError;
use crate::bridge::BridgeError;

/// Errors surfaced to host shells
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Native module {0} is not available")]
    ModuleUnavailable(String),

    #[error("Native call failed ({code}): {message}")]
    NativeCall { code: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Event dispatch is not running")]
    DispatchClosed,

    #[error("Notification module has not been initialized")]
    NotInitialized,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BridgeError> for CoreError {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::ModuleUnavailable(name) => CoreError::ModuleUnavailable(name),
            BridgeError::Call { code, message, .. } => CoreError::NativeCall { code, message },
            BridgeError::Codec(e) => CoreError::Serialization(e.to_string()),
            BridgeError::DispatchClosed => CoreError::DispatchClosed,
            BridgeError::Runtime(e) => CoreError::Internal(e.to_string()),
        }
    }
}

impl From<BindingError> for CoreError {
    fn from(e: BindingError) -> Self {
        match e {
            BindingError::InvalidConfig(reason) => CoreError::InvalidConfig(reason),
            BindingError::Bridge(e) => e.into(),
        }
    }
}
