//! Native module adapter
//!
//! The host shell supplies the platform notification module behind the
//! `NativeAdapter` interface; `NativeBridge` marshals typed requests onto it.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reported by a host adapter
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum AdapterError {
    #[error("native module is not available")]
    Unavailable,

    #[error("native call failed ({code}): {message}")]
    Call { code: String, message: String },
}

/// Bridge-level errors
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("native module {0} is not available")]
    ModuleUnavailable(String),

    #[error("native call {method} failed ({code}): {message}")]
    Call {
        method: String,
        code: String,
        message: String,
    },

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("event dispatch task is not running")]
    DispatchClosed,

    #[error("failed to start event dispatch runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// The host-provided native module
///
/// Implemented by the host shell (Swift/Kotlin) over the platform's
/// notification APIs, and by in-memory doubles in tests. Methods are invoked
/// by name with a JSON payload and reply with JSON; the set of methods is the
/// contract between this library and its native counterpart.
#[uniffi::export(callback_interface)]
pub trait NativeAdapter: Send + Sync {
    /// Whether the native module is registered and ready to take calls
    fn is_available(&self) -> bool;

    /// Invoke a named method with a JSON payload, returning its JSON reply
    fn invoke(&self, method: String, payload: String) -> Result<String, AdapterError>;
}

/// Typed call layer over a [`NativeAdapter`]
#[derive(Clone)]
pub struct NativeBridge {
    module_name: String,
    adapter: Arc<dyn NativeAdapter>,
}

impl NativeBridge {
    pub fn new(module_name: impl Into<String>, adapter: Arc<dyn NativeAdapter>) -> Self {
        Self {
            module_name: module_name.into(),
            adapter,
        }
    }

    /// Name of the native module this bridge talks to
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Whether the underlying native module is reachable
    pub fn is_available(&self) -> bool {
        self.adapter.is_available()
    }

    /// Invoke a native method and deserialize its typed reply
    pub fn call<Req, Resp>(&self, method: &str, request: &Req) -> Result<Resp, BridgeError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let reply = self.invoke_raw(method, request)?;
        Ok(serde_json::from_str(&reply)?)
    }

    /// Invoke a native method, discarding the reply body
    pub fn call_ack<Req: Serialize>(&self, method: &str, request: &Req) -> Result<(), BridgeError> {
        self.invoke_raw(method, request).map(|_| ())
    }

    fn invoke_raw<Req: Serialize>(&self, method: &str, request: &Req) -> Result<String, BridgeError> {
        let payload = serde_json::to_string(request)?;
        debug!("Invoking {}.{}", self.module_name, method);

        self.adapter
            .invoke(method.to_string(), payload)
            .map_err(|e| {
                warn!("{}.{} failed: {}", self.module_name, method, e);
                match e {
                    AdapterError::Unavailable => {
                        BridgeError::ModuleUnavailable(self.module_name.clone())
                    }
                    AdapterError::Call { code, message } => BridgeError::Call {
                        method: method.to_string(),
                        code,
                        message,
                    },
                }
            })
    }
}
