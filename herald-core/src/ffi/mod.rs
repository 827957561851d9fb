//! FFI surface for native host shells
//!
//! This module provides the interface exposed via uniffi to Swift/Kotlin.

mod error;
mod module;

pub use error::CoreError;
pub use module::{NotificationModule, NATIVE_MODULE_NAME, NOTIFICATION_EVENT, SDK_VERSION};
