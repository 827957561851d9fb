//! Herald - Cross-Platform Notifications
//!
//! This library wires a typed notification facade onto a native module
//! supplied by the host app shell. The shell hands the module an adapter for
//! the platform's notification APIs and gets back one object carrying the
//! full API surface plus the library's version metadata.

pub mod api;
pub mod bridge;
pub mod ffi;
pub mod types;

// Re-exports for convenience
pub use api::{ApiBinding, BindingConfig, BindingError};
pub use bridge::{ForegroundEventObserver, NativeAdapter, NativeBridge};
pub use ffi::{CoreError, NotificationModule, SDK_VERSION};
pub use types::{
    AndroidChannel, AuthorizationStatus, EventType, Notification, NotificationAndroid,
    NotificationEvent, NotificationIOS, NotificationSettings, Trigger,
};

// Setup uniffi scaffolding
uniffi::setup_scaffolding!();
