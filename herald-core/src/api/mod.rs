//! Notification API
//!
//! The binding object and the payloads it marshals onto the native module.

mod binding;
mod requests;

pub use binding::{ApiBinding, BindingConfig, BindingError};
