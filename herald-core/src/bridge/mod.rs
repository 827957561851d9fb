//! Native bridge
//!
//! The boundary to the host-provided native module: typed call marshaling in
//! one direction, event dispatch in the other.

mod adapter;
mod dispatcher;

pub use adapter::{AdapterError, BridgeError, NativeAdapter, NativeBridge};
pub use dispatcher::{DispatcherHandle, EventDispatcher, ForegroundEventObserver, RawNativeEvent};
