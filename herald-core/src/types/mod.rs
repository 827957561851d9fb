//! Public type surface
//!
//! The four exported type groups: library-level types, the generic
//! notification type, and the iOS/Android-specific variants.

pub mod android;
pub mod ios;
pub mod library;
pub mod notification;

mod id;

pub use android::*;
pub use ios::*;
pub use library::*;
pub use notification::*;

pub(crate) use id::generate_id;
