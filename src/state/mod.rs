//! State Management
//!
//! Cached auth blob, global app state, and the equipment SSE subscription.

pub mod auth;
pub mod global;
pub mod stream;

pub use auth::get_auth;
pub use global::use_app_state;
pub use stream::subscribe_equipment_stream;
