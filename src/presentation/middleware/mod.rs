//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod metrics;
pub mod session;

pub use session::{current_session, require_session, AdminSession, SESSION_COOKIE};
