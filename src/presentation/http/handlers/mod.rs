//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod application;
pub mod company;
pub mod health;
pub mod job;
