//! HTTP API
//!
//! JSON endpoints under `/api` plus health and metrics.

pub mod extractors;
pub mod handlers;
pub mod routes;
