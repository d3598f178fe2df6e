//! Presentation Layer
//!
//! JSON API, HTML pages and the middleware in front of both.

pub mod http;
pub mod middleware;
pub mod web;
