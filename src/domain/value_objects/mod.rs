//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! - **JobStatus**: publication state of a job posting

mod job_status;

pub use job_status::*;
