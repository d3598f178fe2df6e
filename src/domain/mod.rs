//! # Domain Layer
//!
//! The domain layer contains the core business types of the job board.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Company, Job, Application and their repository traits
//! - **value_objects**: Immutable value types (JobStatus)

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
