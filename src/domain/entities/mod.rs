//! # Domain Entities
//!
//! Core domain entities of the job board. All entities map directly to their
//! corresponding database tables.
//!
//! - **Company**: an employer posting jobs
//! - **Job**: a posting owned by exactly one company
//! - **Application**: an applicant's submission for a job
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer (PostgreSQL and
//! in-memory), following the dependency inversion principle.

mod application;
mod company;
mod job;

pub use application::{Application, ApplicationRepository, NewApplication};
pub use company::{Company, CompanyRepository, NewCompany};
pub use job::{Job, JobRepository, NewJob, RECENT_JOBS_LIMIT};

#[cfg(test)]
pub use application::MockApplicationRepository;
#[cfg(test)]
pub use company::MockCompanyRepository;
#[cfg(test)]
pub use job::MockJobRepository;
