//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **JobService**: job listing, search and lifecycle
//! - **ApplicationService**: submitting and querying applications
//! - **CompanyService**: company listing and registration
//! - **AuthService**: admin login and session tokens for the HTML pages

pub mod application_service;
pub mod auth_service;
pub mod company_service;
pub mod job_service;

pub use application_service::{
    ApplicationError, ApplicationService, ApplicationServiceImpl, SubmitApplicationDto,
};
pub use auth_service::{AuthError, AuthService, Claims};
pub use company_service::{CompanyError, CompanyService, CompanyServiceImpl, CreateCompanyDto};
pub use job_service::{CreateJobDto, JobError, JobService, JobServiceImpl, UpdateJobDto};
