//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! - **PgCompanyRepository** - companies
//! - **PgJobRepository** - jobs, always joined with their company
//! - **PgApplicationRepository** - applications, unique per (job, email)
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use job_board::infrastructure::repositories::{
//!     PgApplicationRepository, PgCompanyRepository, PgJobRepository,
//! };
//!
//! fn setup_repositories(pool: PgPool) {
//!     let companies = PgCompanyRepository::new(pool.clone());
//!     let jobs = PgJobRepository::new(pool.clone());
//!     let applications = PgApplicationRepository::new(pool);
//! }
//! ```

pub mod application_repository;
pub mod company_repository;
pub mod job_repository;

pub use application_repository::PgApplicationRepository;
pub use company_repository::PgCompanyRepository;
pub use job_repository::PgJobRepository;
