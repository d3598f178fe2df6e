//! Company entity and repository trait.
//!
//! Maps to the `companies` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::error::AppError;

/// A company that posts jobs.
///
/// Maps to the `companies` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL UNIQUE
/// - website: VARCHAR(255) NULL
/// - created_at: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    /// Database-assigned ID
    pub id: i64,

    /// Unique company name
    pub name: String,

    /// Company homepage
    pub website: Option<String>,

    /// Creation timestamp, assigned by the service layer
    pub created_at: DateTime<Utc>,
}

/// A company that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for Company data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a company. A duplicate name yields `AppError::Conflict`.
    async fn create(&self, company: &NewCompany) -> Result<Company, AppError>;

    /// Find a company by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, AppError>;

    /// Find a company by its exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, AppError>;

    /// All companies, ordered by name.
    async fn find_all(&self) -> Result<Vec<Company>, AppError>;
}
