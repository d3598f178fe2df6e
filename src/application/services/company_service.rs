//! Company Service
//!
//! Handles company listing and registration.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Company, CompanyRepository, NewCompany};
use crate::shared::error::AppError;

/// Company service trait
#[async_trait]
pub trait CompanyService: Send + Sync {
    async fn list(&self) -> Result<Vec<Company>, CompanyError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, CompanyError>;

    /// Register a company; names are unique
    async fn create(&self, request: CreateCompanyDto) -> Result<Company, CompanyError>;
}

#[derive(Debug, Clone)]
pub struct CreateCompanyDto {
    pub name: String,
    pub website: Option<String>,
}

/// Company service errors
#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    #[error("Company '{0}' already exists")]
    DuplicateName(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for CompanyError {
    fn from(e: AppError) -> Self {
        CompanyError::Internal(e.to_string())
    }
}

impl From<CompanyError> for AppError {
    fn from(e: CompanyError) -> Self {
        match e {
            CompanyError::DuplicateName(_) => AppError::Conflict(e.to_string()),
            CompanyError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// CompanyService implementation
pub struct CompanyServiceImpl<C>
where
    C: CompanyRepository,
{
    company_repo: Arc<C>,
}

impl<C> CompanyServiceImpl<C>
where
    C: CompanyRepository,
{
    pub fn new(company_repo: Arc<C>) -> Self {
        Self { company_repo }
    }
}

#[async_trait]
impl<C> CompanyService for CompanyServiceImpl<C>
where
    C: CompanyRepository + 'static,
{
    async fn list(&self) -> Result<Vec<Company>, CompanyError> {
        Ok(self.company_repo.find_all().await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, CompanyError> {
        Ok(self.company_repo.find_by_id(id).await?)
    }

    async fn create(&self, request: CreateCompanyDto) -> Result<Company, CompanyError> {
        let name = request.name.trim().to_string();

        if self.company_repo.find_by_name(&name).await?.is_some() {
            return Err(CompanyError::DuplicateName(name));
        }

        let company = NewCompany {
            name: name.clone(),
            website: request.website,
            created_at: Utc::now(),
        };

        let created = self.company_repo.create(&company).await.map_err(|e| match e {
            AppError::Conflict(_) => CompanyError::DuplicateName(name),
            e => CompanyError::from(e),
        })?;

        tracing::info!(company_id = created.id, name = %created.name, "Company created");

        Ok(created)
    }
}
