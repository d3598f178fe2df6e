//! Response DTOs
//!
//! Data structures for API response bodies. Field names are camelCase to
//! match what the browser client expects.

use serde::Serialize;

use crate::domain::{Application, Company, Job};

/// Company response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
    pub created_at: String,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            website: company.website,
            created_at: company.created_at.to_rfc3339(),
        }
    }
}

/// Job response, with its company embedded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub tags: Option<String>,
    pub status: String,
    pub company: CompanyResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            location: job.location,
            tags: job.tags,
            status: job.status.as_str().to_string(),
            company: CompanyResponse::from(job.company),
            created_at: job.created_at.to_rfc3339(),
            updated_at: job.updated_at.to_rfc3339(),
        }
    }
}

/// Application response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: i64,
    pub job_id: i64,
    pub applicant_name: String,
    pub applicant_email: String,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: String,
}

impl From<Application> for ApplicationResponse {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            applicant_name: application.applicant_name,
            applicant_email: application.applicant_email,
            cover_letter: application.cover_letter,
            resume_url: application.resume_url,
            created_at: application.created_at.to_rfc3339(),
        }
    }
}

/// Result of the "has this email applied?" check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HasAppliedResponse {
    pub has_applied: bool,
}
