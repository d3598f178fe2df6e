//! In-Memory Store
//!
//! A process-local implementation of every repository trait, used by the
//! test suite and by `storage.backend = "memory"` for local development.
//! All tables live behind one lock, so each repository call is atomic.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{
    Application, ApplicationRepository, Company, CompanyRepository, Job, JobRepository,
    JobStatus, NewApplication, NewCompany, NewJob,
};
use crate::shared::error::AppError;

/// Job as stored: the company is a reference, joined on read.
#[derive(Debug, Clone)]
struct JobRecord {
    id: i64,
    title: String,
    description: String,
    location: Option<String>,
    tags: Option<String>,
    status: JobStatus,
    company_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    companies: BTreeMap<i64, Company>,
    jobs: BTreeMap<i64, JobRecord>,
    applications: BTreeMap<i64, Application>,
    last_company_id: i64,
    last_job_id: i64,
    last_application_id: i64,
}

impl Tables {
    fn join(&self, record: &JobRecord) -> Result<Job, AppError> {
        let company = self.companies.get(&record.company_id).cloned().ok_or_else(|| {
            AppError::Internal(format!(
                "job {} references missing company {}",
                record.id, record.company_id
            ))
        })?;

        Ok(Job {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            tags: record.tags.clone(),
            status: record.status,
            company,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    /// Jobs matching `filter`, newest first.
    fn jobs_where<F>(&self, filter: F) -> Result<Vec<Job>, AppError>
    where
        F: Fn(&JobRecord, &Company) -> bool,
    {
        let mut records: Vec<&JobRecord> = self
            .jobs
            .values()
            .filter(|r| {
                self.companies
                    .get(&r.company_id)
                    .map(|c| filter(r, c))
                    .unwrap_or(false)
            })
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        records.into_iter().map(|r| self.join(r)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Shared in-memory tables. Cloning shares the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn create(&self, company: &NewCompany) -> Result<Company, AppError> {
        let mut tables = self.tables.write();

        if tables.companies.values().any(|c| c.name == company.name) {
            return Err(AppError::Conflict(format!(
                "Company '{}' already exists",
                company.name
            )));
        }

        tables.last_company_id += 1;
        let created = Company {
            id: tables.last_company_id,
            name: company.name.clone(),
            website: company.website.clone(),
            created_at: company.created_at,
        };
        tables.companies.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, AppError> {
        Ok(self.tables.read().companies.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, AppError> {
        Ok(self
            .tables
            .read()
            .companies
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Company>, AppError> {
        let mut companies: Vec<Company> = self.tables.read().companies.values().cloned().collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(companies)
    }
}

#[async_trait]
impl JobRepository for MemoryStore {
    async fn create(&self, job: &NewJob) -> Result<Job, AppError> {
        let mut tables = self.tables.write();

        if !tables.companies.contains_key(&job.company_id) {
            return Err(AppError::NotFound(format!(
                "Company with id {} not found",
                job.company_id
            )));
        }

        tables.last_job_id += 1;
        let record = JobRecord {
            id: tables.last_job_id,
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            tags: job.tags.clone(),
            status: job.status,
            company_id: job.company_id,
            created_at: job.created_at,
            updated_at: job.updated_at,
        };
        let created = tables.join(&record)?;
        tables.jobs.insert(record.id, record);

        Ok(created)
    }

    async fn update(&self, job: &Job) -> Result<Job, AppError> {
        let mut tables = self.tables.write();

        let record = tables
            .jobs
            .get_mut(&job.id)
            .ok_or_else(|| AppError::NotFound(format!("Job with id {} not found", job.id)))?;
        record.title = job.title.clone();
        record.description = job.description.clone();
        record.location = job.location.clone();
        record.tags = job.tags.clone();
        record.status = job.status;
        record.updated_at = job.updated_at;

        let record = record.clone();
        tables.join(&record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Job>, AppError> {
        let tables = self.tables.read();
        tables.jobs.get(&id).map(|r| tables.join(r)).transpose()
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.tables.write();
        if tables.jobs.remove(&id).is_some() {
            // ON DELETE CASCADE
            tables.applications.retain(|_, a| a.job_id != id);
        }
        Ok(())
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<Job>, AppError> {
        let mut jobs = self.tables.read().jobs_where(|_, _| true)?;
        jobs.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(jobs)
    }

    async fn search_by_title_or_company_name(
        &self,
        title: &str,
        company_name: &str,
    ) -> Result<Vec<Job>, AppError> {
        self.tables.read().jobs_where(|job, company| {
            contains_ignore_case(&job.title, title)
                || contains_ignore_case(&company.name, company_name)
        })
    }
}

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn create(&self, application: &NewApplication) -> Result<Application, AppError> {
        let mut tables = self.tables.write();

        if !tables.jobs.contains_key(&application.job_id) {
            return Err(AppError::NotFound(format!(
                "Job with id {} not found",
                application.job_id
            )));
        }

        let duplicate = tables.applications.values().any(|a| {
            a.job_id == application.job_id && a.applicant_email == application.applicant_email
        });
        if duplicate {
            return Err(AppError::Conflict(
                "You have already applied for this job".to_string(),
            ));
        }

        tables.last_application_id += 1;
        let created = Application {
            id: tables.last_application_id,
            job_id: application.job_id,
            applicant_name: application.applicant_name.clone(),
            applicant_email: application.applicant_email.clone(),
            cover_letter: application.cover_letter.clone(),
            resume_url: application.resume_url.clone(),
            created_at: application.created_at,
        };
        tables.applications.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_job(&self, job_id: i64) -> Result<Vec<Application>, AppError> {
        let mut applications: Vec<Application> = self
            .tables
            .read()
            .applications
            .values()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(applications)
    }

    async fn exists_by_job_and_email(&self, job_id: i64, email: &str) -> Result<bool, AppError> {
        Ok(self
            .tables
            .read()
            .applications
            .values()
            .any(|a| a.job_id == job_id && a.applicant_email == email))
    }
}
