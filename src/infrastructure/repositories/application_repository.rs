//! Application Repository Implementation
//!
//! PostgreSQL implementation of the ApplicationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Application, ApplicationRepository, NewApplication};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: i64,
    job_id: i64,
    applicant_name: String,
    applicant_email: String,
    cover_letter: Option<String>,
    resume_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ApplicationRow> for Application {
    fn from(row: ApplicationRow) -> Self {
        Application {
            id: row.id,
            job_id: row.job_id,
            applicant_name: row.applicant_name,
            applicant_email: row.applicant_email,
            cover_letter: row.cover_letter,
            resume_url: row.resume_url,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL application repository implementation.
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    /// Create a new PgApplicationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn create(&self, application: &NewApplication) -> Result<Application, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications
                (job_id, applicant_name, applicant_email, cover_letter, resume_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, job_id, applicant_name, applicant_email,
                      cover_letter, resume_url, created_at
            "#,
        )
        .bind(application.job_id)
        .bind(&application.applicant_name)
        .bind(&application.applicant_email)
        .bind(&application.cover_letter)
        .bind(&application.resume_url)
        .bind(application.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // uq_applications_job_email: a concurrent submit won the race
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("You have already applied for this job".to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound(format!("Job with id {} not found", application.job_id))
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into())
    }

    async fn find_by_job(&self, job_id: i64) -> Result<Vec<Application>, AppError> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, job_id, applicant_name, applicant_email, cover_letter, resume_url, created_at
            FROM applications
            WHERE job_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Application::from).collect())
    }

    async fn exists_by_job_and_email(&self, job_id: i64, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM applications
                WHERE job_id = $1 AND applicant_email = $2
            )
            "#,
        )
        .bind(job_id)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
