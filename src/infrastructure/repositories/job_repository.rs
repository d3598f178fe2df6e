//! Job Repository Implementation
//!
//! PostgreSQL implementation of the JobRepository trait. Every query joins
//! the owning company so a `Job` is always returned complete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Company, Job, JobRepository, JobStatus, NewJob};
use crate::shared::error::AppError;

/// Projection shared by every job query; `j` may be the table or a CTE.
const JOB_COLUMNS: &str = r#"
    j.id, j.title, j.description, j.location, j.tags, j.status,
    j.created_at, j.updated_at,
    c.id AS company_id, c.name AS company_name,
    c.website AS company_website, c.created_at AS company_created_at
"#;

/// Database row of a job joined with its company.
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: i64,
    title: String,
    description: String,
    location: Option<String>,
    tags: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    company_id: i64,
    company_name: String,
    company_website: Option<String>,
    company_created_at: DateTime<Utc>,
}

impl JobRow {
    /// Convert database row to domain Job entity.
    fn into_job(self) -> Result<Job, AppError> {
        let status: JobStatus = self
            .status
            .parse()
            .map_err(|e| AppError::Internal(format!("job {}: {}", self.id, e)))?;

        Ok(Job {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            tags: self.tags,
            status,
            company: Company {
                id: self.company_id,
                name: self.company_name,
                website: self.company_website,
                created_at: self.company_created_at,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn into_jobs(rows: Vec<JobRow>) -> Result<Vec<Job>, AppError> {
    rows.into_iter().map(JobRow::into_job).collect()
}

/// Wrap `text` for a substring `ILIKE`, matching `%`, `_` and `\` literally.
fn contains_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// PostgreSQL job repository implementation.
#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    /// Create a new PgJobRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn create(&self, job: &NewJob) -> Result<Job, AppError> {
        let sql = format!(
            r#"
            WITH j AS (
                INSERT INTO jobs
                    (title, description, location, tags, status, company_id, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
            )
            SELECT {JOB_COLUMNS}
            FROM j
            INNER JOIN companies c ON c.id = j.company_id
            "#
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.location)
            .bind(&job.tags)
            .bind(job.status.as_str())
            .bind(job.company_id)
            .bind(job.created_at)
            .bind(job.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    AppError::NotFound(format!("Company with id {} not found", job.company_id))
                }
                _ => AppError::Database(e),
            })?;

        row.into_job()
    }

    async fn update(&self, job: &Job) -> Result<Job, AppError> {
        let sql = format!(
            r#"
            WITH j AS (
                UPDATE jobs
                SET title = $2,
                    description = $3,
                    location = $4,
                    tags = $5,
                    status = $6,
                    updated_at = $7
                WHERE id = $1
                RETURNING *
            )
            SELECT {JOB_COLUMNS}
            FROM j
            INNER JOIN companies c ON c.id = j.company_id
            "#
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(job.id)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.location)
            .bind(&job.tags)
            .bind(job.status.as_str())
            .bind(job.updated_at)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job with id {} not found", job.id)))?;

        row.into_job()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Job>, AppError> {
        let sql = format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            INNER JOIN companies c ON c.id = j.company_id
            WHERE j.id = $1
            "#
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(JobRow::into_job).transpose()
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(job_id = id, "Delete of missing job ignored");
        }

        Ok(())
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<Job>, AppError> {
        let sql = format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            INNER JOIN companies c ON c.id = j.company_id
            ORDER BY j.created_at DESC, j.id DESC
            LIMIT $1
            "#
        );

        let rows = sqlx::query_as::<_, JobRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        into_jobs(rows)
    }

    async fn search_by_title_or_company_name(
        &self,
        title: &str,
        company_name: &str,
    ) -> Result<Vec<Job>, AppError> {
        let sql = format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            INNER JOIN companies c ON c.id = j.company_id
            WHERE j.title ILIKE $1 ESCAPE '\'
               OR c.name ILIKE $2 ESCAPE '\'
            ORDER BY j.created_at DESC, j.id DESC
            "#
        );

        let rows = sqlx::query_as::<_, JobRow>(&sql)
            .bind(contains_pattern(title))
            .bind(contains_pattern(company_name))
            .fetch_all(&self.pool)
            .await?;

        into_jobs(rows)
    }
}
