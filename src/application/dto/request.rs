//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use url::Url;
use validator::{Validate, ValidationError};

use crate::domain::JobStatus;

/// Accept an id as a JSON number or a numeric string (`7` or `"7"`).
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Number(i64),
        Text(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Number(id) => Ok(id),
        IdRepr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{}'", text))),
    }
}

/// Treat `""` (and whitespace-only text) like an absent optional field.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Absolute `http` or `https` URL. Other schemes (`javascript:`, `data:`)
/// would end up as live links on the pages.
fn http_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => {
            let mut error = ValidationError::new("http_url");
            error.message = Some(Cow::Borrowed("must be an http or https URL"));
            Err(error)
        }
    }
}

/// Create job request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub tags: Option<String>,

    #[serde(deserialize_with = "deserialize_id")]
    pub company_id: i64,

    #[serde(default)]
    pub status: Option<JobStatus>,
}

/// Full replacement of a job's editable fields
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub tags: Option<String>,

    /// Left unchanged when omitted
    #[serde(default)]
    pub status: Option<JobStatus>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobStatusRequest {
    pub status: JobStatus,
}

/// Create company request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        custom(function = "http_url", message = "Website must be an http or https URL"),
        length(max = 255, message = "Website must be at most 255 characters")
    )]
    pub website: Option<String>,
}

/// Submit application request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub job_id: i64,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub applicant_name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub applicant_email: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub cover_letter: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        custom(function = "http_url", message = "Resume URL must be an http or https URL"),
        length(max = 500, message = "Resume URL must be at most 500 characters")
    )]
    pub resume_url: Option<String>,
}

/// `?q=` on job listings
#[derive(Debug, Default, Deserialize)]
pub struct SearchQueryParams {
    pub q: Option<String>,
}

/// `?jobId=&email=` on the application check endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckApplicationParams {
    pub job_id: i64,
    pub email: String,
}

/// Admin login form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
