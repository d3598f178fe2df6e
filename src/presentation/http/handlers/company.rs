//! Company Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::CreateCompanyRequest;
use crate::application::dto::response::CompanyResponse;
use crate::application::services::CreateCompanyDto;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// List all companies, ordered by name
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let companies = state.companies.list().await?;

    Ok(Json(companies.into_iter().map(CompanyResponse::from).collect()))
}

/// Get company by ID
pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<CompanyResponse>, AppError> {
    let company_id = parse_id(&company_id, "company")?;

    let company = state
        .companies
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Company not found".into()))?;

    Ok(Json(CompanyResponse::from(company)))
}

/// Register a new company
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateCompanyRequest>,
) -> Result<Json<CompanyResponse>, AppError> {
    let company = state
        .companies
        .create(CreateCompanyDto {
            name: body.name,
            website: body.website,
        })
        .await?;

    Ok(Json(CompanyResponse::from(company)))
}
