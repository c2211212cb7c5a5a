// src/handlers/companies.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::validation::ValidatedJson,
    models::company::{Company, CreateCompanyPayload, UpdateCompanyPayload},
};

// GET /companies
#[utoipa::path(
    get,
    path = "/companies",
    tag = "Companies",
    description = "Get all companies",
    responses(
        (status = 200, description = "List of companies", body = Vec<Company>)
    )
)]
pub async fn list_companies(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.company_repo.list().await)
}

// POST /companies
#[utoipa::path(
    post,
    path = "/companies",
    tag = "Companies",
    description = "Create a new company",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Company created successfully")
    )
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCompanyPayload>,
) -> impl IntoResponse {
    app_state.company_repo.create(payload).await;
    StatusCode::CREATED
}

// GET /companies/{id}
#[utoipa::path(
    get,
    path = "/companies/{id}",
    tag = "Companies",
    description = "Get a company by ID",
    params(("id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company details", body = Company),
        (status = 404, description = "Company not found")
    )
)]
pub async fn get_company(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = app_state.company_repo.find_by_id(&id).await?;
    Ok(Json(company))
}

// PUT /companies/{id}
#[utoipa::path(
    put,
    path = "/companies/{id}",
    tag = "Companies",
    description = "Update a company by ID",
    params(("id" = String, Path, description = "Company ID")),
    request_body = UpdateCompanyPayload,
    responses(
        (status = 200, description = "Company updated successfully"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn update_company(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.company_repo.update(&id, payload).await?;
    Ok(StatusCode::OK)
}

// DELETE /companies/{id}
#[utoipa::path(
    delete,
    path = "/companies/{id}",
    tag = "Companies",
    description = "Delete a company by ID",
    params(("id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company deleted successfully"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn delete_company(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.company_repo.delete(&id).await?;
    Ok(StatusCode::OK)
}
