// src/handlers/users.rs

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
    models::{
        permission::AssignPermissionsPayload,
        user::{CompanyTypeParams, CreateUserPayload, UpdateUserPayload, User},
    },
};

// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    description = "Get all users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.user_repo.list().await)
}

// POST /users
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    description = "Create a new user",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created successfully"),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserPayload>,
) -> impl IntoResponse {
    app_state.user_repo.create(payload).await;
    StatusCode::CREATED
}

// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    description = "Get a user by ID",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.user_repo.find_by_id(&id).await?;
    Ok(Json(user))
}

// PUT /users/{id}
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    description = "Update a user by ID",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "User updated successfully"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.user_repo.update(&id, payload).await?;
    Ok(StatusCode::OK)
}

// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    description = "Delete a user by ID",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.user_repo.delete(&id).await?;
    Ok(StatusCode::OK)
}

// GET /users/type/{userType}
#[utoipa::path(
    get,
    path = "/users/type/{userType}",
    tag = "Users",
    description = "Get users by type",
    params(("userType" = String, Path, description = "User type label")),
    responses(
        (status = 200, description = "List of users by type", body = Vec<User>)
    )
)]
pub async fn list_users_by_type(
    State(app_state): State<AppState>,
    Path(user_type): Path<String>,
) -> impl IntoResponse {
    Json(app_state.user_repo.find_by_user_type(&user_type).await)
}

// GET /users/company/{companyId}
#[utoipa::path(
    get,
    path = "/users/company/{companyId}",
    tag = "Users",
    description = "Get users by company",
    params(("companyId" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "List of users by company", body = Vec<User>)
    )
)]
pub async fn list_users_by_company(
    State(app_state): State<AppState>,
    Path(company_id): Path<String>,
) -> impl IntoResponse {
    Json(app_state.user_repo.find_by_company(&company_id).await)
}

// GET /users/company/{companyId}/type/{userType}
#[utoipa::path(
    get,
    path = "/users/company/{companyId}/type/{userType}",
    tag = "Users",
    description = "Get users by type within a company",
    params(CompanyTypeParams),
    responses(
        (status = 200, description = "List of users by type within a company", body = Vec<User>)
    )
)]
pub async fn list_users_by_company_and_type(
    State(app_state): State<AppState>,
    Path(params): Path<CompanyTypeParams>,
) -> impl IntoResponse {
    Json(
        app_state
            .user_repo
            .find_by_company_and_type(&params.company_id, &params.user_type)
            .await,
    )
}

// PUT /users/{id}/permissions
#[utoipa::path(
    put,
    path = "/users/{id}/permissions",
    tag = "Users",
    description = "Assign permissions to a user",
    params(("id" = String, Path, description = "User ID")),
    request_body = AssignPermissionsPayload,
    responses(
        (status = 200, description = "Permissions assigned successfully"),
        (status = 404, description = "User not found")
    )
)]
pub async fn assign_user_permissions(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AssignPermissionsPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .user_repo
        .assign_permissions(&id, payload.permissions)
        .await?;
    Ok(StatusCode::OK)
}
