// src/handlers/user_types.rs

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
        user_type::{CreateUserTypePayload, UpdateUserTypePayload, UserType},
    },
};

// GET /userTypes
#[utoipa::path(
    get,
    path = "/userTypes",
    tag = "User Types",
    description = "Get all user types",
    responses(
        (status = 200, description = "List of user types", body = Vec<UserType>)
    )
)]
pub async fn list_user_types(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.user_type_repo.list().await)
}

// POST /userTypes
#[utoipa::path(
    post,
    path = "/userTypes",
    tag = "User Types",
    description = "Create a new user type",
    request_body = CreateUserTypePayload,
    responses(
        (status = 201, description = "User type created successfully")
    )
)]
pub async fn create_user_type(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserTypePayload>,
) -> impl IntoResponse {
    app_state.user_type_repo.create(payload).await;
    StatusCode::CREATED
}

// GET /userTypes/{id}
#[utoipa::path(
    get,
    path = "/userTypes/{id}",
    tag = "User Types",
    description = "Get a user type by ID",
    params(("id" = String, Path, description = "User type ID")),
    responses(
        (status = 200, description = "User type details", body = UserType),
        (status = 404, description = "User type not found")
    )
)]
pub async fn get_user_type(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_type = app_state.user_type_repo.find_by_id(&id).await?;
    Ok(Json(user_type))
}

// PUT /userTypes/{id}
#[utoipa::path(
    put,
    path = "/userTypes/{id}",
    tag = "User Types",
    description = "Update a user type by ID",
    params(("id" = String, Path, description = "User type ID")),
    request_body = UpdateUserTypePayload,
    responses(
        (status = 200, description = "User type updated successfully"),
        (status = 404, description = "User type not found")
    )
)]
pub async fn update_user_type(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.user_type_repo.update(&id, payload).await?;
    Ok(StatusCode::OK)
}

// DELETE /userTypes/{id}
#[utoipa::path(
    delete,
    path = "/userTypes/{id}",
    tag = "User Types",
    description = "Delete a user type by ID",
    params(("id" = String, Path, description = "User type ID")),
    responses(
        (status = 200, description = "User type deleted successfully"),
        (status = 404, description = "User type not found")
    )
)]
pub async fn delete_user_type(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.user_type_repo.delete(&id).await?;
    Ok(StatusCode::OK)
}

// PUT /userTypes/{id}/permissions
#[utoipa::path(
    put,
    path = "/userTypes/{id}/permissions",
    tag = "User Types",
    description = "Assign permissions to a user type",
    params(("id" = String, Path, description = "User type ID")),
    request_body = AssignPermissionsPayload,
    responses(
        (status = 200, description = "Permissions assigned successfully"),
        (status = 404, description = "User type not found")
    )
)]
pub async fn assign_user_type_permissions(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AssignPermissionsPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .user_type_repo
        .assign_permissions(&id, payload.permissions)
        .await?;
    Ok(StatusCode::OK)
}
