// src/handlers/permissions.rs

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
    models::permission::{CreatePermissionPayload, Permission, UpdatePermissionPayload},
};

// GET /permissions
#[utoipa::path(
    get,
    path = "/permissions",
    tag = "Permissions",
    description = "Get all permissions",
    responses(
        (status = 200, description = "List of permissions", body = Vec<Permission>)
    )
)]
pub async fn list_permissions(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.permission_repo.list().await)
}

// POST /permissions
#[utoipa::path(
    post,
    path = "/permissions",
    tag = "Permissions",
    description = "Create a new permission",
    request_body = CreatePermissionPayload,
    responses(
        (status = 201, description = "Permission created successfully")
    )
)]
pub async fn create_permission(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePermissionPayload>,
) -> impl IntoResponse {
    app_state.permission_repo.create(payload).await;
    StatusCode::CREATED
}

// GET /permissions/{id}
#[utoipa::path(
    get,
    path = "/permissions/{id}",
    tag = "Permissions",
    description = "Get a permission by ID",
    params(("id" = String, Path, description = "Permission ID")),
    responses(
        (status = 200, description = "Permission details", body = Permission),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn get_permission(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let permission = app_state.permission_repo.find_by_id(&id).await?;
    Ok(Json(permission))
}

// PUT /permissions/{id}
#[utoipa::path(
    put,
    path = "/permissions/{id}",
    tag = "Permissions",
    description = "Update a permission by ID",
    params(("id" = String, Path, description = "Permission ID")),
    request_body = UpdatePermissionPayload,
    responses(
        (status = 200, description = "Permission updated successfully"),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn update_permission(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePermissionPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.permission_repo.update(&id, payload).await?;
    Ok(StatusCode::OK)
}

// DELETE /permissions/{id}
#[utoipa::path(
    delete,
    path = "/permissions/{id}",
    tag = "Permissions",
    description = "Delete a permission by ID",
    params(("id" = String, Path, description = "Permission ID")),
    responses(
        (status = 200, description = "Permission deleted successfully"),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn delete_permission(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.permission_repo.delete(&id).await?;
    Ok(StatusCode::OK)
}
