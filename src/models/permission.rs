// src/models/permission.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::patch::reject_null;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440001")]
    pub id: String,

    #[schema(example = "read")]
    pub name: String,

    #[schema(example = "Read permission")]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePermissionPayload {
    #[schema(example = "export")]
    pub name: String,

    #[schema(example = "Export permission")]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePermissionPayload {
    #[serde(default, deserialize_with = "reject_null")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "reject_null")]
    pub description: Option<String>,
}

// Usado por PUT /users/{id}/permissions e PUT /userTypes/{id}/permissions.
// Substitui a lista inteira, não faz merge.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignPermissionsPayload {
    #[schema(example = json!(["write"]))]
    pub permissions: Vec<String>,
}
