// src/models/user.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::patch::reject_null;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,

    #[schema(example = "Ana")]
    pub name: String,

    #[schema(example = "ana@empresa.com")]
    pub email: String,

    // Referência livre: ninguém confere se a empresa existe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "c0a8012e-7d3f-4b1e-9a1c-2f5e6d7c8b9a")]
    pub company_id: Option<String>,

    // Rótulo do tipo de usuário (não é o ID do UserType)
    #[schema(example = "admin")]
    pub user_type: String,

    #[schema(example = json!(["read", "write"]))]
    pub permissions: Vec<String>,
}

// Payload de criação
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[schema(example = "Ana")]
    pub name: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "ana@empresa.com")]
    pub email: String,

    #[serde(default, deserialize_with = "reject_null")]
    pub company_id: Option<String>,

    #[schema(example = "admin")]
    pub user_type: String,

    #[serde(default, deserialize_with = "reject_null")]
    #[schema(example = json!(["read"]))]
    pub permissions: Option<Vec<String>>,
}

// Atualização parcial: só o que vier preenchido é aplicado
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[serde(default, deserialize_with = "reject_null")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "reject_null")]
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "reject_null")]
    pub company_id: Option<String>,

    #[serde(default, deserialize_with = "reject_null")]
    pub user_type: Option<String>,

    #[serde(default, deserialize_with = "reject_null")]
    pub permissions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Path)]
pub struct CompanyTypeParams {
    /// Company ID
    pub company_id: String,
    /// User type label
    pub user_type: String,
}
