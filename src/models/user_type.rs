// src/models/user_type.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::patch::reject_null;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserType {
    #[schema(example = "7b1d2c3e-4f5a-4b6c-8d7e-9f0a1b2c3d4e")]
    pub id: String,

    // O rótulo que os usuários referenciam em `userType`
    #[serde(rename = "type")]
    #[schema(example = "admin")]
    pub kind: String,

    #[schema(example = json!(["read", "write", "delete"]))]
    pub permissions: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserTypePayload {
    #[serde(rename = "type")]
    #[schema(example = "admin")]
    pub kind: String,

    #[serde(default, deserialize_with = "reject_null")]
    #[schema(example = json!(["read", "write"]))]
    pub permissions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserTypePayload {
    #[serde(rename = "type", default, deserialize_with = "reject_null")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "reject_null")]
    pub permissions: Option<Vec<String>>,
}
