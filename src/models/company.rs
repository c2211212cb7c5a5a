// src/models/company.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::patch::reject_null;

// ---
// Company (A "Empresa")
// ---
// `users` e `userGroups` existem só no formato: nascem vazios e nenhuma rota mexe neles.
// Não há sincronização com o store de usuários.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[schema(example = "c0a8012e-7d3f-4b1e-9a1c-2f5e6d7c8b9a")]
    pub id: String,

    #[schema(example = "Minha Empresa Ltda")]
    pub name: String,

    #[schema(example = "12.345.678/0001-99")]
    pub cnpj: String,

    pub users: Vec<CompanyUser>,

    pub user_groups: Vec<UserGroup>,
}

// Cópia embutida de um usuário (sem permissões)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    pub user_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    pub id: String,
    pub name: String,
    pub users: Vec<CompanyUser>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyPayload {
    #[schema(example = "Minha Empresa Ltda")]
    pub name: String,

    #[schema(example = "12.345.678/0001-99")]
    pub cnpj: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyPayload {
    #[serde(default, deserialize_with = "reject_null")]
    #[schema(example = "Minha Nova Empresa")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "reject_null")]
    pub cnpj: Option<String>,
}
