// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

// Documento OpenAPI gerado só a partir das anotações dos handlers e dos schemas.
// Não valida nada, é reflexo estático das rotas.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Typed API",
        description = "API documentation for the users, companies and permissions API"
    ),
    paths(
        // --- Users ---
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::users::list_users_by_type,
        handlers::users::list_users_by_company,
        handlers::users::list_users_by_company_and_type,
        handlers::users::assign_user_permissions,

        // --- User Types ---
        handlers::user_types::list_user_types,
        handlers::user_types::create_user_type,
        handlers::user_types::get_user_type,
        handlers::user_types::update_user_type,
        handlers::user_types::delete_user_type,
        handlers::user_types::assign_user_type_permissions,

        // --- Companies ---
        handlers::companies::list_companies,
        handlers::companies::create_company,
        handlers::companies::get_company,
        handlers::companies::update_company,
        handlers::companies::delete_company,

        // --- Permissions ---
        handlers::permissions::list_permissions,
        handlers::permissions::create_permission,
        handlers::permissions::get_permission,
        handlers::permissions::update_permission,
        handlers::permissions::delete_permission,
    ),
    components(
        schemas(
            // --- Users ---
            models::user::User,
            models::user::CreateUserPayload,
            models::user::UpdateUserPayload,

            // --- User Types ---
            models::user_type::UserType,
            models::user_type::CreateUserTypePayload,
            models::user_type::UpdateUserTypePayload,

            // --- Companies ---
            models::company::Company,
            models::company::CompanyUser,
            models::company::UserGroup,
            models::company::CreateCompanyPayload,
            models::company::UpdateCompanyPayload,

            // --- Permissions ---
            models::permission::Permission,
            models::permission::CreatePermissionPayload,
            models::permission::UpdatePermissionPayload,
            models::permission::AssignPermissionsPayload,
        )
    ),
    tags(
        (name = "Users", description = "Users, their filters and permissions"),
        (name = "User Types", description = "User types and their permission sets"),
        (name = "Companies", description = "Companies"),
        (name = "Permissions", description = "Permission catalog")
    )
)]
pub struct ApiDoc;
