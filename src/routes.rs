// src/routes.rs

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

// Monta o router completo. Cada (método, caminho) é registrado uma vez só:
// se duas rotas colidirem o axum entra em pânico aqui, na montagem.
pub fn create_router(app_state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/"
               ,get(handlers::users::list_users)
               .post(handlers::users::create_user)
        )
        .route("/{id}"
               ,get(handlers::users::get_user)
               .put(handlers::users::update_user)
               .delete(handlers::users::delete_user)
        )
        .route("/{id}/permissions"
               ,put(handlers::users::assign_user_permissions)
        )
        .route("/type/{userType}"
               ,get(handlers::users::list_users_by_type)
        )
        .route("/company/{companyId}"
               ,get(handlers::users::list_users_by_company)
        )
        .route("/company/{companyId}/type/{userType}"
               ,get(handlers::users::list_users_by_company_and_type)
        );

    let user_type_routes = Router::new()
        .route("/"
               ,get(handlers::user_types::list_user_types)
               .post(handlers::user_types::create_user_type)
        )
        .route("/{id}"
               ,get(handlers::user_types::get_user_type)
               .put(handlers::user_types::update_user_type)
               .delete(handlers::user_types::delete_user_type)
        )
        .route("/{id}/permissions"
               ,put(handlers::user_types::assign_user_type_permissions)
        );

    let company_routes = Router::new()
        .route("/"
               ,get(handlers::companies::list_companies)
               .post(handlers::companies::create_company)
        )
        .route("/{id}"
               ,get(handlers::companies::get_company)
               .put(handlers::companies::update_company)
               .delete(handlers::companies::delete_company)
        );

    let permission_routes = Router::new()
        .route("/"
               ,get(handlers::permissions::list_permissions)
               .post(handlers::permissions::create_permission)
        )
        .route("/{id}"
               ,get(handlers::permissions::get_permission)
               .put(handlers::permissions::update_permission)
               .delete(handlers::permissions::delete_permission)
        );

    // Combina tudo no router principal
    Router::new()
        .route("/", get(|| async { "Hello World" }))
        .nest("/users", user_routes)
        .nest("/userTypes", user_type_routes)
        .nest("/companies", company_routes)
        .nest("/permissions", permission_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
