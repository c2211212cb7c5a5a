// src/db/user_type_repo.rs

use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        patch::{overwrite_if_filled, replace_if_present},
    },
    db::store::{MemoryStore, Record},
    models::user_type::{CreateUserTypePayload, UpdateUserTypePayload, UserType},
};

impl Record for UserType {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Default)]
pub struct UserTypeRepository {
    store: MemoryStore<UserType>,
}

impl UserTypeRepository {
    pub fn new(store: MemoryStore<UserType>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<UserType> {
        self.store.all().await
    }

    pub async fn create(&self, payload: CreateUserTypePayload) -> UserType {
        let user_type = UserType {
            id: Uuid::new_v4().to_string(),
            kind: payload.kind,
            permissions: payload.permissions.unwrap_or_default(),
        };

        self.store.append(user_type.clone()).await;
        tracing::info!("Tipo de usuário criado: {} ({})", user_type.kind, user_type.id);
        user_type
    }

    pub async fn find_by_id(&self, id: &str) -> Result<UserType, AppError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or(AppError::NotFound("UserType"))
    }

    pub async fn update(&self, id: &str, payload: UpdateUserTypePayload) -> Result<(), AppError> {
        let found = self
            .store
            .update_by_id(id, |user_type| {
                overwrite_if_filled(&mut user_type.kind, payload.kind);
                replace_if_present(&mut user_type.permissions, payload.permissions);
            })
            .await;

        found.then_some(()).ok_or(AppError::NotFound("UserType"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self
            .store
            .remove_by_id(id)
            .await
            .ok_or(AppError::NotFound("UserType"))?;

        tracing::info!("Tipo de usuário removido: {}", removed.id);
        Ok(())
    }

    pub async fn assign_permissions(&self, id: &str, permissions: Vec<String>) -> Result<(), AppError> {
        let found = self
            .store
            .update_by_id(id, |user_type| user_type.permissions = permissions)
            .await;

        found.then_some(()).ok_or(AppError::NotFound("UserType"))
    }
}
