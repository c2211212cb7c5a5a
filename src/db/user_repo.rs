// src/db/user_repo.rs

use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        patch::{overwrite_if_filled, replace_if_present},
    },
    db::store::{MemoryStore, Record},
    models::user::{CreateUserPayload, UpdateUserPayload, User},
};

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

// O repositório de usuários, dono do store em memória de 'users'
#[derive(Clone, Default)]
pub struct UserRepository {
    store: MemoryStore<User>,
}

impl UserRepository {
    pub fn new(store: MemoryStore<User>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<User> {
        self.store.all().await
    }

    // Cria um novo usuário com ID novo e permissões vazias por padrão
    pub async fn create(&self, payload: CreateUserPayload) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            email: payload.email,
            company_id: payload.company_id,
            user_type: payload.user_type,
            permissions: payload.permissions.unwrap_or_default(),
        };

        self.store.append(user.clone()).await;
        tracing::info!("Usuário criado: {}", user.id);
        user
    }

    pub async fn find_by_id(&self, id: &str) -> Result<User, AppError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or(AppError::NotFound("User"))
    }

    pub async fn update(&self, id: &str, payload: UpdateUserPayload) -> Result<(), AppError> {
        let found = self
            .store
            .update_by_id(id, |user| {
                overwrite_if_filled(&mut user.name, payload.name);
                overwrite_if_filled(&mut user.email, payload.email);
                // companyId é o único campo que aceita "" (basta vir no corpo)
                if payload.company_id.is_some() {
                    user.company_id = payload.company_id;
                }
                overwrite_if_filled(&mut user.user_type, payload.user_type);
                replace_if_present(&mut user.permissions, payload.permissions);
            })
            .await;

        found.then_some(()).ok_or(AppError::NotFound("User"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self
            .store
            .remove_by_id(id)
            .await
            .ok_or(AppError::NotFound("User"))?;

        tracing::info!("Usuário removido: {}", removed.id);
        Ok(())
    }

    pub async fn find_by_user_type(&self, user_type: &str) -> Vec<User> {
        self.store.filter(|u| u.user_type == user_type).await
    }

    pub async fn find_by_company(&self, company_id: &str) -> Vec<User> {
        self.store
            .filter(|u| u.company_id.as_deref() == Some(company_id))
            .await
    }

    pub async fn find_by_company_and_type(&self, company_id: &str, user_type: &str) -> Vec<User> {
        self.store
            .filter(|u| u.company_id.as_deref() == Some(company_id) && u.user_type == user_type)
            .await
    }

    // Troca a lista inteira (não faz merge)
    pub async fn assign_permissions(&self, id: &str, permissions: Vec<String>) -> Result<(), AppError> {
        let found = self
            .store
            .update_by_id(id, |user| user.permissions = permissions)
            .await;

        found.then_some(()).ok_or(AppError::NotFound("User"))
    }
}
