// src/db/company_repo.rs

use uuid::Uuid;

use crate::{
    common::{error::AppError, patch::overwrite_if_filled},
    db::store::{MemoryStore, Record},
    models::company::{Company, CreateCompanyPayload, UpdateCompanyPayload},
};

impl Record for Company {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Default)]
pub struct CompanyRepository {
    store: MemoryStore<Company>,
}

impl CompanyRepository {
    pub fn new(store: MemoryStore<Company>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Company> {
        self.store.all().await
    }

    // users e userGroups sempre nascem vazios
    pub async fn create(&self, payload: CreateCompanyPayload) -> Company {
        let company = Company {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            cnpj: payload.cnpj,
            users: Vec::new(),
            user_groups: Vec::new(),
        };

        self.store.append(company.clone()).await;
        tracing::info!("Empresa criada: {} ({})", company.name, company.id);
        company
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Company, AppError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or(AppError::NotFound("Company"))
    }

    pub async fn update(&self, id: &str, payload: UpdateCompanyPayload) -> Result<(), AppError> {
        let found = self
            .store
            .update_by_id(id, |company| {
                overwrite_if_filled(&mut company.name, payload.name);
                overwrite_if_filled(&mut company.cnpj, payload.cnpj);
            })
            .await;

        found.then_some(()).ok_or(AppError::NotFound("Company"))
    }

    // Não apaga os usuários que apontam para ela
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self
            .store
            .remove_by_id(id)
            .await
            .ok_or(AppError::NotFound("Company"))?;

        tracing::info!("Empresa removida: {}", removed.id);
        Ok(())
    }
}
