// src/db/permission_repo.rs

use uuid::Uuid;

use crate::{
    common::{error::AppError, patch::overwrite_if_filled},
    db::store::{MemoryStore, Record},
    models::permission::{CreatePermissionPayload, Permission, UpdatePermissionPayload},
};

// Permissões que já existem quando o processo sobe, nessa ordem
const SEED_PERMISSIONS: [(&str, &str); 3] = [
    ("read", "Read permission"),
    ("write", "Write permission"),
    ("delete", "Delete permission"),
];

impl Record for Permission {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Default)]
pub struct PermissionRepository {
    store: MemoryStore<Permission>,
}

impl PermissionRepository {
    pub fn new(store: MemoryStore<Permission>) -> Self {
        Self { store }
    }

    /// Repositório já com read/write/delete cadastrados.
    pub fn seeded() -> Self {
        let records = SEED_PERMISSIONS
            .iter()
            .map(|(name, description)| Permission {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect();

        Self::new(MemoryStore::with_records(records))
    }

    pub async fn list(&self) -> Vec<Permission> {
        self.store.all().await
    }

    pub async fn create(&self, payload: CreatePermissionPayload) -> Permission {
        let permission = Permission {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            description: payload.description,
        };

        self.store.append(permission.clone()).await;
        tracing::info!("Permissão criada: {} ({})", permission.name, permission.id);
        permission
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Permission, AppError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or(AppError::NotFound("Permission"))
    }

    pub async fn update(&self, id: &str, payload: UpdatePermissionPayload) -> Result<(), AppError> {
        let found = self
            .store
            .update_by_id(id, |permission| {
                overwrite_if_filled(&mut permission.name, payload.name);
                overwrite_if_filled(&mut permission.description, payload.description);
            })
            .await;

        found.then_some(()).ok_or(AppError::NotFound("Permission"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self
            .store
            .remove_by_id(id)
            .await
            .ok_or(AppError::NotFound("Permission"))?;

        tracing::info!("Permissão removida: {}", removed.id);
        Ok(())
    }
}
