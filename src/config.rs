// src/config.rs

use anyhow::Context;
use std::env;

use crate::db::{CompanyRepository, MemoryStore, PermissionRepository, UserRepository, UserTypeRepository};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3333;

// Configuração lida do ambiente (ou do .env, se existir)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT inválida: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// O estado compartilhado: um repositório (e portanto um store) por recurso.
// Clonar o estado só clona os handles, os dados continuam os mesmos.
#[derive(Clone)]
pub struct AppState {
    pub user_repo: UserRepository,
    pub user_type_repo: UserTypeRepository,
    pub company_repo: CompanyRepository,
    pub permission_repo: PermissionRepository,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user_repo: UserRepository::new(MemoryStore::new()),
            user_type_repo: UserTypeRepository::new(MemoryStore::new()),
            company_repo: CompanyRepository::new(MemoryStore::new()),
            permission_repo: PermissionRepository::seeded(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
