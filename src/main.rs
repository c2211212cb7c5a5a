//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use typed_api::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Os stores nascem vazios (permissões já vêm com read/write/delete)
    let app = create_router(AppState::new());

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
