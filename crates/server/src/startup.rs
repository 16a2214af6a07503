use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::auth::{AdminRepository, AdminSessionService, SeaOrmAdminRepository, SessionConfig};
use service::storage::BlobStore;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect the database, run migrations when enabled, seed the bootstrap
/// admin and open the blob store.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        models::db::migrate(&db).await?;
        info!("database migrations applied");
    }

    let repo: Arc<dyn AdminRepository> = Arc::new(SeaOrmAdminRepository::new(db.clone()));
    let auth = Arc::new(AdminSessionService::new(repo, SessionConfig::from_hours(cfg.auth.session_ttl_hours)));

    match (&cfg.auth.bootstrap_username, &cfg.auth.bootstrap_password) {
        (Some(user), Some(pass)) => {
            if auth.ensure_bootstrap_admin(user, pass).await? {
                info!(username = %user, "bootstrap admin created");
            }
        }
        _ => warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set; no bootstrap admin"),
    }

    if cfg.storage.backend == StorageBackend::Local {
        common::env::ensure_upload_dir(&cfg.storage.local_root).await?;
    }
    let blobs = BlobStore::from_config(&cfg.storage)
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    Ok(ServerState { db, auth, blobs, secure_cookie: cfg.auth.secure_cookie })
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: load config, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let addr = bind_addr(&cfg)?;
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    info!(%addr, backend = ?cfg.storage.backend, "starting tour site server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
