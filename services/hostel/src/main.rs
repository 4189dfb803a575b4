use std::sync::Arc;

use anyhow::Context;
use deadpool_redis::Runtime;
use sea_orm::Database;
use tracing::info;

use hostel_core::config::Config;
use hostel_core::tracing::init_tracing;

use hostel::config::HostelConfig;
use hostel::domain::password::PasswordHasher;
use hostel::domain::types::AdminCredential;
use hostel::infra::db::ensure_schema;
use hostel::router::build_router;
use hostel::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = HostelConfig::from_env().context("failed to load configuration")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    ensure_schema(&db, config.run_migrations).await?;

    let hasher = PasswordHasher::new();
    let admin = AdminCredential {
        login_id: config.admin_login_id.clone(),
        name: config.admin_name.clone(),
        password_hash: hasher
            .hash(&config.admin_password)
            .context("failed to hash admin password")?,
    };

    let redis = deadpool_redis::Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("failed to create Redis pool")?;

    let addr = format!("0.0.0.0:{}", config.hostel_port);
    let state = AppState {
        db: db.clone(),
        redis,
        config: Arc::new(config),
        admin: Arc::new(admin),
        hasher,
    };

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("hostel service listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await.context("failed to close database pool")?;
    info!("hostel service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
