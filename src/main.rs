use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use login_web::auth::UserDetailsService;
use login_web::config::app::AppConfig;
use login_web::db::connection::connect_user_repository;
use login_web::web::router::build_router;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(app_env = %cfg.app_env, "starting login-web");

    // the pool connects eagerly; keep it off the async workers
    let db_cfg = cfg.db.clone();
    let repo = tokio::task::spawn_blocking(move || connect_user_repository(&db_cfg))
        .await
        .context("database setup task panicked")??;

    let app = build_router(UserDetailsService::from_repository(repo), &cfg.http);

    let listener = TcpListener::bind(&cfg.http.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.http.bind_addr))?;
    info!(addr = %cfg.http.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
