//! # Application Configuration Loader
//!
//! Loads every runtime setting the server needs from the environment.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `DATABASE_URL` | MySQL connection URL | *required by the server* |
//! | `DATABASE_MAX_CONN` | Maximum pool size | driver default |
//! | `HTTP_BIND_ADDR` | Listen address | `"0.0.0.0:8080"` |
//! | `HTTP_MAX_BODY_BYTES` | Maximum request body size (bytes) | derived from `HTTP_MAX_BODY_MB` |
//! | `HTTP_MAX_BODY_MB` | Max body size in megabytes (if bytes not set) | `1` |
//!
//! # Example
//! ```rust,no_run
//! use login_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("listening on {}", cfg.http.bind_addr);
//! ```

use std::env;

use crate::config::{
    db::DbConfig,
    env::{read_string, read_u32},
    web::{DEFAULT_BIND_ADDR, DEFAULT_MAX_BODY_MB, HttpConfig},
};

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Value of `APP_ENV`.
    pub app_env: String,
    pub db: DbConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{app_env}");
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let max_body_bytes = env::var("HTTP_MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or_else(|| {
                megabytes_to_bytes(read_u32("HTTP_MAX_BODY_MB", DEFAULT_MAX_BODY_MB))
            });

        AppConfig {
            app_env,
            db: DbConfig::from_env(),
            http: HttpConfig {
                bind_addr: read_string("HTTP_BIND_ADDR", DEFAULT_BIND_ADDR),
                max_body_bytes,
            },
        }
    }
}

/// Saturates instead of overflowing on 32-bit targets.
fn megabytes_to_bytes(mb: u32) -> usize {
    (mb as usize).saturating_mul(1024 * 1024)
}
