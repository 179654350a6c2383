//! # login_web
//!
//! Username/password authentication for an Axum application, backed by a
//! MySQL `users` table.
//!
//! - `GET /public/home` is open to everyone
//! - every other path requires HTTP Basic credentials
//!
//! The central piece is [`auth::find_principal`], which turns a stored
//! [`user::User`] into an [`auth::Principal`] or fails with
//! [`error::PrincipalNotFound`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use login_web::auth::UserDetailsService;
//! use login_web::config::app::AppConfig;
//! use login_web::config::db::create_pool;
//! use login_web::db::mysql_adapter::MySqlDb;
//! use login_web::user::MySqlUserRepository;
//! use login_web::web::router::build_router;
//!
//! # fn main() -> login_web::anyhow::Result<()> {
//! let cfg = AppConfig::from_env();
//! let pool = create_pool(&cfg.db)?;
//! let repo = MySqlUserRepository::new(MySqlDb::new(pool));
//! let app = build_router(UserDetailsService::from_repository(repo), &cfg.http);
//! # Ok(())
//! # }
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use mysql;
pub use tokio;
pub use tracing;

// ===============================
// Public modules
// ===============================
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod user;
pub mod web;
