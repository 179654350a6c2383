//! # Database Configuration and Pool Factory
//!
//! Provides database connection configuration (`DbConfig`) and a helper
//! to create a reusable MySQL connection pool (`DbPool`).
//!
//! The connection URL and maximum pool size are loaded from
//! environment variables (`DATABASE_URL`, `DATABASE_MAX_CONN`).
//!
//! # Examples
//! ```rust,no_run
//! use login_web::config::db::{DbConfig, create_pool};
//!
//! let cfg = DbConfig::from_env();
//! if cfg.is_valid() {
//!     let pool = create_pool(&cfg).expect("failed to create pool");
//! }
//! ```

use std::{env, sync::Arc};

use anyhow::Context;
use mysql::{Opts, OptsBuilder, Pool, PoolConstraints, PoolOpts};

/// Smallest number of idle connections kept by the pool.
const MIN_CONNECTIONS: usize = 1;

/// Database connection configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the URL usually embeds the database password
        f.debug_struct("DbConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DbConfig {
    /// Builds a [`DbConfig`] from environment variables.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").ok().filter(|s| !s.trim().is_empty());
        let max_connections = env::var("DATABASE_MAX_CONN")
            .ok()
            .and_then(|s| s.trim().parse::<u32>().ok());
        Self {
            url,
            max_connections,
        }
    }

    /// Returns `true` if `DATABASE_URL` is present.
    pub fn is_valid(&self) -> bool {
        self.url.is_some()
    }

    fn pool_opts(&self) -> Option<PoolOpts> {
        let max = self.max_connections? as usize;
        let constraints = PoolConstraints::new(MIN_CONNECTIONS.min(max), max)?;
        Some(PoolOpts::default().with_constraints(constraints))
    }
}

/// Shared database pool type alias (`Arc<mysql::Pool>`).
pub type DbPool = Arc<Pool>;

/// Creates a new [`DbPool`] using the given configuration.
///
/// # Errors
/// Returns an error if:
/// - `DATABASE_URL` is missing
/// - the URL is invalid
/// - the pool cannot be created
pub fn create_pool(cfg: &DbConfig) -> anyhow::Result<DbPool> {
    let url = cfg
        .url
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;
    let opts = Opts::from_url(url).context("invalid DATABASE_URL")?;

    let mut builder = OptsBuilder::from_opts(opts);
    if let Some(pool_opts) = cfg.pool_opts() {
        builder = builder.pool_opts(pool_opts);
    }

    let pool = Pool::new(builder).context("failed to create MySQL pool")?;
    Ok(Arc::new(pool))
}
