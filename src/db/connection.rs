//! # User store wiring
//!
//! Builds the production [`UserRepository`](crate::user::UserRepository)
//! from configuration: pool → [`MySqlDb`] → [`MySqlUserRepository`].

use anyhow::{Context, Result};
use tracing::info;

use crate::config::db::{DbConfig, create_pool};
use crate::db::mysql_adapter::MySqlDb;
use crate::user::MySqlUserRepository;

/// Connects to MySQL and returns a repository over the `users` table.
///
/// # Errors
/// Fails when `DATABASE_URL` is missing or the pool cannot be created.
pub fn connect_user_repository(cfg: &DbConfig) -> Result<MySqlUserRepository<MySqlDb>> {
    let pool = create_pool(cfg).context("failed to initialize MySQL connection pool")?;
    info!(max_connections = ?cfg.max_connections, "MySQL pool ready");
    Ok(MySqlUserRepository::new(MySqlDb::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fails_without_database_url() {
        let cfg = DbConfig {
            url: None,
            max_connections: None,
        };

        let err = connect_user_repository(&cfg).err().unwrap();
        assert!(format!("{err:#}").contains("DATABASE_URL"));
    }
}
