//! # MySQL user repository
//!
//! Loads users from the `users` table through the [`Db`] port:
//!
//! ```sql
//! CREATE TABLE users (
//!     id       BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
//!     username VARCHAR(64)  NOT NULL UNIQUE,
//!     password VARCHAR(255) NOT NULL,
//!     role     VARCHAR(255) NULL,
//!     enabled  TINYINT(1)   NOT NULL DEFAULT 1,
//!     locked   TINYINT(1)   NOT NULL DEFAULT 0
//! );
//! ```

use anyhow::{Context, Result};
use tracing::debug;

use crate::db::port::{Db, Row};
use crate::params;
use crate::user::{User, UserRepository};

const FIND_BY_USERNAME: &str = "SELECT id, username, password, role, enabled, locked \
     FROM users WHERE username = ? LIMIT 1";

/// [`UserRepository`] over any [`Db`] implementation (normally
/// [`MySqlDb`](crate::db::mysql_adapter::MySqlDb)).
#[derive(Clone)]
pub struct MySqlUserRepository<D: Db> {
    db: D,
}

impl<D: Db> MySqlUserRepository<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    fn user_from_row(row: &Row) -> Result<User> {
        Ok(User {
            id: row.get_u64("id")?,
            username: row.get_string("username")?,
            password: row.get_string("password")?,
            role: row.get_string_opt("role")?.unwrap_or_default(),
            enabled: row.get_bool("enabled")?,
            locked: row.get_bool("locked")?,
        })
    }
}

impl<D: Db> UserRepository for MySqlUserRepository<D> {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        debug!(username, "loading user");

        let row = self
            .db
            .fetch_one(FIND_BY_USERNAME, &params![username])
            .context("users lookup failed")?;

        row.as_ref()
            .map(Self::user_from_row)
            .transpose()
            .context("malformed users row")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::db::port::{Param, Value};

    /// Records the last query and returns a canned row.
    #[derive(Default)]
    struct FakeDb {
        row: Option<Row>,
        fail: bool,
        seen: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl Db for FakeDb {
        fn fetch_one(&self, sql: &str, params: &[Param]) -> Result<Option<Row>> {
            let ps = params
                .iter()
                .map(|Param::Str(s)| s.to_string())
                .collect();
            self.seen.lock().unwrap().push((sql.to_string(), ps));

            if self.fail {
                anyhow::bail!("connection reset");
            }
            Ok(self.row.clone())
        }
    }

    fn alice_row() -> Row {
        let mut r = Row::default();
        r.insert("id", Value::U64(1));
        r.insert("username", Value::Str("alice".into()));
        r.insert("password", Value::Str("$argon2id$hash".into()));
        r.insert("role", Value::Str("ROLE_USER".into()));
        r.insert("enabled", Value::I64(1));
        r.insert("locked", Value::I64(0));
        r
    }

    #[test]
    fn maps_row_to_user() {
        let repo = MySqlUserRepository::new(FakeDb {
            row: Some(alice_row()),
            ..Default::default()
        });

        let user = repo.find_by_username("alice").unwrap().unwrap();

        assert_eq!(
            user,
            User {
                id: 1,
                username: "alice".into(),
                password: "$argon2id$hash".into(),
                role: "ROLE_USER".into(),
                enabled: true,
                locked: false,
            }
        );
    }

    #[test]
    fn binds_username_as_single_parameter() {
        let repo = MySqlUserRepository::new(FakeDb::default());

        repo.find_by_username("bob").unwrap();

        let seen = repo.db.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].0.contains("WHERE username = ?"));
        assert_eq!(seen[0].1, vec!["bob".to_string()]);
    }

    #[test]
    fn missing_row_is_none() {
        let repo = MySqlUserRepository::new(FakeDb::default());

        assert!(repo.find_by_username("bob").unwrap().is_none());
    }

    #[test]
    fn null_role_becomes_empty() {
        let mut row = alice_row();
        row.insert("role", Value::Null);
        let repo = MySqlUserRepository::new(FakeDb {
            row: Some(row),
            ..Default::default()
        });

        let user = repo.find_by_username("alice").unwrap().unwrap();
        assert_eq!(user.role, "");
    }

    #[test]
    fn malformed_row_is_an_error() {
        let mut row = alice_row();
        row.insert("enabled", Value::Str("maybe".into()));
        let repo = MySqlUserRepository::new(FakeDb {
            row: Some(row),
            ..Default::default()
        });

        let err = repo.find_by_username("alice").unwrap_err();
        assert!(format!("{err:#}").contains("enabled"));
    }

    #[test]
    fn storage_failure_propagates() {
        let repo = MySqlUserRepository::new(FakeDb {
            fail: true,
            ..Default::default()
        });

        let err = repo.find_by_username("alice").unwrap_err();
        assert!(format!("{err:#}").contains("connection reset"));
    }
}
