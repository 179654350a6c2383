//! # Database Port (Synchronous)
//!
//! Defines an abstract database interface (`Db`) and supporting types
//! used by adapters such as the MySQL implementation.
//!
//! - [`Param`]: Represents SQL parameters.
//! - [`Value`] / [`Row`]: Generic owned data representations.
//! - [`Db`]: Read-only lookup used by repositories (`fetch_one`).
//!
//! # Example
//! ```rust,ignore
//! use login_web::db::port::{Db, Param, params};
//!
//! let ps = params!["alice"];
//! let row = db.fetch_one("SELECT id FROM users WHERE username = ?", &ps)?;
//! ```
use std::collections::HashMap;

use anyhow::{Result, bail};

/// SQL parameter types passed to a query.
///
/// Only borrowed strings are bound today; add variants as queries need them.
#[derive(Debug, Clone, PartialEq)]
pub enum Param<'a> {
    Str(&'a str),
}

/// Generic owned database value used for row mapping.
///
/// Unsigned columns arrive as `U64`, signed and `TINYINT(1)` columns as `I64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I64(i64),
    U64(u64),
    Str(String),
    Null,
}

/// Represents a single database row (column name → value map).
#[derive(Debug, Clone, Default)]
pub struct Row {
    cols: HashMap<String, Value>,
}

impl<'a> From<&'a str> for Param<'a> {
    fn from(x: &'a str) -> Self {
        Param::Str(x)
    }
}

/// Macro to build a `Vec<Param>` for SQL queries.
///
/// # Example
/// ```rust
/// use login_web::db::port::Param;
/// use login_web::params;
///
/// let ps = params!["alice", "bob"];
/// assert_eq!(ps, vec![Param::Str("alice"), Param::Str("bob")]);
/// ```
#[macro_export]
macro_rules! params {
    ($($x:expr),* $(,)?) => {{
        let mut v = Vec::<$crate::db::port::Param>::new();
        $( v.push($crate::db::port::Param::from($x)); )*
        v
    }};
}

impl Row {
    /// Inserts a new column (used internally by DB adapters).
    pub fn insert(&mut self, key: impl Into<String>, val: Value) {
        self.cols.insert(key.into(), val);
    }

    /// Returns a `u64` (accepts non-negative `i64`).
    pub fn get_u64(&self, key: &str) -> Result<u64> {
        match self.cols.get(key) {
            Some(Value::U64(v)) => Ok(*v),
            Some(Value::I64(v)) if *v >= 0 => Ok(*v as u64),
            _ => bail!("column `{key}` is not U64"),
        }
    }

    /// Returns a `bool`.
    ///
    /// Accepts:
    /// - Numeric values (`I64`, `U64`) where non-zero = `true`
    /// - Strings `"0"` or `"1"`
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.cols.get(key) {
            Some(Value::I64(v)) => Ok(*v != 0),
            Some(Value::U64(v)) => Ok(*v != 0),
            Some(Value::Str(s)) if s == "0" || s == "1" => Ok(s != "0"),
            _ => bail!("column `{key}` is not Bool"),
        }
    }

    /// Returns a `String` (only for `Value::Str`).
    pub fn get_string(&self, key: &str) -> Result<String> {
        match self.cols.get(key) {
            Some(Value::Str(s)) => Ok(s.clone()),
            _ => bail!("column `{key}` is not String"),
        }
    }

    /// Returns an optional `String` (`NULL` → `None`).
    pub fn get_string_opt(&self, key: &str) -> Result<Option<String>> {
        match self.cols.get(key) {
            Some(Value::Str(s)) => Ok(Some(s.clone())),
            Some(Value::Null) => Ok(None),
            Some(_) => bail!("column `{key}` is not String/NULL"),
            None => bail!("column `{key}` not found"),
        }
    }
}

/// Database abstraction (synchronous).
///
/// Callers on the async runtime should wrap calls in
/// `tokio::task::spawn_blocking`.
pub trait Db: Send + Sync + 'static {
    /// Runs a query expected to return at most one row.
    fn fetch_one(&self, sql: &str, params: &[Param]) -> Result<Option<Row>>;
}
