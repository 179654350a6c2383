//! # MySQL Database Adapter
//!
//! An implementation of the [`Db`] port using the [`mysql`] driver crate.
//!
//! ## Responsibilities
//! - Convert generic [`Param`] values into [`mysql::Value`]
//! - Convert [`mysql::Row`] into a generic [`Row`]
//! - Implement `fetch_one` using a pooled connection
//!
//! ## Testing Policy
//! Unit tests cover the pure conversion functions only. Query execution
//! needs a live MySQL instance and is not exercised here.

use std::sync::Arc;

use anyhow::{Context, Result};
use mysql::{Error as MyError, Params, Pool, Value as My, prelude::*};
use tracing::{debug, error};

use crate::db::port::{Db, Param, Row as GRow, Value};

fn mysql_err_summary(e: &MyError) -> String {
    match e {
        MyError::MySqlError(me) => format!(
            "code={}, state={}, message={}",
            me.code, me.state, me.message
        ),
        MyError::DriverError(de) => format!("driver={de:?}"),
        MyError::UrlError(ue) => format!("url={ue:?}"),
        MyError::IoError(ioe) => format!("io={ioe}"),
        other => other.to_string(),
    }
}

/// MySQL implementation of the [`Db`] port.
///
/// - Wraps a connection pool (`mysql::Pool`) for query execution.
/// - Propagates errors as [`anyhow::Error`].
#[derive(Clone)]
pub struct MySqlDb {
    pool: Arc<Pool>,
}

impl MySqlDb {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    /// Converts a single [`Param`] into a [`mysql::Value`] (`Str` → `Bytes`).
    fn to_mysql_value(p: &Param) -> My {
        match p {
            Param::Str(s) => My::Bytes(s.as_bytes().to_vec()),
        }
    }

    fn to_mysql_params(params_in: &[Param]) -> Params {
        if params_in.is_empty() {
            return Params::Empty;
        }
        Params::Positional(params_in.iter().map(Self::to_mysql_value).collect())
    }

    /// Converts a driver value into a generic [`Value`].
    ///
    /// Floating point and temporal columns are stringified; the user table
    /// has none of them.
    fn value_from_mysql(v: My) -> Value {
        match v {
            My::NULL => Value::Null,
            My::Int(i) => Value::I64(i),
            My::UInt(u) => Value::U64(u),
            My::Float(f) => Value::Str(f.to_string()),
            My::Double(f) => Value::Str(f.to_string()),
            My::Bytes(b) => match String::from_utf8(b) {
                Ok(s) => Value::Str(s),
                Err(e) => Value::Str(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            },
            My::Date(y, m, d, hh, mm, ss, _) => {
                Value::Str(format!("{y:04}-{m:02}-{d:02} {hh:02}:{mm:02}:{ss:02}"))
            }
            My::Time(neg, days, hh, mm, ss, _) => {
                let sign = if neg { "-" } else { "" };
                Value::Str(format!("{sign}{days:03} {hh:02}:{mm:02}:{ss:02}"))
            }
        }
    }

    fn row_from_mysql(mut r: mysql::Row) -> GRow {
        let names: Vec<String> = r
            .columns_ref()
            .iter()
            .map(|c| c.name_str().to_string())
            .collect();

        let mut out = GRow::default();
        for (idx, name) in names.into_iter().enumerate() {
            let v = r
                .take_opt::<My, _>(idx)
                .and_then(|res| res.ok())
                .unwrap_or(My::NULL);
            out.insert(name, Self::value_from_mysql(v));
        }
        out
    }
}

impl Db for MySqlDb {
    fn fetch_one(&self, sql: &str, params_in: &[Param]) -> Result<Option<GRow>> {
        let params = Self::to_mysql_params(params_in);
        let mut conn = self.pool.get_conn().context("get_conn failed")?;

        debug!(sql, params = ?params_in, "exec_first");

        let row_opt: Option<mysql::Row> = conn.exec_first(sql, params).map_err(|e| {
            error!(sql, "exec_first failed: {}", mysql_err_summary(&e));
            e
        })?;
        debug!(row_present = row_opt.is_some(), "fetch_one done");

        Ok(row_opt.map(Self::row_from_mysql))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_mysql_value_maps_str_to_bytes() {
        assert_eq!(
            MySqlDb::to_mysql_value(&Param::Str("abc")),
            My::Bytes(b"abc".to_vec())
        );
    }

    #[test]
    fn to_mysql_params_is_positional_and_ordered() {
        let ps = [Param::Str("alice"), Param::Str("bob")];

        match MySqlDb::to_mysql_params(&ps) {
            Params::Positional(v) => {
                assert_eq!(
                    v,
                    vec![My::Bytes(b"alice".to_vec()), My::Bytes(b"bob".to_vec())]
                );
            }
            _ => panic!("expected Params::Positional"),
        }
    }

    #[test]
    fn to_mysql_params_empty_slice_is_empty() {
        assert!(matches!(MySqlDb::to_mysql_params(&[]), Params::Empty));
    }

    #[test]
    fn value_from_mysql_decodes_text_and_ints() {
        assert_eq!(
            MySqlDb::value_from_mysql(My::Bytes(b"hello".to_vec())),
            Value::Str("hello".into())
        );
        assert_eq!(MySqlDb::value_from_mysql(My::Int(-1)), Value::I64(-1));
        assert_eq!(MySqlDb::value_from_mysql(My::UInt(3)), Value::U64(3));
        assert_eq!(MySqlDb::value_from_mysql(My::NULL), Value::Null);
    }

    #[test]
    fn value_from_mysql_stringifies_dates() {
        let v = MySqlDb::value_from_mysql(My::Date(2025, 8, 28, 15, 12, 34, 0));
        assert_eq!(v, Value::Str("2025-08-28 15:12:34".into()));
    }
}
