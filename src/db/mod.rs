//! Database access: the synchronous [`port::Db`] abstraction, its MySQL
//! adapter, and pool construction.

pub mod connection;
pub mod mysql_adapter;
pub mod port;
