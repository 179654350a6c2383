//! HTTP surface: handlers and the router that decides which of them need
//! authentication.

pub mod fallback;
pub mod public;
pub mod router;
