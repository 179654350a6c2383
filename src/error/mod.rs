//! Error types shared across the crate.
//!
//! - [`principal`]: failures of the user lookup (`PrincipalNotFound`, `LookupError`)
//! - [`auth`]: HTTP-facing authentication failures (`AuthError`)

pub mod auth;
pub mod principal;

pub use auth::AuthError;
pub use principal::{LookupError, PrincipalNotFound};
