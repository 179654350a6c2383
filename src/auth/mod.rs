//! # Authentication
//!
//! - [`principal`]: the [`Principal`] adapter over a stored user
//! - [`user_details`]: [`find_principal`] and [`UserDetailsService`]
//! - [`password`]: argon2 hashing and verification
//! - [`basic`]: HTTP Basic header parsing
//! - [`authenticator`]: lookup + password + account-state checks
//! - [`middleware`]: the Axum guard for protected routes

pub mod authenticator;
pub mod basic;
pub mod middleware;
pub mod password;
pub mod principal;
pub mod user_details;

pub use authenticator::authenticate;
pub use basic::BasicCredentials;
pub use middleware::require_authentication;
pub use principal::{GrantedAuthority, Principal};
pub use user_details::{UserDetailsService, find_principal};
