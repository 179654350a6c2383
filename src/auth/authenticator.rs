//! # Username/password authentication
//!
//! Runs a [`BasicCredentials`] pair through the principal lookup and the
//! password check. Synchronous; the middleware calls it on the blocking pool.

use tracing::{error, info, warn};

use crate::auth::{BasicCredentials, Principal, UserDetailsService, password};
use crate::error::{AuthError, LookupError};

/// Authenticates `credentials` against `service`.
///
/// - unknown user or wrong password → [`AuthError::BadCredentials`]
/// - disabled account → [`AuthError::Disabled`]
/// - locked account → [`AuthError::Locked`]
/// - storage or hash failure → [`AuthError::Internal`]
///
/// Account state is only reported once the password has matched.
pub fn authenticate(
    service: &UserDetailsService,
    credentials: &BasicCredentials,
) -> Result<Principal, AuthError> {
    let username = credentials.username.as_str();

    let principal = match service.find_principal(username) {
        Ok(p) => p,
        Err(LookupError::NotFound(_)) => {
            password::verify_dummy(&credentials.password);
            warn!(username, "authentication failed: unknown user");
            return Err(AuthError::BadCredentials);
        }
        Err(LookupError::Repository(e)) => {
            error!(username, error = ?e, "user lookup failed");
            return Err(AuthError::Internal(e));
        }
    };

    let matches = password::verify_password(&credentials.password, principal.password())
        .map_err(|e| {
            error!(username, error = ?e, "stored password hash is unusable");
            AuthError::Internal(e)
        })?;
    if !matches {
        warn!(username, "authentication failed: bad password");
        return Err(AuthError::BadCredentials);
    }

    if !principal.is_enabled() {
        warn!(username, "authentication failed: user disabled");
        return Err(AuthError::Disabled);
    }
    if !principal.is_account_non_locked() {
        warn!(username, "authentication failed: user locked");
        return Err(AuthError::Locked);
    }

    info!(username, "authenticated");
    Ok(principal)
}
