//! # Password hashing (argon2id)
//!
//! Stored credentials are PHC strings (`$argon2id$v=19$...`). Verification
//! parses the parameters out of the stored hash, so rows hashed with other
//! argon2 settings keep working.

use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::warn;

/// Hashes `plain` with a fresh random salt.
///
/// # Example
/// ```rust
/// use login_web::auth::password::{hash_password, verify_password};
///
/// let hash = hash_password("s3cret").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// assert!(verify_password("s3cret", &hash).unwrap());
/// ```
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| anyhow!("password hashing failed: {e}"))
}

/// Checks `plain` against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch and `Err` when `hash` cannot be parsed.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("invalid password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// Burns one verification against a throwaway hash.
///
/// Called when the username is unknown so that the response time does not
/// reveal whether an account exists.
pub fn verify_dummy(plain: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let hash =
        DUMMY_HASH.get_or_init(|| dummy_hash(hash_password("dummy-password-for-timing")));
    if let Some(hash) = hash {
        let _ = verify_password(plain, hash);
    }
}

fn dummy_hash(generated: Result<String>) -> Option<String> {
    generated
        .map_err(|e| {
            warn!(error = %e, "dummy password hash unavailable; unknown users will answer faster");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_hash_keeps_generated_hash() {
        assert_eq!(dummy_hash(Ok("$argon2id$x".into())).as_deref(), Some("$argon2id$x"));
    }

    #[test]
    fn dummy_hash_failure_is_none() {
        assert!(dummy_hash(Err(anyhow!("no entropy"))).is_none());
    }

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let err = verify_password("anything", "plain-text-password").unwrap_err();
        assert!(err.to_string().contains("invalid password hash"));
    }

    #[test]
    fn empty_password_is_hashable() {
        let hash = hash_password("").unwrap();
        assert!(verify_password("", &hash).unwrap());
        assert!(!verify_password(" ", &hash).unwrap());
    }

    #[test]
    fn verify_dummy_does_not_panic() {
        verify_dummy("whatever");
        verify_dummy("");
    }
}
