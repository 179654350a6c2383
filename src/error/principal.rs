use thiserror::Error;

/// No user record matches the supplied username.
///
/// Raised by the principal lookup before any [`Principal`](crate::auth::Principal)
/// is created. The username is kept for logging but is not part of the
/// message, so the error can be surfaced without echoing caller input.
///
/// # Example
/// ```
/// use login_web::error::PrincipalNotFound;
///
/// let err = PrincipalNotFound::new("bob");
/// assert_eq!(err.to_string(), "User not found");
/// assert_eq!(err.username, "bob");
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
#[error("User not found")]
pub struct PrincipalNotFound {
    /// The username that was looked up.
    pub username: String,
}

impl PrincipalNotFound {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Outcome of a failed principal lookup.
///
/// `NotFound` is the only domain failure. `Repository` carries storage errors
/// from the [`UserRepository`](crate::user::UserRepository) untouched.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    NotFound(#[from] PrincipalNotFound),

    #[error("user repository failure")]
    Repository(#[source] anyhow::Error),
}

impl LookupError {
    /// Returns `true` if no record matched the username.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_username() {
        let err = PrincipalNotFound::new("alice");
        assert_eq!(err.username, "alice");
    }

    #[test]
    fn display_does_not_echo_username() {
        let err = PrincipalNotFound::new("mallory");
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn lookup_error_wraps_not_found_transparently() {
        let err: LookupError = PrincipalNotFound::new("bob").into();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn repository_error_keeps_source() {
        let err = LookupError::Repository(anyhow::anyhow!("connection refused"));

        assert!(!err.is_not_found());
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("connection refused"));
    }
}
