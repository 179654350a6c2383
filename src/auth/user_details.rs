//! # Principal lookup
//!
//! Bridges a stored [`User`](crate::user::User) into a [`Principal`].
//!
//! [`find_principal`] is the whole contract: ask the repository for an exact
//! username match, fail with [`PrincipalNotFound`] when there is none, wrap
//! the record otherwise. [`UserDetailsService`] packages a shared repository
//! handle so the HTTP layer can carry it in router state.

use std::sync::Arc;

use tracing::debug;

use crate::auth::Principal;
use crate::error::{LookupError, PrincipalNotFound};
use crate::user::UserRepository;

/// Looks up `username` and adapts the record into a [`Principal`].
///
/// No validation is applied to `username`. Storage failures are returned as
/// [`LookupError::Repository`].
///
/// # Example
/// ```rust
/// use login_web::auth::find_principal;
/// use login_web::user::InMemoryUserRepository;
///
/// let repo = InMemoryUserRepository::default();
/// let err = find_principal(&repo, "bob").unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn find_principal<R>(repo: &R, username: &str) -> Result<Principal, LookupError>
where
    R: UserRepository + ?Sized,
{
    let user = repo
        .find_by_username(username)
        .map_err(LookupError::Repository)?;

    match user {
        Some(user) => {
            debug!(username, "user found");
            Ok(Principal::from(user))
        }
        None => {
            debug!(username, "user not found");
            Err(PrincipalNotFound::new(username).into())
        }
    }
}

/// Shared handle over a [`UserRepository`].
#[derive(Clone)]
pub struct UserDetailsService {
    repo: Arc<dyn UserRepository>,
}

impl UserDetailsService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn from_repository(repo: impl UserRepository) -> Self {
        Self::new(Arc::new(repo))
    }

    /// See [`find_principal`].
    pub fn find_principal(&self, username: &str) -> Result<Principal, LookupError> {
        find_principal(self.repo.as_ref(), username)
    }
}
