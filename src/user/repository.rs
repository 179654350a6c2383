use anyhow::Result;

use crate::user::User;

/// Read access to stored users.
///
/// Implementations are synchronous; the HTTP layer calls them from
/// `spawn_blocking`.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync + 'static {
    /// Exact-match lookup by username.
    ///
    /// `Ok(None)` means no such user; `Err` is reserved for storage failures.
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
}
