use std::fmt;

use crate::user::User;

/// A single permission name granted to a principal (e.g. `"ROLE_USER"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GrantedAuthority(String);

impl GrantedAuthority {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GrantedAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The authenticated-identity view of a stored [`User`].
///
/// # Overview
///
/// `Principal` is a read-only adapter: it owns the user record it was built
/// from and exposes only what authentication needs:
///
/// - identifier ([`username`](Self::username))
/// - credential ([`password`](Self::password), an argon2 hash)
/// - account state ([`is_enabled`](Self::is_enabled),
///   [`is_account_non_locked`](Self::is_account_non_locked))
/// - [`authorities`](Self::authorities)
///
/// The only way to obtain one is `From<User>`, so a principal always has a
/// backing record. It lives for one request and is inserted into the request
/// extensions by the security middleware.
///
/// # Example
///
/// ```rust
/// use login_web::auth::Principal;
/// use login_web::user::User;
///
/// let principal = Principal::from(User {
///     id: 7,
///     username: "alice".into(),
///     password: "$argon2id$...".into(),
///     role: "ROLE_USER, ROLE_ADMIN".into(),
///     enabled: true,
///     locked: false,
/// });
///
/// assert_eq!(principal.username(), "alice");
/// assert!(principal.has_authority("ROLE_ADMIN"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Principal {
    user: User,
    authorities: Vec<GrantedAuthority>,
}

impl Principal {
    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// The stored password hash.
    pub fn password(&self) -> &str {
        &self.user.password
    }

    pub fn is_enabled(&self) -> bool {
        self.user.enabled
    }

    pub fn is_account_non_locked(&self) -> bool {
        !self.user.locked
    }

    pub fn authorities(&self) -> &[GrantedAuthority] {
        &self.authorities
    }

    pub fn has_authority(&self, name: &str) -> bool {
        self.authorities.iter().any(|a| a.as_str() == name)
    }

    /// Id of the backing user record.
    pub fn user_id(&self) -> u64 {
        self.user.id
    }
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        let authorities = parse_authorities(&user.role);
        Self { user, authorities }
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("username", &self.username())
            .field("enabled", &self.is_enabled())
            .field("non_locked", &self.is_account_non_locked())
            .field("authorities", &self.authorities)
            .finish_non_exhaustive()
    }
}

/// Splits a comma-separated role column; blanks are dropped, order is kept.
fn parse_authorities(role: &str) -> Vec<GrantedAuthority> {
    role.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| GrantedAuthority(s.to_string()))
        .collect()
}
