//! # In-memory user repository
//!
//! A [`UserRepository`] backed by a `HashMap`, filled once at construction.
//! Useful for demos and for exercising the HTTP layer without a database.
//!
//! # Example
//! ```rust
//! use login_web::user::{InMemoryUserRepository, User, UserRepository};
//!
//! let repo = InMemoryUserRepository::new([User {
//!     id: 1,
//!     username: "alice".into(),
//!     password: "$argon2id$...".into(),
//!     role: "ROLE_USER".into(),
//!     enabled: true,
//!     locked: false,
//! }]);
//!
//! assert!(repo.find_by_username("alice").unwrap().is_some());
//! assert!(repo.find_by_username("bob").unwrap().is_none());
//! ```

use std::collections::HashMap;

use anyhow::Result;

use crate::user::{User, UserRepository};

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    /// Builds the repository; a later user with a duplicate username wins.
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|u| (u.username.clone(), u))
                .collect(),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.get(username).cloned())
    }
}
