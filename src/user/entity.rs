/// A persisted account as stored in the `users` table.
///
/// `password` holds an argon2 PHC string, never plain text. `role` is a
/// comma-separated list of authority names (e.g. `"ROLE_USER,ROLE_ADMIN"`).
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub role: String,
    pub enabled: bool,
    pub locked: bool,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("enabled", &self.enabled)
            .field("locked", &self.locked)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password_hash() {
        let user = User {
            id: 1,
            username: "alice".into(),
            password: "$argon2id$secret-hash".into(),
            role: "ROLE_USER".into(),
            enabled: true,
            locked: false,
        };
        let dbg = format!("{user:?}");

        assert!(dbg.contains("alice"));
        assert!(!dbg.contains("secret-hash"));
    }
}
