use std::collections::HashMap;

use super::types::Credentials;

/// Plain username -> password lookup.
///
/// Comparison is exact and case-sensitive with no hashing. This is an access
/// gate for the tool, not a security boundary.
#[derive(Clone, Debug, Default)]
pub struct AccessGate {
    allowed_users: HashMap<String, String>,
}

impl AccessGate {
    pub fn new(allowed_users: HashMap<String, String>) -> Self {
        Self { allowed_users }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.allowed_users
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    pub fn check(&self, credentials: &Credentials) -> bool {
        self.authenticate(&credentials.username, &credentials.password)
    }
}
