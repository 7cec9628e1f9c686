//! Credential storage
//!
//! Holds the known username/password pairs. The store is built once and
//! handed to the checker; nothing in here is global.

use serde::Deserialize;

/// A username/password pair considered valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Anything that can answer "is this pair known?".
///
/// The checker is generic over this so tests can swap in their own lookup.
pub trait CredentialSource {
    fn exists(&self, username: &str, password: &str) -> bool;
}

/// Ordered, immutable list of known credentials.
///
/// Duplicate usernames are allowed. Lookups compare both fields exactly,
/// case-sensitive and without trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    credentials: Vec<Credential>,
}

impl CredentialStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.credentials.iter()
    }
}

impl CredentialSource for CredentialStore {
    fn exists(&self, username: &str, password: &str) -> bool {
        self.credentials
            .iter()
            .any(|c| c.username == username && c.password == password)
    }
}

impl FromIterator<Credential> for CredentialStore {
    fn from_iter<I: IntoIterator<Item = Credential>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Demo users, used when nothing else is configured.
pub fn default_credentials() -> Vec<Credential> {
    vec![
        Credential::new("admin", "admin"),
        Credential::new("user", "user"),
    ]
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(default_credentials())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_matches_stored_pairs() {
        let store = CredentialStore::default();
        assert!(store.exists("admin", "admin"));
        assert!(store.exists("user", "user"));
    }

    #[test]
    fn test_exists_is_exact() {
        let store = CredentialStore::default();
        assert!(!store.exists("Admin", "admin"));
        assert!(!store.exists("admin", "ADMIN"));
        assert!(!store.exists(" admin", "admin"));
        assert!(!store.exists("admin", "admin "));
        assert!(!store.exists("admin", "user"));
        assert!(!store.exists("", ""));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let store: CredentialStore = vec![
            Credential::new("bob", "first"),
            Credential::new("bob", "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(store.len(), 2);
        assert!(store.exists("bob", "first"));
        assert!(store.exists("bob", "second"));
    }

    #[test]
    fn test_empty_store_matches_nothing() {
        let store = CredentialStore::new(Vec::new());
        assert!(store.is_empty());
        assert!(!store.exists("", ""));
        assert!(!store.exists("admin", "admin"));
    }
}
