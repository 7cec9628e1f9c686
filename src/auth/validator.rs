//! Authentication checker
//!
//! Checks a submitted username/password pair against a credential source and
//! turns the answer into an `AuthResult` ready for display.

use super::credentials::{CredentialSource, CredentialStore};
use super::results::AuthResult;
use crate::config::{AppConfig, DEFAULT_GREETING, DEFAULT_INVALID_CREDENTIALS};
use log::{debug, info};

/// Placeholder replaced with the capitalized username in the greeting.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Stateless checker over an injected credential source.
#[derive(Debug, Clone)]
pub struct AuthenticationChecker<S = CredentialStore> {
    source: S,
    greeting: String,
    invalid_credentials: String,
}

impl<S: CredentialSource> AuthenticationChecker<S> {
    /// Creates a checker with the default messages.
    pub fn new(source: S) -> Self {
        Self::with_messages(source, DEFAULT_GREETING, DEFAULT_INVALID_CREDENTIALS)
    }

    pub fn with_messages(
        source: S,
        greeting: impl Into<String>,
        invalid_credentials: impl Into<String>,
    ) -> Self {
        Self {
            source,
            greeting: greeting.into(),
            invalid_credentials: invalid_credentials.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Checks the pair and builds the outcome.
    ///
    /// Never fails: an unknown pair, including empty strings, is a
    /// `success == false` result.
    pub fn authenticate(&self, username: &str, password: &str) -> AuthResult {
        debug!("Authentication attempt for user: {:?}", username);

        if self.source.exists(username, password) {
            info!("User authenticated: {}", username);
            AuthResult::accepted(self.greeting_for(username))
        } else {
            info!("Rejected credentials for user: {:?}", username);
            AuthResult::rejected(self.invalid_credentials.clone())
        }
    }

    fn greeting_for(&self, username: &str) -> String {
        self.greeting
            .replace(USERNAME_PLACEHOLDER, &capitalize_words(username))
    }
}

impl AuthenticationChecker<CredentialStore> {
    /// Builds a checker from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_messages(
            config.credential_store(),
            config.messages.greeting.as_str(),
            config.messages.invalid_credentials.as_str(),
        )
    }
}

impl Default for AuthenticationChecker<CredentialStore> {
    fn default() -> Self {
        Self::new(CredentialStore::default())
    }
}

/// Upper-cases the first character of every whitespace-separated word and
/// lower-cases the rest.
pub fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}
