//! Configuration management for login-gate
//!
//! Loads the credential list, the user-facing messages and display settings
//! from an optional `config.toml` with environment overrides.
//!
//! Environment variables use the `LOGIN_` prefix and `__` between nested keys,
//! e.g. `LOGIN_MESSAGES__GREETING="Hi, {username}"`.

use crate::auth::credentials::{Credential, CredentialStore, default_credentials};
use crate::auth::validator::USERNAME_PLACEHOLDER;
use config::{Config, ConfigError, Environment, File, FileFormat};
use log::warn;
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_TITLE: &str = "Login";
pub const DEFAULT_GREETING: &str = "Hello, {username}!";
pub const DEFAULT_INVALID_CREDENTIALS: &str = "Invalid username or password!";
pub const DEFAULT_ERROR_TITLE: &str = "ERROR";
pub const DEFAULT_MISSING_INPUT: &str = "Enter username and password!";

const CONFIG_FILE: &str = "config";
const ENV_PREFIX: &str = "LOGIN";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Known username/password pairs, in lookup order
    pub users: Vec<Credential>,

    pub messages: MessagesConfig,

    pub display: DisplayConfig,
}

/// Text shown to the user
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MessagesConfig {
    /// Heading printed before the first prompt
    pub title: String,

    /// Shown on success; `{username}` is replaced with the capitalized name
    pub greeting: String,

    /// Shown on any failed attempt
    pub invalid_credentials: String,

    /// Alert heading and body when a field is left empty
    pub error_title: String,
    pub missing_input: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// Render outcomes with ANSI colors
    pub use_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users: default_credentials(),
            messages: MessagesConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            invalid_credentials: DEFAULT_INVALID_CREDENTIALS.to_string(),
            error_title: DEFAULT_ERROR_TITLE.to_string(),
            missing_input: DEFAULT_MISSING_INPUT.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}

/// `LOGIN_` prefix, `__` between nested keys
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl AppConfig {
    /// Load configuration from config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?;

        Self::from_settings(settings)
    }

    /// Load configuration from an inline TOML document, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the credential store the checker will use
    pub fn credential_store(&self) -> CredentialStore {
        CredentialStore::new(self.users.clone())
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.messages.invalid_credentials.is_empty() {
            return Err(ConfigError::Message(
                "messages.invalid_credentials cannot be empty".into(),
            ));
        }

        if !self.messages.greeting.contains(USERNAME_PLACEHOLDER) {
            return Err(ConfigError::Message(format!(
                "messages.greeting must contain {USERNAME_PLACEHOLDER}"
            )));
        }

        if let Some(index) = self.users.iter().position(|u| u.username.is_empty()) {
            return Err(ConfigError::Message(format!(
                "users[{index}] has an empty username"
            )));
        }

        if self.users.is_empty() {
            warn!("No users configured; every login attempt will be rejected");
        }

        let mut seen = HashSet::new();
        for user in &self.users {
            if !seen.insert(user.username.as_str()) {
                warn!("Duplicate username in configuration: {}", user.username);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.users, default_credentials());
        assert_eq!(config.messages.greeting, DEFAULT_GREETING);
        assert_eq!(config.messages.title, DEFAULT_TITLE);
        assert!(config.display.use_color);
    }

    #[test]
    fn test_users_and_messages_from_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [[users]]
            username = "alice"
            password = "wonderland"

            [messages]
            greeting = "Welcome back, {username}."

            [display]
            use_color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.users, vec![Credential::new("alice", "wonderland")]);
        assert_eq!(config.messages.greeting, "Welcome back, {username}.");
        assert_eq!(
            config.messages.invalid_credentials,
            DEFAULT_INVALID_CREDENTIALS
        );
        assert!(!config.display.use_color);

        let store = config.credential_store();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_environment_overrides() {
        let mut vars = config::Map::new();
        vars.insert(
            "LOGIN_MESSAGES__GREETING".to_string(),
            "Hi, {username}?".to_string(),
        );
        vars.insert("LOGIN_DISPLAY__USE_COLOR".to_string(), "false".to_string());

        let config = AppConfig::load_with(environment().source(Some(vars))).unwrap();

        assert_eq!(config.messages.greeting, "Hi, {username}?");
        assert!(!config.display.use_color);
        assert_eq!(
            config.messages.invalid_credentials,
            DEFAULT_INVALID_CREDENTIALS
        );
    }

    #[test]
    fn test_environment_override_is_validated() {
        let mut vars = config::Map::new();
        vars.insert("LOGIN_MESSAGES__GREETING".to_string(), "Hi!".to_string());

        let result = AppConfig::load_with(environment().source(Some(vars)));
        assert!(result.is_err());
    }

    #[test]
    fn test_greeting_without_placeholder_is_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [messages]
            greeting = "Hello!"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("{username}"));
    }

    #[test]
    fn test_empty_invalid_message_is_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
            [messages]
            invalid_credentials = ""
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [[users]]
            username = "ok"
            password = "ok"

            [[users]]
            username = ""
            password = "x"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("users[1]"));
    }

    #[test]
    fn test_duplicate_usernames_are_allowed() {
        let config = AppConfig::from_toml_str(
            r#"
            [[users]]
            username = "bob"
            password = "one"

            [[users]]
            username = "bob"
            password = "two"
            "#,
        )
        .unwrap();
        assert_eq!(config.users.len(), 2);
    }
}
