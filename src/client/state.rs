//! Module `state`
//!
//! Defines the `LoginViewModel`, the caller-side state of the login screen:
//! it checks the form fields, runs the authentication and remembers what is
//! currently shown.

use crate::auth::{AuthResult, AuthenticationChecker, CredentialSource, CredentialStore};
use crate::client::presentation::Presentation;
use crate::error::InputError;
use crate::utils::validation::validate_login_input;
use log::debug;

/// State behind the login screen.
///
/// Holds the checker plus the last outcome shown to the user. Empty fields are
/// rejected here and never reach the checker.
pub struct LoginViewModel<S = CredentialStore> {
    checker: AuthenticationChecker<S>,
    current: Option<Presentation>,
    attempts: usize,
}

impl<S: CredentialSource> LoginViewModel<S> {
    pub fn new(checker: AuthenticationChecker<S>) -> Self {
        Self {
            checker,
            current: None,
            attempts: 0,
        }
    }

    /// Submits the form.
    ///
    /// On empty input returns `InputError` and leaves the shown state alone.
    /// Otherwise authenticates, updates the shown state and returns the outcome.
    pub fn submit(&mut self, username: &str, password: &str) -> Result<AuthResult, InputError> {
        if let Err(e) = validate_login_input(username, password) {
            debug!("Form rejected: {}", e);
            return Err(e);
        }

        self.attempts += 1;
        let result = self.checker.authenticate(username, password);
        self.current = Some(Presentation::from(&result));
        Ok(result)
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns what is currently shown, if anything has been submitted.
    pub fn current(&self) -> Option<&Presentation> {
        self.current.as_ref()
    }

    /// Returns the text currently shown.
    pub fn selected_text(&self) -> Option<&str> {
        self.current.as_ref().map(|p| p.text.as_str())
    }

    /// Returns the color name currently shown.
    pub fn selected_color(&self) -> Option<&'static str> {
        self.current.as_ref().map(|p| p.tag.color())
    }

    /// Returns how many submissions reached the checker.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn checker(&self) -> &AuthenticationChecker<S> {
        &self.checker
    }
}
