//! Client result types
//!
//! Defines result structures returned by a login session.

/// Result of an interactive login session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Username that logged in, `None` if input ended first
    pub authenticated: Option<String>,
    /// Submissions that reached the checker
    pub attempts: usize,
}

impl SessionOutcome {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.is_some()
    }
}
