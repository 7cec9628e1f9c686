//! Input validation utilities
//!
//! Form-level checks applied before credentials reach the checker.

use crate::error::InputError;

/// Rejects an empty username or password.
///
/// Only emptiness is checked; whitespace is significant and left alone.
pub fn validate_login_input(username: &str, password: &str) -> Result<(), InputError> {
    if username.is_empty() {
        return Err(InputError::EmptyUsername);
    }
    if password.is_empty() {
        return Err(InputError::EmptyPassword);
    }
    Ok(())
}
