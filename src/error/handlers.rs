//! Error handlers
//!
//! Logging and exit-code mapping for application errors.

use crate::error::types::AppError;
use log::error;

/// Process exit code when input ends without a successful login
pub const EXIT_NOT_AUTHENTICATED: i32 = 1;

/// Handle an application error
pub fn handle_error(err: &AppError) {
    error!("login-gate error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 2,
        AppError::Io(_) => 74,
    }
}
