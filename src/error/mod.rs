//! Error handling
//!
//! Defines error types and handling for login-gate.

pub mod handlers;
pub mod types;

pub use types::*;
