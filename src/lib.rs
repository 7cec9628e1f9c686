pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod utils;

pub use auth::{AuthResult, AuthenticationChecker, Credential, CredentialStore, DisplayTag};
pub use client::{LoginViewModel, SessionOutcome, run_session};
pub use config::AppConfig;
