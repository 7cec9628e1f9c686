//! Authentication system
//!
//! Handles credential storage, credential validation and the outcome of a
//! login attempt. Nothing here knows about prompts or colors on screen.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::{Credential, CredentialSource, CredentialStore};
pub use results::{AuthResult, DisplayTag};
pub use validator::{AuthenticationChecker, capitalize_words};
