//! Login front end
//!
//! The caller side of the login check: form state, presentation and the
//! terminal session.

pub mod handler;
pub mod presentation;
pub mod results;
pub mod state;

pub use handler::run_session;
pub use presentation::Presentation;
pub use results::SessionOutcome;
pub use state::LoginViewModel;
