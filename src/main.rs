//! login-gate - Entry Point
//!
//! Terminal login screen backed by an in-memory credential list.

use log::info;
use std::process::ExitCode;
use tokio::io::{BufReader, stdin, stdout};

use login_gate::error::AppError;
use login_gate::error::handlers::{EXIT_NOT_AUTHENTICATED, error_to_exit_code, handle_error};
use login_gate::utils::logging::setup_logging;
use login_gate::{AppConfig, AuthenticationChecker, LoginViewModel, SessionOutcome, run_session};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging();

    match run().await {
        Ok(outcome) if outcome.is_authenticated() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_NOT_AUTHENTICATED as u8),
        Err(e) => {
            handle_error(&e);
            ExitCode::from(error_to_exit_code(&e) as u8)
        }
    }
}

async fn run() -> Result<SessionOutcome, AppError> {
    let config = AppConfig::load()?;
    info!("Loaded {} user(s)", config.users.len());

    let checker = AuthenticationChecker::from_config(&config);
    let mut view_model = LoginViewModel::new(checker);

    let reader = BufReader::new(stdin());
    let mut writer = stdout();
    let outcome = run_session(reader, &mut writer, &mut view_model, &config).await?;

    info!(
        "Session ended after {} attempt(s), authenticated: {}",
        outcome.attempts,
        outcome.is_authenticated()
    );
    Ok(outcome)
}
