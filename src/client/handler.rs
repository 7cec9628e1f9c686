use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::CredentialSource;
use crate::client::LoginViewModel;
use crate::client::presentation::{Presentation, format_alert, format_title};
use crate::client::results::SessionOutcome;
use crate::config::AppConfig;

const USERNAME_PROMPT: &str = "Username: ";
const PASSWORD_PROMPT: &str = "Password: ";

/// Runs an interactive login session.
///
/// - Prints the title, then prompts for username and password line by line.
/// - Empty fields produce an alert and a fresh prompt.
/// - Stops after the first successful login or when input ends.
pub async fn run_session<R, W, S>(
    mut reader: R,
    writer: &mut W,
    view_model: &mut LoginViewModel<S>,
    config: &AppConfig,
) -> std::io::Result<SessionOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: CredentialSource,
{
    let use_color = config.display.use_color;
    let messages = &config.messages;

    writer
        .write_all(format_title(&messages.title, use_color).as_bytes())
        .await?;

    loop {
        let Some(username) = prompt(&mut reader, writer, USERNAME_PROMPT).await? else {
            break;
        };
        let Some(password) = prompt(&mut reader, writer, PASSWORD_PROMPT).await? else {
            break;
        };

        match view_model.submit(&username, &password) {
            Ok(result) => {
                let shown = Presentation::from(&result);
                writer.write_all(shown.render(use_color).as_bytes()).await?;
                writer.flush().await?;

                if result.success {
                    info!("Session finished with user {}", username);
                    return Ok(SessionOutcome {
                        authenticated: Some(username),
                        attempts: view_model.attempts(),
                    });
                }
            }
            Err(e) => {
                debug!("Input rejected: {}", e);
                let alert = format_alert(&messages.error_title, &messages.missing_input);
                writer.write_all(alert.as_bytes()).await?;
                writer.flush().await?;
            }
        }
    }

    info!("Input closed before a successful login");
    Ok(SessionOutcome {
        authenticated: None,
        attempts: view_model.attempts(),
    })
}

/// Writes the prompt and reads one line. `None` means input has ended.
///
/// Invalid UTF-8 is replaced rather than treated as an I/O failure.
async fn prompt<R, W>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(label.as_bytes()).await?;
    writer.flush().await?;

    let mut raw = Vec::new();
    if reader.read_until(b'\n', &mut raw).await? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&raw);
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}
