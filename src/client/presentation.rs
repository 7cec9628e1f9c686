//! Presentation
//!
//! Projects outcomes onto the text and color shown to the user, and formats
//! the lines the terminal front end prints.

use crate::auth::{AuthResult, DisplayTag};

const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Text and color of the current outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub text: String,
    pub tag: DisplayTag,
}

impl From<&AuthResult> for Presentation {
    fn from(result: &AuthResult) -> Self {
        Self {
            text: result.message.clone(),
            tag: result.display_tag,
        }
    }
}

impl Presentation {
    /// Renders the outcome as one terminal line.
    pub fn render(&self, use_color: bool) -> String {
        if !use_color {
            return format!("{}\n", self.text);
        }

        let color = match self.tag {
            DisplayTag::Positive => ANSI_GREEN,
            DisplayTag::Negative => ANSI_RED,
        };
        format!("{color}{}{ANSI_RESET}\n", self.text)
    }
}

/// Format the screen title
pub fn format_title(title: &str, use_color: bool) -> String {
    if use_color {
        format!("{ANSI_BOLD}{title}{ANSI_RESET}\n")
    } else {
        format!("{title}\n")
    }
}

/// Format an alert shown for rejected form input
pub fn format_alert(title: &str, message: &str) -> String {
    format!("{title}: {message}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let p = Presentation::from(&AuthResult::accepted("Hello, Admin!".into()));
        assert_eq!(p.render(false), "Hello, Admin!\n");
    }

    #[test]
    fn test_render_colored() {
        let ok = Presentation::from(&AuthResult::accepted("yes".into()));
        let bad = Presentation::from(&AuthResult::rejected("no".into()));
        assert_eq!(ok.render(true), "\x1b[32myes\x1b[0m\n");
        assert_eq!(bad.render(true), "\x1b[31mno\x1b[0m\n");
    }

    #[test]
    fn test_title() {
        assert_eq!(format_title("Login", true), "\x1b[1mLogin\x1b[0m\n");
        assert_eq!(format_title("Login", false), "Login\n");
    }

    #[test]
    fn test_alert() {
        assert_eq!(
            format_alert("ERROR", "Enter username and password!"),
            "ERROR: Enter username and password!\n"
        );
    }
}
