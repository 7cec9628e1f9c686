//! Authentication result types
//!
//! Defines the value returned by a single authentication attempt.

/// How the caller should present an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTag {
    Positive,
    Negative,
}

impl DisplayTag {
    /// Color name the outcome is shown in.
    pub fn color(&self) -> &'static str {
        match self {
            DisplayTag::Positive => "green",
            DisplayTag::Negative => "red",
        }
    }
}

/// Result of one authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
    pub display_tag: DisplayTag,
}

impl AuthResult {
    pub fn accepted(message: String) -> Self {
        Self {
            success: true,
            message,
            display_tag: DisplayTag::Positive,
        }
    }

    pub fn rejected(message: String) -> Self {
        Self {
            success: false,
            message,
            display_tag: DisplayTag::Negative,
        }
    }
}
