use std::fmt;

use crate::core::counts::MIN_INPUT_CHARS;

/// User-facing failures of the session. Neither is fatal; the session
/// stays usable after either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Input too short to analyze. No generator call was made.
    Validation { min_chars: usize },
    /// The generator rejected the request. Carries the underlying cause for logging.
    Generation(String),
}

impl SessionError {
    pub fn too_short() -> Self {
        SessionError::Validation {
            min_chars: MIN_INPUT_CHARS,
        }
    }

    /// The message shown to the user. Causes stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Validation { min_chars } => {
                format!("Please enter at least {min_chars} characters to analyze.")
            }
            SessionError::Generation(_) => "Error generating AI output.".to_string(),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Validation { min_chars } => {
                write!(f, "validation error: input shorter than {min_chars} characters")
            }
            SessionError::Generation(cause) => write!(f, "generation error: {cause}"),
        }
    }
}

impl std::error::Error for SessionError {}
