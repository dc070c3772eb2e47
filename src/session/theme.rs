//! Theme acquisition seam.
//!
//! The core never builds prompts or calls a model; it depends on an
//! abstract provider that returns a ranking theme for a category while
//! steering clear of previously used themes. Provider calls may block on
//! network I/O and may fail; the session applies no state change until a
//! call has succeeded.

use std::fmt;

/// Abstract source of ranking themes.
///
/// Implementations return a short text of the shape
/// `label: (meaning of 1, meaning of 100)` and should avoid returning any
/// string in `excluding`. The core treats the result as opaque.
pub trait ThemeProvider {
    fn request_theme(
        &self,
        category: Option<&str>,
        excluding: &[String],
    ) -> Result<String, ThemeError>;
}

/// Error from a theme provider (network failure, timeout, bad response).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeError {
    pub message: String,
}

impl ThemeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Theme provider failed: {}", self.message)
    }
}

impl std::error::Error for ThemeError {}
