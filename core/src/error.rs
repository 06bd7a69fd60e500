//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A required option is missing or malformed. The message names the field.
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Config(String),

    /// A `key=value` token could not be parsed. The message carries the token verbatim.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// No template is registered under the requested logical name.
    #[from(ignore)]
    #[display("Unknown template: {_0}")]
    TemplateNotFound(String),

    /// A template was found but could not be rendered.
    #[display("Template '{template}' failed to render: {detail}")]
    TemplateRender {
        /// Logical name of the template.
        template: String,
        /// What went wrong (missing placeholder, unterminated token).
        detail: String,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
