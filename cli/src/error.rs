#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Error surfaced by the core library (validation, rendering, layout).
    #[display("{}", _0)]
    Core(specpack_core::AppError),

    /// An external tool exited with a non-zero status.
    #[from(ignore)]
    #[display("{tool} exited with status {status}: {stderr}")]
    Tool {
        /// Program that was invoked.
        tool: String,
        /// Exit status it returned.
        status: i32,
        /// Captured standard error.
        stderr: String,
    },

    /// An external tool exceeded its allotted run time and was killed.
    #[from(ignore)]
    #[display("{tool} timed out after {seconds}s")]
    Timeout {
        /// Program that was invoked.
        tool: String,
        /// Timeout that was exceeded.
        seconds: u64,
    },

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the
/// `General(String)` variant contains a `String`, which does not implement
/// `std::error::Error`, causing auto-derived `source()` implementations to
/// fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
