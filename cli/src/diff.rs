#![deny(missing_docs)]

//! # Diff Command
//!
//! Compares two spec revisions with the external differ and fails the run
//! when breaking changes are detected, so CI pipelines can gate on it.

use crate::error::{CliError, CliResult};
use crate::exec::{self, CommandExecutor};
use crate::specdiff;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the diff command.
#[derive(clap::Args, Debug, Clone)]
pub struct DiffArgs {
    /// The published baseline spec revision.
    #[clap(long)]
    pub baseline: PathBuf,

    /// The candidate spec revision.
    #[clap(long)]
    pub candidate: PathBuf,

    /// Spec differ executable.
    #[clap(long, default_value = "oasdiff", env = "SPECPACK_OASDIFF")]
    pub differ_path: String,

    /// Seconds an external tool may run before being killed (0 disables).
    #[clap(long, default_value_t = 120)]
    pub tool_timeout: u64,
}

impl DiffArgs {
    /// Timeout applied to the differ invocation.
    pub fn timeout(&self) -> Option<Duration> {
        exec::timeout_from_secs(self.tool_timeout)
    }
}

/// Executes the diff flow.
pub fn execute(args: &DiffArgs, executor: &impl CommandExecutor) -> CliResult<()> {
    for spec in [&args.baseline, &args.candidate] {
        if !spec.exists() {
            return Err(CliError::General(format!("Spec file not found: {:?}", spec)));
        }
    }

    let outcome = specdiff::compare(executor, &args.differ_path, &args.baseline, &args.candidate)?;

    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }

    if outcome.breaking {
        Err(CliError::General(format!(
            "breaking changes detected between {:?} and {:?}",
            args.baseline, args.candidate
        )))
    } else {
        println!("No breaking changes detected.");
        Ok(())
    }
}
