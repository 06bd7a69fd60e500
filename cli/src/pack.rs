#![deny(missing_docs)]

//! # Pack Command
//!
//! Runs the external package manager over a generated package source tree
//! to produce the distributable `.nupkg` artifact.

use crate::error::{CliError, CliResult};
use crate::exec::{self, CommandExecutor};
use crate::nuget;
use specpack_core::{FileSystem, OsFileSystem};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the pack command.
#[derive(clap::Args, Debug, Clone)]
pub struct PackArgs {
    /// Path to the `.nuspec` manifest of a generated package tree.
    #[clap(long)]
    pub nuspec_path: PathBuf,

    /// Directory the `.nupkg` artifact is written to.
    #[clap(long, default_value = "dist")]
    pub artifact_dir: PathBuf,

    /// Package-manager executable.
    #[clap(long, default_value = "nuget", env = "SPECPACK_NUGET")]
    pub nuget_path: String,

    /// Seconds an external tool may run before being killed (0 disables).
    #[clap(long, default_value_t = 600)]
    pub tool_timeout: u64,
}

impl PackArgs {
    /// Timeout applied to the package-manager invocation.
    pub fn timeout(&self) -> Option<Duration> {
        exec::timeout_from_secs(self.tool_timeout)
    }
}

/// Executes the pack flow.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `executor` - The command runner (use `ShellExecutor` for real execution).
pub fn execute(args: &PackArgs, executor: &impl CommandExecutor) -> CliResult<()> {
    if !args.nuspec_path.exists() {
        return Err(CliError::General(format!(
            "Manifest not found: {:?}",
            args.nuspec_path
        )));
    }

    fs::create_dir_all(&args.artifact_dir)?;

    println!("Packing {:?}...", args.nuspec_path);
    let output = nuget::pack(executor, &args.nuget_path, &args.nuspec_path, &args.artifact_dir)?;

    if !output.success() {
        return Err(CliError::Tool {
            tool: args.nuget_path.clone(),
            status: output.exit_code,
            stderr: output.stderr,
        });
    }

    for artifact in OsFileSystem.list_files(&args.artifact_dir, Some("*.nupkg"))? {
        println!("  -> {}", artifact.display());
    }

    Ok(())
}
