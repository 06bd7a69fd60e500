#![deny(missing_docs)]

//! # Fetch Command
//!
//! Installs a published package into a local directory via the external
//! package manager, typically to obtain the previous contract revision as a
//! diff baseline.

use crate::error::{CliError, CliResult};
use crate::exec::{self, CommandExecutor};
use crate::nuget;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the fetch command.
#[derive(clap::Args, Debug, Clone)]
pub struct FetchArgs {
    /// Identifier of the package to install.
    #[clap(long)]
    pub package_id: String,

    /// Version to install.
    #[clap(long)]
    pub package_version: String,

    /// Directory the package is installed into.
    #[clap(long, default_value = "packages")]
    pub output_dir: PathBuf,

    /// Package-manager executable.
    #[clap(long, default_value = "nuget", env = "SPECPACK_NUGET")]
    pub nuget_path: String,

    /// Seconds an external tool may run before being killed (0 disables).
    #[clap(long, default_value_t = 600)]
    pub tool_timeout: u64,
}

impl FetchArgs {
    /// Timeout applied to the package-manager invocation.
    pub fn timeout(&self) -> Option<Duration> {
        exec::timeout_from_secs(self.tool_timeout)
    }
}

/// Executes the fetch flow.
pub fn execute(args: &FetchArgs, executor: &impl CommandExecutor) -> CliResult<()> {
    fs::create_dir_all(&args.output_dir)?;

    println!(
        "Fetching {} {} into {:?}...",
        args.package_id, args.package_version, args.output_dir
    );
    let output = nuget::install(
        executor,
        &args.nuget_path,
        &args.package_id,
        &args.package_version,
        &args.output_dir,
    )?;

    if !output.success() {
        return Err(CliError::Tool {
            tool: args.nuget_path.clone(),
            status: output.exit_code,
            stderr: output.stderr,
        });
    }

    println!("Installed {} {}.", args.package_id, args.package_version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::ToolOutput;
    use std::cell::RefCell;
    use tempfile::tempdir;

    struct MockExecutor {
        args_seen: RefCell<Vec<String>>,
        exit_code: i32,
    }

    impl CommandExecutor for MockExecutor {
        fn execute(&self, _program: &str, args: &[&str]) -> CliResult<ToolOutput> {
            *self.args_seen.borrow_mut() = args.iter().map(|s| s.to_string()).collect();
            Ok(ToolOutput {
                exit_code: self.exit_code,
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_fetch_builds_install_command() {
        let dir = tempdir().unwrap();
        let args = FetchArgs {
            package_id: "Acme.PetStore.Contracts".to_string(),
            package_version: "2.0.0".to_string(),
            output_dir: dir.path().join("baseline"),
            nuget_path: "nuget".to_string(),
            tool_timeout: 0,
        };

        let executor = MockExecutor {
            args_seen: RefCell::new(Vec::new()),
            exit_code: 0,
        };
        execute(&args, &executor).unwrap();

        let seen = executor.args_seen.borrow();
        assert_eq!(
            &seen[..4],
            &["install", "Acme.PetStore.Contracts", "-Version", "2.0.0"]
        );
        assert!(args.output_dir.exists());
    }

    #[test]
    fn test_fetch_surfaces_tool_failure() {
        let dir = tempdir().unwrap();
        let args = FetchArgs {
            package_id: "Acme.Missing".to_string(),
            package_version: "0.0.1".to_string(),
            output_dir: dir.path().join("baseline"),
            nuget_path: "nuget".to_string(),
            tool_timeout: 0,
        };

        let executor = MockExecutor {
            args_seen: RefCell::new(Vec::new()),
            exit_code: 1,
        };
        let err = execute(&args, &executor).unwrap_err();
        assert!(matches!(err, CliError::Tool { status: 1, .. }));
    }
}
