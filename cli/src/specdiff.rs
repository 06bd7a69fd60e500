#![deny(missing_docs)]

//! # Spec Diffing
//!
//! Thin wrapper around the external spec-comparison tool. The tool's exit
//! code convention carries the verdict: `0` means the candidate revision is
//! compatible, `1` means it contains breaking changes, anything else is a
//! tool failure.

use crate::error::{CliError, CliResult};
use crate::exec::{CommandExecutor, ToolOutput};
use std::path::Path;

/// Verdict of one spec comparison.
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    /// Whether the candidate spec breaks consumers of the baseline.
    pub breaking: bool,
    /// The differ's exit code.
    pub exit_code: i32,
    /// The differ's report (stdout).
    pub output: String,
}

/// Compares `candidate` against `baseline` with the external differ.
pub fn compare<E: CommandExecutor>(
    executor: &E,
    program: &str,
    baseline: &Path,
    candidate: &Path,
) -> CliResult<DiffOutcome> {
    let baseline = baseline.to_string_lossy();
    let candidate = candidate.to_string_lossy();

    let args = vec![
        "breaking",
        baseline.as_ref(),
        candidate.as_ref(),
        "--fail-on",
        "ERR",
    ];

    let result: ToolOutput = executor.execute(program, &args)?;

    match result.exit_code {
        0 => Ok(DiffOutcome {
            breaking: false,
            exit_code: result.exit_code,
            output: result.stdout,
        }),
        1 => Ok(DiffOutcome {
            breaking: true,
            exit_code: result.exit_code,
            output: result.stdout,
        }),
        status => Err(CliError::Tool {
            tool: program.to_string(),
            status,
            stderr: result.stderr,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct MockExecutor {
        exit_code: i32,
        stdout: &'static str,
        stderr: &'static str,
    }

    impl CommandExecutor for MockExecutor {
        fn execute(&self, _program: &str, args: &[&str]) -> CliResult<ToolOutput> {
            // Baseline comes before candidate on the command line
            assert_eq!(args[0], "breaking");
            assert!(args[1].contains("v1.yaml"));
            assert!(args[2].contains("v2.yaml"));

            Ok(ToolOutput {
                exit_code: self.exit_code,
                stdout: self.stdout.to_string(),
                stderr: self.stderr.to_string(),
            })
        }
    }

    fn run(exit_code: i32, stdout: &'static str, stderr: &'static str) -> CliResult<DiffOutcome> {
        let executor = MockExecutor {
            exit_code,
            stdout,
            stderr,
        };
        compare(
            &executor,
            "oasdiff",
            &PathBuf::from("v1.yaml"),
            &PathBuf::from("v2.yaml"),
        )
    }

    #[test]
    fn test_exit_zero_is_compatible() {
        let outcome = run(0, "no breaking changes", "").unwrap();
        assert!(!outcome.breaking);
        assert_eq!(outcome.output, "no breaking changes");
    }

    #[test]
    fn test_exit_one_is_breaking() {
        let outcome = run(1, "removed endpoint /pets", "").unwrap();
        assert!(outcome.breaking);
        assert_eq!(outcome.exit_code, 1);
    }

    #[test]
    fn test_other_exit_is_tool_error() {
        let err = run(2, "", "malformed spec").unwrap_err();
        match err {
            CliError::Tool { tool, status, stderr } => {
                assert_eq!(tool, "oasdiff");
                assert_eq!(status, 2);
                assert_eq!(stderr, "malformed spec");
            }
            other => panic!("expected Tool error, got {:?}", other),
        }
    }
}
