#![deny(missing_docs)]

//! # Process Execution
//!
//! Shared plumbing for invoking external tools (the package manager and the
//! spec differ): build an argument list, run the program with both output
//! streams captured, and surface `(exit code, stdout, stderr)` untouched.
//!
//! Abstracted behind [`CommandExecutor`] so command construction can be
//! tested without the external tools installed. The real executor bounds
//! the child's run time: an external tool that hangs would otherwise hang
//! the caller indefinitely.

use crate::error::{CliError, CliResult};
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Captured result of one external-tool invocation.
///
/// A non-zero exit code is data, not an error: callers decide what it means
/// for their flow.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// The tool's exit code (-1 if terminated by a signal).
    pub exit_code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// Whether the tool exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Interface for executing an external command.
///
/// Abstracted to allow mocking command execution in tests without requiring
/// the external tools to be installed.
pub trait CommandExecutor {
    /// Executes the command and returns the captured output.
    fn execute(&self, program: &str, args: &[&str]) -> CliResult<ToolOutput>;
}

/// Standard executor using `std::process::Command`.
pub struct ShellExecutor {
    timeout: Option<Duration>,
}

impl ShellExecutor {
    /// Creates an executor. `timeout` bounds each invocation; `None` waits
    /// indefinitely.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> CliResult<ToolOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Drain both streams on dedicated threads. Reading only one pipe
        // deadlocks once the other pipe's buffer fills.
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let deadline = self.timeout.map(|t| Instant::now() + t);
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CliError::Timeout {
                    tool: program.to_string(),
                    seconds: self.timeout.unwrap_or_default().as_secs(),
                });
            }
            std::thread::sleep(Duration::from_millis(25));
        };

        Ok(ToolOutput {
            exit_code: status.code().unwrap_or(-1),
            stdout: join_reader(stdout_reader)?,
            stderr: join_reader(stderr_reader)?,
        })
    }
}

/// Maps a `--tool-timeout` seconds value to a duration; `0` disables the
/// bound entirely.
pub fn timeout_from_secs(seconds: u64) -> Option<Duration> {
    if seconds == 0 {
        None
    } else {
        Some(Duration::from_secs(seconds))
    }
}

fn spawn_reader<R: Read + Send + 'static>(
    pipe: Option<R>,
) -> JoinHandle<std::io::Result<String>> {
    std::thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_string(&mut buf)?;
        }
        Ok(buf)
    })
}

fn join_reader(handle: JoinHandle<std::io::Result<String>>) -> CliResult<String> {
    let contents = handle
        .join()
        .map_err(|_| CliError::General("output reader thread panicked".into()))??;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_and_exit_code() {
        let exec = ShellExecutor::new(None);
        let output = exec.execute("sh", &["-c", "echo out; echo err >&2"]).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[test]
    fn test_nonzero_exit_is_surfaced_not_masked() {
        let exec = ShellExecutor::new(None);
        let output = exec.execute("sh", &["-c", "exit 3"]).unwrap();
        assert!(!output.success());
        assert_eq!(output.exit_code, 3);
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let exec = ShellExecutor::new(None);
        let err = exec
            .execute("definitely-not-a-real-program-1f2e3d", &[])
            .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_hanging_tool_times_out() {
        let exec = ShellExecutor::new(Some(Duration::from_secs(1)));
        let err = exec.execute("sleep", &["30"]).unwrap_err();
        match err {
            CliError::Timeout { tool, seconds } => {
                assert_eq!(tool, "sleep");
                assert_eq!(seconds, 1);
            }
            other => panic!("expected Timeout, got {:?}", other),
        }
    }
}
