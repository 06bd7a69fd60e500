#![deny(missing_docs)]

//! # Package-Manager Invocation
//!
//! Builds and runs the external package-manager commands used by the
//! end-to-end flows: packing a generated source tree into a `.nupkg`, and
//! installing a published package (e.g. to obtain a baseline spec).
//!
//! These wrappers only construct argument lists and hand them to the
//! executor; exit codes come back in the [`ToolOutput`] for the calling
//! flow to interpret.

use crate::error::CliResult;
use crate::exec::{CommandExecutor, ToolOutput};
use std::path::Path;

/// Packs the package source tree described by `nuspec` into `output_dir`.
pub fn pack<E: CommandExecutor>(
    executor: &E,
    program: &str,
    nuspec: &Path,
    output_dir: &Path,
) -> CliResult<ToolOutput> {
    let nuspec = nuspec.to_string_lossy();
    let output_dir = output_dir.to_string_lossy();

    let args = vec![
        "pack",
        nuspec.as_ref(),
        "-OutputDirectory",
        output_dir.as_ref(),
        "-NonInteractive",
    ];

    executor.execute(program, &args)
}

/// Installs `package_id` at `version` into `output_dir`.
pub fn install<E: CommandExecutor>(
    executor: &E,
    program: &str,
    package_id: &str,
    version: &str,
    output_dir: &Path,
) -> CliResult<ToolOutput> {
    let output_dir = output_dir.to_string_lossy();

    let args = vec![
        "install",
        package_id,
        "-Version",
        version,
        "-OutputDirectory",
        output_dir.as_ref(),
        "-NonInteractive",
    ];

    executor.execute(program, &args)
}
