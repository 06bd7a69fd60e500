#![deny(missing_docs)]

//! # Specpack CLI
//!
//! Command Line Interface for the contract packaging toolchain.
//!
//! Supported Commands:
//! - `generate`: Renders package descriptors and the package source tree.
//! - `pack`: Packs a generated tree into a distributable artifact.
//! - `fetch`: Installs a published package (e.g. a diff baseline).
//! - `diff`: Detects breaking changes between two spec revisions.

use clap::{Parser, Subcommand};

use crate::error::CliResult;
use crate::exec::ShellExecutor;

mod config;
mod diff;
mod error;
mod exec;
mod fetch;
mod generate;
mod nuget;
mod pack;
mod specdiff;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Contract packaging toolchain CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates contract and client package descriptors and layout.
    Generate(generate::GenerateArgs),
    /// Packs a generated package source tree into a .nupkg artifact.
    Pack(pack::PackArgs),
    /// Installs a published package into a local directory.
    Fetch(fetch::FetchArgs),
    /// Detects breaking changes between two spec revisions.
    Diff(diff::DiffArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Pack(args) => {
            // Injecting the bounded shell executor
            let executor = ShellExecutor::new(args.timeout());
            pack::execute(args, &executor)?;
        }
        Commands::Fetch(args) => {
            let executor = ShellExecutor::new(args.timeout());
            fetch::execute(args, &executor)?;
        }
        Commands::Diff(args) => {
            let executor = ShellExecutor::new(args.timeout());
            diff::execute(args, &executor)?;
        }
    }

    Ok(())
}
