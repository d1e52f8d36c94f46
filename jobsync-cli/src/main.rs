//! jobsync: keep Jenkins multibranch jobs in line with a package manifest.
//!
//! # Usage
//!
//! ```text
//! jobsync [--url <URL>] [--user <USER>] [--token <TOKEN>] [--work-dir <DIR>] create [--manifest <FILE>] [--template <FILE>] [--dry-run]
//! jobsync [--url <URL>] [--user <USER>] [--token <TOKEN>] [--work-dir <DIR>] build [--discover-branches]
//! ```
//!
//! `JENKINS_URL`, `JENKINS_USER` and `JENKINS_TOKEN` stand in for the flags.

mod commands;
mod log_rotation;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use commands::{build::BuildArgs, create::CreateArgs, GlobalArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "jobsync",
    version,
    about = "Create, update and build Jenkins multibranch jobs from a manifest",
    long_about = None,
    disable_help_subcommand = true,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Render every manifest record and create or update its job.
    Create(CreateArgs),

    /// Trigger builds on every job the server lists.
    Build(BuildArgs),
}

/// Exit status for command-line usage errors.
const USAGE_EXIT: u8 = 2;

fn available_modes() -> Vec<String> {
    Cli::command()
        .get_subcommands()
        .map(|mode| mode.get_name().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            let _ = err.print();
            eprintln!("available modes: {}", available_modes().join(", "));
            return Ok(ExitCode::from(USAGE_EXIT));
        }
        Err(err) => err.exit(),
    };

    let work_dir = &cli.global.work_dir;
    std::fs::create_dir_all(work_dir)
        .with_context(|| format!("failed to create working directory {}", work_dir.display()))?;
    let log_file = (!cli.global.no_log_file).then(|| cli.global.log_path());
    logging::init(log_file.as_deref())?;

    match cli.mode {
        Mode::Create(args) => args.run(&cli.global),
        Mode::Build(args) => args.run(&cli.global),
    }
}
