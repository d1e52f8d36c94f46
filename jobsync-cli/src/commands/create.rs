//! `jobsync create`: render every manifest record and create or update its job.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use jobsync_client::JenkinsClient;
use jobsync_core::config::{DEFAULT_MANIFEST, DEFAULT_TEMPLATE};
use jobsync_sync::{run_create, Action, CreateOptions, CreateSummary, RecordReport, RecordStatus};

use super::{fail_mark, ok_mark, GlobalArgs};

/// Arguments for `jobsync create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Package manifest (JSON, or YAML for `.yaml`/`.yml`).
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Job configuration template.
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Render and probe, but push nothing.
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<ExitCode> {
        let config = global.config(&self.manifest, &self.template)?;
        let client = JenkinsClient::new(&config.orchestrator);
        tracing::debug!(orchestrator = ?config.orchestrator, "starting create");

        let options = CreateOptions { dry_run: self.dry_run };
        let summary = run_create(&config, &client, options, |report| {
            println!("{}", progress_line(report))
        })
        .with_context(|| format!("create failed for manifest {}", config.manifest_path.display()))?;

        println!("{}", summary_line(&summary, self.dry_run));
        Ok(if summary.failed() > 0 {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }
}

fn progress_line(report: &RecordReport) -> String {
    let name = &report.name;
    match (&report.status, report.action) {
        (RecordStatus::Applied, Some(Action::Create)) => format!("{} {name}: created", ok_mark()),
        (RecordStatus::Applied, _) => format!("{} {name}: updated", ok_mark()),
        (RecordStatus::Planned, Some(action)) => format!("{} {name}: would {action}", ok_mark()),
        (RecordStatus::Planned, None) => format!("{} {name}: planned", ok_mark()),
        (RecordStatus::Rejected { status }, Some(action)) => {
            format!("{} {name}: {action} rejected with HTTP {status}", fail_mark())
        }
        (RecordStatus::Rejected { status }, None) => {
            format!("{} {name}: existence check rejected with HTTP {status}", fail_mark())
        }
        (RecordStatus::Failed { reason }, _) => format!("{} {name}: {reason}", fail_mark()),
    }
}

fn summary_line(summary: &CreateSummary, dry_run: bool) -> String {
    if dry_run {
        format!(
            "[dry-run] {} planned, {} failed",
            summary.planned(),
            summary.failed()
        )
    } else {
        format!(
            "{} created, {} updated, {} failed",
            summary.created(),
            summary.updated(),
            summary.failed()
        )
    }
}
