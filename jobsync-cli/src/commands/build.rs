//! `jobsync build`: trigger builds on every listed job.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use jobsync_client::JenkinsClient;
use jobsync_sync::{run_build, BranchSelection, BuildSummary, JobReport, TriggerStatus};

use super::{fail_mark, ok_mark, skip_mark, GlobalArgs};

/// Arguments for `jobsync build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// List each job's branches instead of trying master, main and develop.
    #[arg(long)]
    pub discover_branches: bool,
}

impl BuildArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<ExitCode> {
        let orchestrator = global.orchestrator()?;
        let client = JenkinsClient::new(&orchestrator);
        let selection = if self.discover_branches {
            BranchSelection::Discovered
        } else {
            BranchSelection::Guessed
        };

        let summary = run_build(&client, selection, |job| {
            for line in job_lines(job) {
                println!("{line}");
            }
        })
        .with_context(|| format!("build failed against {}", orchestrator.url()))?;

        println!("{}", summary_line(&summary));
        Ok(if summary.failed() > 0 {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }
}

fn job_lines(report: &JobReport) -> Vec<String> {
    let job = &report.job;
    if let Some(reason) = &report.discovery_error {
        return vec![format!("{} {job}: branch discovery failed: {reason}", fail_mark())];
    }

    let mut lines = Vec::new();
    let mut triggered = Vec::new();
    for trigger in &report.triggers {
        match &trigger.status {
            TriggerStatus::Triggered => triggered.push(trigger.branch.as_str()),
            TriggerStatus::Missing => {}
            TriggerStatus::Rejected { status } => lines.push(format!(
                "{} {job}/{}: rejected with HTTP {status}",
                fail_mark(),
                trigger.branch
            )),
            TriggerStatus::Failed { reason } => {
                lines.push(format!("{} {job}/{}: {reason}", fail_mark(), trigger.branch))
            }
        }
    }

    let head = if triggered.is_empty() {
        format!("{} {job}: no branch triggered", skip_mark())
    } else {
        format!("{} {job}: triggered {}", ok_mark(), triggered.join(", "))
    };
    lines.insert(0, head);
    lines
}

fn summary_line(summary: &BuildSummary) -> String {
    format!(
        "{} triggered, {} missing, {} failed",
        summary.triggered(),
        summary.missing(),
        summary.failed()
    )
}
