//! Run entrypoints for the two modes.
//!
//! - [`run_create`]: manifest → render → write → reconcile, record by record.
//! - [`run_build`]: list jobs → trigger branches, job by job.
//!
//! Both call back once per record/job as it completes so the caller can print
//! progress, then return the full summary.

use std::path::PathBuf;

use jobsync_client::Orchestrator;
use jobsync_core::{Config, Manifest};
use jobsync_renderer::JobTemplate;

use crate::error::{io_err, SyncError};
use crate::reconcile::{self, Action, RecordReport, RecordStatus};
use crate::trigger::{self, BranchSelection, JobReport, TriggerStatus};
use crate::writer;

/// Options for a `create` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Render and probe, but push nothing.
    pub dry_run: bool,
}

/// Outcome of a `create` run.
#[derive(Debug, Clone, Default)]
pub struct CreateSummary {
    pub records: Vec<RecordReport>,
}

impl CreateSummary {
    fn count(&self, action: Action, status: &RecordStatus) -> usize {
        self.records
            .iter()
            .filter(|r| r.action == Some(action) && &r.status == status)
            .count()
    }

    pub fn created(&self) -> usize {
        self.count(Action::Create, &RecordStatus::Applied)
    }

    pub fn updated(&self) -> usize {
        self.count(Action::Update, &RecordStatus::Applied)
    }

    pub fn planned(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == RecordStatus::Planned)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.records.iter().filter(|r| r.status.is_failure()).count()
    }
}

/// Outcome of a `build` run.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub jobs: Vec<JobReport>,
}

impl BuildSummary {
    fn count(&self, pred: impl Fn(&TriggerStatus) -> bool) -> usize {
        self.jobs
            .iter()
            .flat_map(|j| j.triggers.iter())
            .filter(|t| pred(&t.status))
            .count()
    }

    pub fn triggered(&self) -> usize {
        self.count(|s| *s == TriggerStatus::Triggered)
    }

    pub fn missing(&self) -> usize {
        self.count(|s| *s == TriggerStatus::Missing)
    }

    /// Failed triggers plus jobs whose branch discovery failed.
    pub fn failed(&self) -> usize {
        self.count(TriggerStatus::is_failure)
            + self.jobs.iter().filter(|j| j.discovery_error.is_some()).count()
    }
}

/// Reconcile every manifest record against the orchestrator.
///
/// Manifest, template and working-directory errors abort the run; per-record
/// orchestrator problems are reported in the summary.
pub fn run_create<O: Orchestrator>(
    config: &Config,
    client: &O,
    options: CreateOptions,
    mut on_record: impl FnMut(&RecordReport),
) -> Result<CreateSummary, SyncError> {
    let manifest = Manifest::load_at(&config.manifest_path)?;
    let template = JobTemplate::load(&config.template_path)?;
    std::fs::create_dir_all(&config.work_dir).map_err(|e| io_err(&config.work_dir, e))?;

    tracing::info!(
        records = manifest.len(),
        manifest = %config.manifest_path.display(),
        dry_run = options.dry_run,
        "reconciling manifest"
    );

    let mut summary = CreateSummary::default();
    for def in &manifest {
        if !def.name.is_file_name() {
            tracing::warn!(job = %def.name, "job name is not a valid file name, skipping");
            let report = RecordReport {
                name: def.name.clone(),
                rendered: PathBuf::new(),
                action: None,
                status: RecordStatus::Failed {
                    reason: "job name must not contain path separators".to_string(),
                },
            };
            on_record(&report);
            summary.records.push(report);
            continue;
        }
        let rendered = template.render_for(def, &config.work_dir);
        writer::write_rendered(&rendered)?;
        let report = reconcile::reconcile_record(client, &def.name, &rendered, options.dry_run);
        on_record(&report);
        summary.records.push(report);
    }
    Ok(summary)
}

/// Trigger builds for every job the orchestrator lists.
///
/// Only the job listing itself is fatal.
pub fn run_build<O: Orchestrator>(
    client: &O,
    selection: BranchSelection,
    mut on_job: impl FnMut(&JobReport),
) -> Result<BuildSummary, SyncError> {
    let jobs = trigger::list_jobs(client)?;
    tracing::info!(jobs = jobs.len(), ?selection, "triggering builds");

    let mut summary = BuildSummary::default();
    for job in &jobs {
        let report = trigger::trigger_job(client, job, selection);
        on_job(&report);
        summary.jobs.push(report);
    }
    Ok(summary)
}
