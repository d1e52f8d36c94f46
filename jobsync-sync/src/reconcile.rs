//! Create-or-update decision per package.
//!
//! 1. Probe `checkJobName?value=<name>`.
//! 2. Body mentions "already exists" → push to `job/<name>/config.xml`;
//!    otherwise push to `createItem?name=<name>`.
//!
//! The probe body is the orchestrator's only existence signal, so the decision
//! is a substring match. The push reply is classified by status and reported;
//! nothing here aborts the run.

use std::fmt;
use std::path::PathBuf;

use jobsync_client::{api, Orchestrator, Outcome, Reply};
use jobsync_core::JobName;
use jobsync_renderer::RenderedConfig;

/// Which push a record needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
}

impl Action {
    /// Decide from the `checkJobName` reply body.
    pub fn from_probe(probe: &Reply) -> Self {
        if probe.body.contains(api::ALREADY_EXISTS) {
            Action::Update
        } else {
            Action::Create
        }
    }

    /// Push target for `name`.
    pub fn path(&self, name: &JobName) -> String {
        match self {
            Action::Create => api::create_item(name.as_str()),
            Action::Update => api::job_config(name.as_str()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::Update => write!(f, "update"),
        }
    }
}

/// Result of reconciling one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    /// The push was accepted.
    Applied,
    /// Dry run: the push was decided but not sent.
    Planned,
    /// The probe or the push was answered with an error status.
    Rejected { status: u16 },
    /// The probe or the push never got an answer.
    Failed { reason: String },
}

impl RecordStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, RecordStatus::Rejected { .. } | RecordStatus::Failed { .. })
    }
}

/// Outcome of one manifest record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub name: JobName,
    /// Where the rendered configuration was written.
    pub rendered: PathBuf,
    /// `None` when the probe failed and no decision was made.
    pub action: Option<Action>,
    pub status: RecordStatus,
}

/// Probe, decide and push the already-rendered configuration for `name`.
pub fn reconcile_record<O: Orchestrator>(
    client: &O,
    name: &JobName,
    rendered: &RenderedConfig,
    dry_run: bool,
) -> RecordReport {
    let report = |action, status| RecordReport {
        name: name.clone(),
        rendered: rendered.path.clone(),
        action,
        status,
    };

    let probe = match client.get(&api::check_job_name(name.as_str())) {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(job = %name, error = %err, "existence probe failed");
            return report(None, RecordStatus::Failed { reason: err.to_string() });
        }
    };
    if let Outcome::NotFound | Outcome::Failed(_) = probe.outcome() {
        tracing::warn!(job = %name, status = probe.status, "existence probe rejected");
        return report(None, RecordStatus::Rejected { status: probe.status });
    }

    let action = Action::from_probe(&probe);
    if dry_run {
        tracing::info!(job = %name, %action, "[dry-run] would push configuration");
        return report(Some(action), RecordStatus::Planned);
    }

    let status = match client.push(&action.path(name), &rendered.content) {
        Ok(reply) => match reply.outcome() {
            Outcome::Success => {
                tracing::info!(job = %name, %action, status = reply.status, "configuration pushed");
                RecordStatus::Applied
            }
            Outcome::NotFound | Outcome::Failed(_) => {
                tracing::warn!(job = %name, %action, status = reply.status, "configuration rejected");
                RecordStatus::Rejected { status: reply.status }
            }
        },
        Err(err) => {
            tracing::warn!(job = %name, %action, error = %err, "configuration push failed");
            RecordStatus::Failed { reason: err.to_string() }
        }
    };
    report(Some(action), status)
}
