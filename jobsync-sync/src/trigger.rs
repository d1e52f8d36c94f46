//! Build triggering for every multibranch job.
//!
//! By default each job gets one `build` POST per guessed branch in
//! [`GUESSED_BRANCHES`]; a 404 simply means that branch does not exist there.
//! With [`BranchSelection::Discovered`] the job's branch sub-jobs are listed
//! first and exactly those are triggered.

use jobsync_client::{api, parse_job_names, Orchestrator, Outcome};

use crate::error::SyncError;

/// Branch names tried on every job when branches are not discovered.
pub const GUESSED_BRANCHES: [&str; 3] = ["master", "main", "develop"];

/// How the branches to trigger are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchSelection {
    /// Try every name in [`GUESSED_BRANCHES`].
    #[default]
    Guessed,
    /// List the job's branch sub-jobs and trigger each.
    Discovered,
}

/// Result of one build POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerStatus {
    Triggered,
    /// 404: no such branch on this job.
    Missing,
    Rejected { status: u16 },
    Failed { reason: String },
}

impl TriggerStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, TriggerStatus::Rejected { .. } | TriggerStatus::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerReport {
    pub branch: String,
    pub status: TriggerStatus,
}

/// Everything that happened for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub job: String,
    /// Set when branch discovery failed; `triggers` is then empty.
    pub discovery_error: Option<String>,
    pub triggers: Vec<TriggerReport>,
}

/// Names of all top-level jobs, in the orchestrator's order.
pub fn list_jobs<O: Orchestrator>(client: &O) -> Result<Vec<String>, SyncError> {
    let reply = client.get(&api::job_listing())?;
    if !reply.is_success() {
        return Err(SyncError::Listing { status: reply.status });
    }
    Ok(parse_job_names(&reply.body)?)
}

/// Branches to trigger for `job`.
///
/// A 404 on discovery means `job` is not a multibranch job and has no branches.
pub fn branches_for<O: Orchestrator>(
    client: &O,
    job: &str,
    selection: BranchSelection,
) -> Result<Vec<String>, String> {
    match selection {
        BranchSelection::Guessed => Ok(GUESSED_BRANCHES.iter().map(|b| b.to_string()).collect()),
        BranchSelection::Discovered => {
            let reply = client.get(&api::branch_listing(job)).map_err(|e| e.to_string())?;
            match reply.outcome() {
                Outcome::Success => parse_job_names(&reply.body).map_err(|e| e.to_string()),
                Outcome::NotFound => Ok(Vec::new()),
                Outcome::Failed(status) => Err(format!("branch listing failed with HTTP {status}")),
            }
        }
    }
}

/// Trigger one branch of one job.
pub fn trigger_branch<O: Orchestrator>(client: &O, job: &str, branch: &str) -> TriggerStatus {
    match client.post(&api::branch_build(job, branch)) {
        Ok(reply) => match reply.outcome() {
            Outcome::Success => {
                tracing::info!(job, branch, "build triggered");
                TriggerStatus::Triggered
            }
            Outcome::NotFound => {
                tracing::debug!(job, branch, "no such branch");
                TriggerStatus::Missing
            }
            Outcome::Failed(status) => {
                tracing::warn!(job, branch, status, "build trigger rejected");
                TriggerStatus::Rejected { status }
            }
        },
        Err(err) => {
            tracing::warn!(job, branch, error = %err, "build trigger failed");
            TriggerStatus::Failed { reason: err.to_string() }
        }
    }
}

/// Resolve branches for `job` and trigger each of them.
pub fn trigger_job<O: Orchestrator>(client: &O, job: &str, selection: BranchSelection) -> JobReport {
    let branches = match branches_for(client, job, selection) {
        Ok(branches) => branches,
        Err(reason) => {
            tracing::warn!(job, reason = %reason, "branch discovery failed");
            return JobReport {
                job: job.to_string(),
                discovery_error: Some(reason),
                triggers: Vec::new(),
            };
        }
    };

    let triggers = branches
        .into_iter()
        .map(|branch| {
            let status = trigger_branch(client, job, &branch);
            TriggerReport { branch, status }
        })
        .collect();

    JobReport {
        job: job.to_string(),
        discovery_error: None,
        triggers,
    }
}
