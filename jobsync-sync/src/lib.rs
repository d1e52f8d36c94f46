//! # jobsync-sync
//!
//! Reconciliation and build triggering.
//!
//! Call [`run_create`] to render every manifest record and create or update
//! its job, or [`run_build`] to trigger builds for every listed job.

pub mod error;
pub mod pipeline;
pub mod reconcile;
pub mod trigger;
pub mod writer;

#[cfg(test)]
mod fake;

pub use error::SyncError;
pub use pipeline::{run_build, run_create, BuildSummary, CreateOptions, CreateSummary};
pub use reconcile::{Action, RecordReport, RecordStatus};
pub use trigger::{BranchSelection, JobReport, TriggerReport, TriggerStatus, GUESSED_BRANCHES};
