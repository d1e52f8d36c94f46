//! Error types for jobsync-sync.
//!
//! Only run-level failures live here. Per-record and per-branch problems are
//! reported in [`RecordStatus`](crate::RecordStatus) and
//! [`TriggerStatus`](crate::TriggerStatus) and never abort a run.

use std::path::PathBuf;

use thiserror::Error;

use jobsync_client::ClientError;
use jobsync_core::ManifestError;
use jobsync_renderer::TemplateError;

/// Fatal errors for a `create` or `build` run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// A call the whole run depends on (the job listing) failed.
    #[error("orchestrator error: {0}")]
    Client(#[from] ClientError),

    /// The job listing was answered with an error status.
    #[error("job listing failed with HTTP {status}")]
    Listing { status: u16 },

    /// An I/O error in the working directory, with annotated path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
