//! Atomic writes of rendered configurations.
//!
//! Content goes to `<path>.jobsync.tmp` first and is renamed over the final
//! path, so a configuration file is either the previous run's or this run's,
//! never half of each.

use std::path::{Path, PathBuf};

use jobsync_renderer::RenderedConfig;

use crate::error::{io_err, SyncError};

/// Write `rendered.content` to `rendered.path`, creating parent directories.
pub fn write_rendered(rendered: &RenderedConfig) -> Result<(), SyncError> {
    let tmp = PathBuf::from(format!("{}.jobsync.tmp", rendered.path.display()));
    atomic_write_with_tmp(&rendered.path, &rendered.content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::debug!(path = %path.display(), "wrote rendered configuration");
    Ok(())
}
