//! Size-based rotation of the run log.
//!
//! `jobsync.log` is shifted to `jobsync.log.1` once it reaches 10 MiB; older
//! copies move up by one and anything past `.5` is dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Size at which the run log is rotated (10 MiB).
pub const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated copies kept next to the live log.
pub const MAX_ROTATED_FILES: usize = 5;

/// Rotate `log_path` when it is at least `max_bytes` long.
///
/// Returns `true` when a rotation happened. A missing log is not an error.
pub fn rotate_if_needed(log_path: &Path, max_bytes: u64, max_files: usize) -> io::Result<bool> {
    let size = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    if size < max_bytes || max_files == 0 {
        return Ok(false);
    }

    let oldest = numbered_path(log_path, max_files);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for n in (1..max_files).rev() {
        let src = numbered_path(log_path, n);
        if src.exists() {
            fs::rename(&src, numbered_path(log_path, n + 1))?;
        }
    }
    fs::rename(log_path, numbered_path(log_path, 1))?;
    Ok(true)
}

/// `jobsync.log` → `jobsync.log.<n>`.
fn numbered_path(base: &Path, n: usize) -> PathBuf {
    let mut name = base.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{n}"));
    base.with_file_name(name)
}
