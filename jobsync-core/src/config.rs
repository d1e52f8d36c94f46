//! Run configuration.
//!
//! A [`Config`] is built once at startup (CLI flags with environment fallbacks)
//! and handed by reference to every component. Nothing reads configuration from
//! ambient state after that point.

use std::fmt;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ConfigError;
use crate::types::JobName;

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_WORK_DIR: &str = "build";
pub const DEFAULT_MANIFEST: &str = "jobs.json";
pub const DEFAULT_TEMPLATE: &str = "jobTemplate.xml";
pub const LOG_FILE_NAME: &str = "jobsync.log";

/// Endpoint and credentials of the orchestrator.
///
/// The token is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    scheme: String,
    /// Host, optional port and optional path prefix, without trailing `/`.
    authority: String,
    username: String,
    token: String,
}

impl OrchestratorConfig {
    /// Validate `url` and pair it with credentials.
    ///
    /// `url` must be `http://` or `https://` with a host, and must not carry
    /// credentials of its own. A trailing `/` is dropped.
    pub fn new(
        url: &str,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let (scheme, rest) = url
            .split_once("://")
            .ok_or_else(|| ConfigError::UnsupportedScheme { url: url.to_string() })?;
        let scheme = scheme.to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::UnsupportedScheme { url: url.to_string() });
        }

        let authority = rest.trim_end_matches('/');
        let host = authority.split('/').next().unwrap_or_default();
        if host.contains('@') {
            return Err(ConfigError::EmbeddedCredentials);
        }
        if host.is_empty() || host.starts_with(':') {
            return Err(ConfigError::MissingHost { url: url.to_string() });
        }

        Ok(OrchestratorConfig {
            scheme,
            authority: authority.to_string(),
            username: username.into(),
            token: token.into(),
        })
    }

    /// Base URL without credentials, e.g. `http://localhost:8080`.
    pub fn url(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Authorization` header value for basic authentication, e.g.
    /// `Basic YWRtaW46c2VjcmV0`, or `None` when both user and token are empty.
    ///
    /// Credentials are encoded verbatim; never log the returned value.
    pub fn basic_auth(&self) -> Option<String> {
        if self.username.is_empty() && self.token.is_empty() {
            return None;
        }
        let credentials = format!("{}:{}", self.username, self.token);
        Some(format!("Basic {}", STANDARD.encode(credentials)))
    }
}

impl fmt::Debug for OrchestratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrchestratorConfig")
            .field("url", &self.url())
            .field("username", &self.username)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub orchestrator: OrchestratorConfig,
    /// Directory receiving rendered configurations and the run log.
    pub work_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub template_path: PathBuf,
}

/// `<work_dir>/<name>.xml`: pure, no I/O.
///
/// Callers check [`JobName::is_file_name`] first; a name with separators
/// would land outside `work_dir`.
pub fn rendered_path_at(work_dir: &Path, name: &JobName) -> PathBuf {
    work_dir.join(format!("{}.xml", name.0))
}

/// `<work_dir>/jobsync.log`: pure, no I/O.
pub fn log_path_at(work_dir: &Path) -> PathBuf {
    work_dir.join(LOG_FILE_NAME)
}
