//! Error types for jobsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading the package manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file did not exist at the given path.
    #[error("manifest not found at {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure other than a missing file.
    #[error("failed to read manifest at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error: includes line/column context from serde_json.
    #[error("failed to parse manifest at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parse error: includes line context from serde_yaml.
    #[error("failed to parse manifest at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The orchestrator URL is not an absolute `http://` or `https://` URL.
    #[error("orchestrator URL must start with http:// or https://, got '{url}'")]
    UnsupportedScheme { url: String },

    /// The orchestrator URL has a scheme but no host.
    #[error("orchestrator URL '{url}' has no host")]
    MissingHost { url: String },

    /// The orchestrator URL already carries credentials.
    #[error("orchestrator URL must not embed credentials; use --user/--token instead")]
    EmbeddedCredentials,
}
