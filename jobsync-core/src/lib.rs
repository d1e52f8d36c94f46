//! jobsync core library: domain types, manifest loading, run configuration.
//!
//! - [`types`]: [`JobName`] and [`PackageDefinition`]
//! - [`manifest`]: load the package manifest (JSON or YAML)
//! - [`config`]: immutable [`Config`] built once at startup
//! - [`error`]: [`ManifestError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod manifest;
pub mod types;

pub use config::{Config, OrchestratorConfig};
pub use error::{ConfigError, ManifestError};
pub use manifest::Manifest;
pub use types::{JobName, PackageDefinition};
