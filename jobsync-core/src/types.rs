//! Domain types shared by every jobsync crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a job on the orchestrator; one per package definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobName(pub String);

impl JobName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the name can be used as a file name inside the working
    /// directory: no `/`, `\` or NUL.
    pub fn is_file_name(&self) -> bool {
        !self.0.contains(['/', '\\', '\0'])
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for JobName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// One manifest entry.
///
/// Missing keys deserialize to empty strings and are carried through to the
/// rendered configuration as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDefinition {
    pub name: JobName,
    pub description: String,
    pub git_url: String,
    pub branch_regex: String,
    pub jenkinsfile_path: String,
}
