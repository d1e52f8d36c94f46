//! Package manifest loading.
//!
//! The manifest is an ordered list of [`PackageDefinition`] records. Files
//! ending in `.yaml` or `.yml` are parsed as YAML, everything else as JSON:
//!
//! ```json
//! [
//!   {
//!     "name": "lib-a",
//!     "description": "desc",
//!     "gitUrl": "https://x/lib-a.git",
//!     "branchRegex": "^(main|release-.*)$",
//!     "jenkinsfilePath": "ci/Jenkinsfile"
//!   }
//! ]
//! ```

use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::types::PackageDefinition;

/// Serialization format of a manifest file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ManifestFormat::Yaml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Package definitions in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
    packages: Vec<PackageDefinition>,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    ///
    /// Returns `ManifestError::NotFound` if absent, `Json`/`Yaml` (with path and
    /// line context) if malformed.
    pub fn load_at(path: &Path) -> Result<Self, ManifestError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::NotFound { path: path.to_path_buf() }
            } else {
                ManifestError::Io { path: path.to_path_buf(), source: e }
            }
        })?;
        Self::parse(path, &contents, ManifestFormat::from_path(path))
    }

    /// Parse manifest `contents`; `path` is only used for error context.
    pub fn parse(
        path: &Path,
        contents: &str,
        format: ManifestFormat,
    ) -> Result<Self, ManifestError> {
        let packages = match format {
            ManifestFormat::Json => serde_json::from_str(contents).map_err(|e| {
                ManifestError::Json { path: path.to_path_buf(), source: e }
            })?,
            ManifestFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| {
                ManifestError::Yaml { path: path.to_path_buf(), source: e }
            })?,
        };
        Ok(Manifest { path: path.to_path_buf(), packages })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageDefinition> {
        self.packages.iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a PackageDefinition;
    type IntoIter = std::slice::Iter<'a, PackageDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Manifest {
    type Item = PackageDefinition;
    type IntoIter = std::vec::IntoIter<PackageDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(ManifestFormat::from_path(Path::new("jobs.json")), ManifestFormat::Json);
        assert_eq!(ManifestFormat::from_path(Path::new("jobs.yaml")), ManifestFormat::Yaml);
        assert_eq!(ManifestFormat::from_path(Path::new("jobs.YML")), ManifestFormat::Yaml);
        assert_eq!(ManifestFormat::from_path(Path::new("jobs")), ManifestFormat::Json);
    }

    #[test]
    fn parse_preserves_order() {
        let json = r#"[{"name":"c"},{"name":"a"},{"name":"b"}]"#;
        let manifest = Manifest::parse(Path::new("jobs.json"), json, ManifestFormat::Json).unwrap();
        let names: Vec<_> = manifest.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn top_level_object_is_rejected() {
        let err = Manifest::parse(Path::new("jobs.json"), r#"{"name":"x"}"#, ManifestFormat::Json)
            .unwrap_err();
        assert!(matches!(err, ManifestError::Json { .. }));
    }
}
