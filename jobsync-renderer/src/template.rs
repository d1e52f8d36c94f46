//! [`JobTemplate`]: a validated job configuration template.

use std::path::{Path, PathBuf};

use jobsync_core::config::rendered_path_at;
use jobsync_core::PackageDefinition;

use crate::engine::{self, Span};
use crate::error::TemplateError;
use crate::field::TemplateField;

/// A configuration rendered for one package, not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfig {
    /// `<work_dir>/<name>.xml`.
    pub path: PathBuf,
    pub content: String,
}

/// Job configuration template with all four fields located.
///
/// Every field is located when the template is loaded, so a template that
/// would render only partially is rejected before any package is processed.
#[derive(Debug, Clone)]
pub struct JobTemplate {
    source: String,
    spans: Vec<(TemplateField, Span)>,
}

impl JobTemplate {
    /// Read and validate the template at `path`.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TemplateError::NotFound { path: path.to_path_buf() }
            } else {
                TemplateError::Io { path: path.to_path_buf(), source: e }
            }
        })?;
        let template = Self::parse(source)?;
        tracing::debug!(path = %path.display(), "loaded job template");
        Ok(template)
    }

    /// Validate an in-memory template.
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let spans = engine::locate(&source, TemplateField::all())?;
        Ok(JobTemplate { source, spans })
    }

    /// Raw template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Text the template currently holds for `field`.
    pub fn field_value(&self, field: TemplateField) -> &str {
        self.spans
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, span)| span.text.as_str())
            .unwrap_or_default()
    }

    /// Substitute the package's four values into the template.
    pub fn render(&self, def: &PackageDefinition) -> String {
        engine::splice(
            &self.source,
            self.spans.iter().map(|(field, span)| (span, field.value(def))),
        )
    }

    /// Render for `def` and pair the content with its output path in `work_dir`.
    pub fn render_for(&self, def: &PackageDefinition, work_dir: &Path) -> RenderedConfig {
        RenderedConfig {
            path: rendered_path_at(work_dir, &def.name),
            content: self.render(def),
        }
    }
}
