//! Error types for jobsync-renderer.

use std::path::PathBuf;

use thiserror::Error;

use crate::field::TemplateField;

/// All errors that can arise while loading or rendering a job template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file did not exist at the given path.
    #[error("template not found at {path}")]
    NotFound { path: PathBuf },

    /// Filesystem error while reading the template.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The XML reader rejected the document.
    #[error("malformed template XML at byte {position}: {source}")]
    Malformed {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    /// The document ended with elements still open, or has no root element.
    #[error("template XML is truncated or empty ({open} element(s) left open)")]
    Truncated { open: usize },

    /// A target field's element path does not exist in the document.
    #[error("template has no {field} element at {path}")]
    MissingField { field: TemplateField, path: String },

    /// A target field's element path occurs more than once.
    #[error("template has more than one {field} element at {path}")]
    DuplicateField { field: TemplateField, path: String },

    /// A target field's element contains child elements instead of text.
    #[error("template {field} element at {path} must hold text, found child <{child}>")]
    NotALeaf {
        field: TemplateField,
        path: String,
        child: String,
    },
}
