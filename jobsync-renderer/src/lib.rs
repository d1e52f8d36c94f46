//! # jobsync-renderer
//!
//! Renders per-package job configurations from a Jenkins multibranch pipeline
//! `config.xml` template by replacing exactly four element values: the project
//! description, the git remote URL, the branch-name regex filter and the
//! Jenkinsfile path. Everything else in the template is copied byte for byte.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use jobsync_core::PackageDefinition;
//! use jobsync_renderer::JobTemplate;
//!
//! fn render_one(def: &PackageDefinition) -> Result<(), jobsync_renderer::TemplateError> {
//!     let template = JobTemplate::load(Path::new("jobTemplate.xml"))?;
//!     let rendered = template.render_for(def, Path::new("build"));
//!     println!("{}: {} bytes", rendered.path.display(), rendered.content.len());
//!     Ok(())
//! }
//! ```

mod engine;
pub mod error;
pub mod field;
pub mod template;

pub use error::TemplateError;
pub use field::TemplateField;
pub use template::{JobTemplate, RenderedConfig};
