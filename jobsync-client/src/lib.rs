//! # jobsync-client
//!
//! Thin blocking HTTP wrapper around the Jenkins endpoints jobsync uses.
//!
//! [`JenkinsClient`] implements [`Orchestrator`]: `get`, `post` and `push`
//! against a base URL fixed at construction. Replies carry their status and
//! body for every HTTP status ([`Reply::outcome`] classifies them); only
//! transport failures become [`ClientError`]s. The [`api`] module builds the
//! endpoint paths and [`listing`] decodes job-name listings.

pub mod api;
pub mod client;
pub mod error;
pub mod listing;
pub mod reply;

pub use client::{JenkinsClient, Orchestrator, XML_CONTENT_TYPE};
pub use error::ClientError;
pub use listing::parse_job_names;
pub use reply::{Outcome, Reply};
