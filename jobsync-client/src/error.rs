//! Error types for jobsync-client.

use thiserror::Error;

/// All errors that can arise from orchestrator calls.
///
/// HTTP error statuses are not errors: they come back as a
/// [`Reply`](crate::Reply) for the caller to classify.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, TLS failure and the like.
    ///
    /// `reason` never contains the request URL, which carries credentials.
    #[error("transport error on {method} {path}: {reason}")]
    Transport {
        method: &'static str,
        path: String,
        reason: String,
    },

    /// The response body could not be read.
    #[error("failed to read response body of {method} {path}: {source}")]
    Body {
        method: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A job listing response was not the expected XML document.
    #[error("malformed job listing at byte {position}: {source}")]
    Listing {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },
}
