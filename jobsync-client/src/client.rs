//! Blocking HTTP client for the orchestrator.

use jobsync_core::OrchestratorConfig;

use crate::error::ClientError;
use crate::reply::Reply;

/// The three calls the reconciler and build trigger need.
///
/// Implementations return a [`Reply`] for every HTTP status; only transport
/// failures are errors.
pub trait Orchestrator {
    /// Authenticated read.
    fn get(&self, path: &str) -> Result<Reply, ClientError>;

    /// Authenticated trigger with an empty body.
    fn post(&self, path: &str) -> Result<Reply, ClientError>;

    /// Authenticated upload of an XML document.
    fn push(&self, path: &str, content: &str) -> Result<Reply, ClientError>;
}

impl<T: Orchestrator + ?Sized> Orchestrator for &T {
    fn get(&self, path: &str) -> Result<Reply, ClientError> {
        (**self).get(path)
    }

    fn post(&self, path: &str) -> Result<Reply, ClientError> {
        (**self).post(path)
    }

    fn push(&self, path: &str, content: &str) -> Result<Reply, ClientError> {
        (**self).push(path, content)
    }
}

/// Content type of pushed job configurations.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// [`Orchestrator`] over HTTP with a basic-auth header on every request.
///
/// Redirects are not followed: a `302` after `createItem` is the success reply.
pub struct JenkinsClient {
    agent: ureq::Agent,
    /// `scheme://host[:port][/prefix]`, without credentials.
    base: String,
    /// Precomputed `Authorization` value; never logged.
    auth: Option<String>,
}

impl JenkinsClient {
    pub fn new(config: &OrchestratorConfig) -> Self {
        let agent = ureq::AgentBuilder::new().redirects(0).build();
        JenkinsClient {
            agent,
            base: config.url(),
            auth: config.basic_auth(),
        }
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let request = self.agent.request(method, &format!("{}{}", self.base, path));
        match &self.auth {
            Some(auth) => request.set("Authorization", auth),
            None => request,
        }
    }
}

impl Orchestrator for JenkinsClient {
    fn get(&self, path: &str) -> Result<Reply, ClientError> {
        finish("GET", path, self.request("GET", path).call())
    }

    fn post(&self, path: &str) -> Result<Reply, ClientError> {
        finish("POST", path, self.request("POST", path).call())
    }

    fn push(&self, path: &str, content: &str) -> Result<Reply, ClientError> {
        let result = self
            .request("POST", path)
            .set("Content-Type", XML_CONTENT_TYPE)
            .send_string(content);
        finish("POST", path, result)
    }
}

fn finish(
    method: &'static str,
    path: &str,
    result: Result<ureq::Response, ureq::Error>,
) -> Result<Reply, ClientError> {
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(ureq::Error::Transport(transport)) => {
            let reason = transport_reason(&transport);
            tracing::debug!(method, path, reason = %reason, "transport failure");
            return Err(ClientError::Transport {
                method,
                path: path.to_string(),
                reason,
            });
        }
    };

    let status = response.status();
    let body = response.into_string().map_err(|source| ClientError::Body {
        method,
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(method, path, status, bytes = body.len(), "orchestrator reply");
    Ok(Reply { status, body })
}

/// `Display` of a ureq transport error includes the URL; keep only kind and message.
fn transport_reason(transport: &ureq::Transport) -> String {
    match transport.message() {
        Some(message) => format!("{}: {message}", transport.kind()),
        None => transport.kind().to_string(),
    }
}
