//! Raw HTTP replies and their classification.

/// How a reply should be treated by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx or 3xx.
    Success,
    /// 404: the job or branch does not exist.
    NotFound,
    /// Any other status.
    Failed(u16),
}

/// Status and body of one HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Reply { status, body: body.into() }
    }

    pub fn outcome(&self) -> Outcome {
        match self.status {
            200..=399 => Outcome::Success,
            404 => Outcome::NotFound,
            other => Outcome::Failed(other),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome() == Outcome::Success
    }
}
