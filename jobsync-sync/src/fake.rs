//! Scripted in-memory [`Orchestrator`] for unit tests.

use std::cell::RefCell;

use jobsync_client::{ClientError, Orchestrator, Reply};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<String>,
}

type Responder = Box<dyn Fn(&'static str, &str) -> Result<Reply, ClientError>>;

pub(crate) struct ScriptedOrchestrator {
    respond: Responder,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedOrchestrator {
    pub fn new(respond: impl Fn(&'static str, &str) -> Result<Reply, ClientError> + 'static) -> Self {
        ScriptedOrchestrator {
            respond: Box::new(respond),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<&str>) -> Result<Reply, ClientError> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.map(str::to_string),
        });
        (self.respond)(method, path)
    }
}

impl Orchestrator for ScriptedOrchestrator {
    fn get(&self, path: &str) -> Result<Reply, ClientError> {
        self.record("GET", path, None)
    }

    fn post(&self, path: &str) -> Result<Reply, ClientError> {
        self.record("POST", path, None)
    }

    fn push(&self, path: &str, content: &str) -> Result<Reply, ClientError> {
        self.record("PUSH", path, Some(content))
    }
}

pub(crate) fn refused(method: &'static str, path: &str) -> ClientError {
    ClientError::Transport {
        method,
        path: path.to_string(),
        reason: "Connection Failed: Connect error".to_string(),
    }
}
