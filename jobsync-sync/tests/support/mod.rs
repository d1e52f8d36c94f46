//! Stateful in-memory orchestrator that behaves like Jenkins for the endpoints
//! jobsync uses.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use jobsync_client::{ClientError, Orchestrator, Reply};
use jobsync_core::{Config, OrchestratorConfig};

pub const TEMPLATE: &str = include_str!("../../../jobTemplate.xml");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<String>,
}

#[derive(Default)]
pub struct FakeJenkins {
    jobs: RefCell<BTreeMap<String, String>>,
    branches: BTreeMap<String, BTreeSet<String>>,
    unreachable: BTreeSet<String>,
    calls: RefCell<Vec<Call>>,
}

impl FakeJenkins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-existing job with the given branch sub-jobs.
    pub fn with_job(mut self, name: &str, branches: &[&str]) -> Self {
        self.jobs.get_mut().insert(name.to_string(), String::new());
        self.branches
            .insert(name.to_string(), branches.iter().map(|b| b.to_string()).collect());
        self
    }

    /// Every call mentioning `name` fails at the transport level.
    pub fn unreachable_for(mut self, name: &str) -> Self {
        self.unreachable.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn config_of(&self, name: &str) -> Option<String> {
        self.jobs.borrow().get(name).cloned()
    }

    fn handle(&self, method: &'static str, path: &str, body: Option<&str>) -> Result<Reply, ClientError> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.map(str::to_string),
        });
        if self.unreachable.iter().any(|n| path.contains(n.as_str())) {
            return Err(ClientError::Transport {
                method,
                path: path.to_string(),
                reason: "Connection Failed".to_string(),
            });
        }

        if let Some(name) = path.strip_prefix("/checkJobName?value=") {
            let body = if self.jobs.borrow().contains_key(name) {
                format!("<div class=error>A job already exists with the name ‘{name}’</div>")
            } else {
                "<div/>".to_string()
            };
            return Ok(Reply::new(200, body));
        }
        if let Some(name) = path.strip_prefix("/createItem?name=") {
            let mut jobs = self.jobs.borrow_mut();
            if jobs.contains_key(name) {
                return Ok(Reply::new(400, "A job already exists"));
            }
            jobs.insert(name.to_string(), body.unwrap_or_default().to_string());
            return Ok(Reply::new(200, ""));
        }
        if path == "/api/xml?tree=jobs[name]" {
            let listing: String = self
                .jobs
                .borrow()
                .keys()
                .map(|n| format!("<job><name>{n}</name></job>"))
                .collect();
            return Ok(Reply::new(200, format!("<hudson>{listing}</hudson>")));
        }
        if let Some(rest) = path.strip_prefix("/job/") {
            let (job, tail) = rest.split_once('/').unwrap_or((rest, ""));
            if !self.jobs.borrow().contains_key(job) {
                return Ok(Reply::new(404, "Not Found"));
            }
            if tail == "config.xml" {
                self.jobs
                    .borrow_mut()
                    .insert(job.to_string(), body.unwrap_or_default().to_string());
                return Ok(Reply::new(200, ""));
            }
            if let Some(branch) = tail.strip_prefix("job/").and_then(|t| t.strip_suffix("/build")) {
                let exists = self.branches.get(job).is_some_and(|b| b.contains(branch));
                return Ok(if exists { Reply::new(201, "") } else { Reply::new(404, "Not Found") });
            }
        }
        Ok(Reply::new(404, "Not Found"))
    }
}

impl Orchestrator for FakeJenkins {
    fn get(&self, path: &str) -> Result<Reply, ClientError> {
        self.handle("GET", path, None)
    }

    fn post(&self, path: &str) -> Result<Reply, ClientError> {
        self.handle("POST", path, None)
    }

    fn push(&self, path: &str, content: &str) -> Result<Reply, ClientError> {
        self.handle("PUSH", path, Some(content))
    }
}

/// Config rooted in `dir` with the bundled template and the given manifest.
pub fn config_in(dir: &Path, manifest_json: &str) -> Config {
    let manifest_path = dir.join("jobs.json");
    let template_path = dir.join("jobTemplate.xml");
    std::fs::write(&manifest_path, manifest_json).expect("write manifest");
    std::fs::write(&template_path, TEMPLATE).expect("write template");
    Config {
        orchestrator: OrchestratorConfig::new("http://ci.local", "admin", "secret").expect("config"),
        work_dir: dir.join("build"),
        manifest_path,
        template_path,
    }
}

pub fn manifest_of(names: &[&str]) -> String {
    let records: Vec<String> = names
        .iter()
        .map(|n| {
            format!(
                r#"{{"name":"{n}","description":"{n} library","gitUrl":"https://x/{n}.git","branchRegex":".*","jenkinsfilePath":"Jenkinsfile"}}"#
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

pub fn rendered_path(config: &Config, name: &str) -> PathBuf {
    config.work_dir.join(format!("{name}.xml"))
}
