pub mod build;
pub mod create;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use jobsync_core::config::{log_path_at, DEFAULT_URL, DEFAULT_USERNAME, DEFAULT_WORK_DIR};
use jobsync_core::{Config, OrchestratorConfig};

/// Options shared by every mode.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Base URL of the Jenkins server.
    #[arg(long, global = true, env = "JENKINS_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// User for basic authentication.
    #[arg(long, global = true, env = "JENKINS_USER", default_value = DEFAULT_USERNAME)]
    pub user: String,

    /// API token or password for basic authentication.
    #[arg(long, global = true, env = "JENKINS_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Directory receiving rendered configurations and the run log.
    #[arg(long, global = true, default_value = DEFAULT_WORK_DIR)]
    pub work_dir: PathBuf,

    /// Do not append to the run log in the working directory.
    #[arg(long, global = true)]
    pub no_log_file: bool,
}

impl GlobalArgs {
    pub fn log_path(&self) -> PathBuf {
        log_path_at(&self.work_dir)
    }

    pub fn orchestrator(&self) -> Result<OrchestratorConfig> {
        OrchestratorConfig::new(&self.url, self.user.as_str(), self.token.as_str())
            .context("invalid orchestrator configuration")
    }

    /// Full run configuration for `create`.
    pub fn config(&self, manifest_path: &Path, template_path: &Path) -> Result<Config> {
        Ok(Config {
            orchestrator: self.orchestrator()?,
            work_dir: self.work_dir.clone(),
            manifest_path: manifest_path.to_path_buf(),
            template_path: template_path.to_path_buf(),
        })
    }
}

pub(crate) fn ok_mark() -> String {
    "✓".green().bold().to_string()
}

pub(crate) fn fail_mark() -> String {
    "✗".red().bold().to_string()
}

pub(crate) fn skip_mark() -> String {
    "-".dimmed().to_string()
}
