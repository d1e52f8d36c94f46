//! Orchestrator API paths.
//!
//! Job and branch names are percent-encoded; a branch name that Jenkins already
//! stores encoded (`feature%2Fx`) is encoded again, as its URLs require.

/// Marker in the `checkJobName` reply body when the name is taken.
pub const ALREADY_EXISTS: &str = "already exists";

/// `GET`: is a job name available?
pub fn check_job_name(name: &str) -> String {
    format!("/checkJobName?value={}", urlencoding::encode(name))
}

/// `POST` with XML body: create a job.
pub fn create_item(name: &str) -> String {
    format!("/createItem?name={}", urlencoding::encode(name))
}

/// `POST` with XML body: replace a job's configuration.
pub fn job_config(name: &str) -> String {
    format!("/job/{}/config.xml", urlencoding::encode(name))
}

/// `GET`: names of all top-level jobs.
pub fn job_listing() -> String {
    "/api/xml?tree=jobs[name]".to_string()
}

/// `GET`: names of a multibranch job's branch sub-jobs.
pub fn branch_listing(job: &str) -> String {
    format!("/job/{}/api/xml?tree=jobs[name]", urlencoding::encode(job))
}

/// `POST`: trigger a build of one branch of a multibranch job.
pub fn branch_build(job: &str, branch: &str) -> String {
    format!(
        "/job/{}/job/{}/build",
        urlencoding::encode(job),
        urlencoding::encode(branch)
    )
}
