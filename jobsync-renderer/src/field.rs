//! The four substitutable fields of a multibranch pipeline job configuration.
//!
//! | Field        | Element path (below the root)                                                        |
//! |--------------|--------------------------------------------------------------------------------------|
//! | Description  | `description`                                                                        |
//! | RemoteUrl    | `sources/data/jenkins.branch.BranchSource/source/remote`                             |
//! | BranchFilter | `sources/data/jenkins.branch.BranchSource/source/traits/<RegexSCMHeadFilterTrait>/regex` |
//! | ScriptPath   | `factory/scriptPath`                                                                 |

use std::fmt;

use jobsync_core::PackageDefinition;

/// Root element of a multibranch pipeline project's `config.xml`.
pub const PROJECT_ROOT: &str = "org.jenkinsci.plugins.workflow.multibranch.WorkflowMultiBranchProject";

const BRANCH_SOURCE: &str = "jenkins.branch.BranchSource";
const REGEX_FILTER_TRAIT: &str = "jenkins.scm.impl.trait.RegexSCMHeadFilterTrait";

/// A value in the job configuration that is replaced per package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateField {
    Description,
    RemoteUrl,
    BranchFilter,
    ScriptPath,
}

impl TemplateField {
    /// All fields in a stable order.
    pub fn all() -> &'static [TemplateField] {
        &[
            TemplateField::Description,
            TemplateField::RemoteUrl,
            TemplateField::BranchFilter,
            TemplateField::ScriptPath,
        ]
    }

    /// Element names from the document root down to the field's element.
    pub fn path(&self) -> &'static [&'static str] {
        match self {
            TemplateField::Description => &[PROJECT_ROOT, "description"],
            TemplateField::RemoteUrl => {
                &[PROJECT_ROOT, "sources", "data", BRANCH_SOURCE, "source", "remote"]
            }
            TemplateField::BranchFilter => &[
                PROJECT_ROOT,
                "sources",
                "data",
                BRANCH_SOURCE,
                "source",
                "traits",
                REGEX_FILTER_TRAIT,
                "regex",
            ],
            TemplateField::ScriptPath => &[PROJECT_ROOT, "factory", "scriptPath"],
        }
    }

    /// `path()` joined with `/`, for messages.
    pub fn display_path(&self) -> String {
        self.path().join("/")
    }

    /// The package value that lands in this field.
    pub fn value<'a>(&self, def: &'a PackageDefinition) -> &'a str {
        match self {
            TemplateField::Description => &def.description,
            TemplateField::RemoteUrl => &def.git_url,
            TemplateField::BranchFilter => &def.branch_regex,
            TemplateField::ScriptPath => &def.jenkinsfile_path,
        }
    }
}

impl fmt::Display for TemplateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateField::Description => write!(f, "description"),
            TemplateField::RemoteUrl => write!(f, "remote URL"),
            TemplateField::BranchFilter => write!(f, "branch filter"),
            TemplateField::ScriptPath => write!(f, "script path"),
        }
    }
}
