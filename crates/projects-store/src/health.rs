//! Per-project health summary

use crate::git::Git;
use crate::process::CommandRunner;
use crate::types::Project;
use serde::Serialize;
use tracing::debug;

/// Git and file integrity state of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectHealth {
    pub slug: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub folder: String,
    pub title: String,
    pub status: String,
    pub has_git: bool,
    pub has_remote: bool,
    pub uncommitted: bool,
    pub has_project_md: bool,
}

/// Inspect a project's repository state
///
/// Remote and uncommitted checks only run when the directory is a
/// repository; a failing status check counts as clean.
pub fn check<R: CommandRunner>(project: &Project, git: &Git<R>) -> ProjectHealth {
    let dir = &project.directory;
    let has_git = git.is_repo(dir);

    let (has_remote, uncommitted) = if has_git {
        let uncommitted = git.has_uncommitted(dir).unwrap_or_else(|e| {
            debug!("git status failed in {}: {}", dir, e);
            false
        });
        (git.has_remote(dir), uncommitted)
    } else {
        (false, false)
    };

    ProjectHealth {
        slug: project.metadata.slug.clone(),
        folder: project.folder.clone(),
        title: project.metadata.title.clone(),
        status: project.metadata.status.clone(),
        has_git,
        has_remote,
        uncommitted,
        has_project_md: project.primary_file().is_file(),
    }
}
