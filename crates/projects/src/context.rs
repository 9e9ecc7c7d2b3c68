//! Per-invocation runtime state shared by every command

use anyhow::Result;
use projects_core::{OutputMode, ProjectsConfig};
use projects_store::git::{Git, GitHub};
use projects_store::{FolderNamespace, Project, SystemRunner};
use serde::Serialize;

/// Resolved configuration, output mode, and folder scope
#[derive(Debug)]
pub struct RuntimeContext {
    pub config: ProjectsConfig,
    pub mode: OutputMode,
    /// Value of the global `--folder` flag
    pub folder: Option<String>,
}

impl RuntimeContext {
    pub fn new(config: ProjectsConfig, mode: OutputMode, folder: Option<String>) -> Self {
        Self {
            config,
            mode,
            folder: folder.filter(|f| !f.trim().is_empty()),
        }
    }

    pub fn folder_hint(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn namespace(&self) -> FolderNamespace<'_> {
        FolderNamespace::new(&self.config)
    }

    /// Find a project across the root and folders, honouring `--folder`
    pub fn find(&self, slug: &str) -> Result<Project> {
        Ok(self.namespace().find(slug, self.folder_hint())?)
    }

    pub fn git(&self) -> Git<SystemRunner> {
        Git::new(SystemRunner)
    }

    pub fn github(&self) -> GitHub<SystemRunner> {
        GitHub::new(SystemRunner)
    }

    pub fn is_json(&self) -> bool {
        self.mode.is_json()
    }

    pub fn is_interactive(&self) -> bool {
        self.mode.is_interactive()
    }

    /// Regenerate the top-level registry; failures are only logged
    pub fn refresh_registry(&self) {
        projects_store::refresh_registry(&self.config.projects_dir);
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
