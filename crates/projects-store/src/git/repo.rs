//! Git repository operations

use crate::error::Result;
use crate::process::CommandRunner;
use camino::Utf8Path;
use tracing::info;

const GIT: &str = "git";

/// Git commands run in a project directory
#[derive(Debug, Clone, Default)]
pub struct Git<R> {
    runner: R,
}

impl<R: CommandRunner> Git<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn git(&self, dir: &Utf8Path, args: &[&str]) -> Result<String> {
        self.runner.run(dir, GIT, args)
    }

    /// Initialize a repository
    pub fn init(&self, dir: &Utf8Path) -> Result<()> {
        self.git(dir, &["init"])?;
        info!("Initialized git repository in {}", dir);
        Ok(())
    }

    /// Stage all changes
    pub fn add_all(&self, dir: &Utf8Path) -> Result<()> {
        self.git(dir, &["add", "-A"]).map(drop)
    }

    pub fn commit(&self, dir: &Utf8Path, message: &str) -> Result<()> {
        self.git(dir, &["commit", "-m", message])?;
        info!("Committed in {}: {}", dir, message);
        Ok(())
    }

    pub fn push(&self, dir: &Utf8Path) -> Result<()> {
        self.git(dir, &["push"]).map(drop)
    }

    /// Push and set the upstream branch
    pub fn push_set_upstream(&self, dir: &Utf8Path, remote: &str, branch: &str) -> Result<()> {
        self.git(dir, &["push", "-u", remote, branch]).map(drop)
    }

    /// Short status output
    pub fn status(&self, dir: &Utf8Path) -> Result<String> {
        self.git(dir, &["status", "--short"])
    }

    /// Whether `dir` is inside a work tree
    pub fn is_repo(&self, dir: &Utf8Path) -> bool {
        self.git(dir, &["rev-parse", "--is-inside-work-tree"]).is_ok()
    }

    pub fn has_uncommitted(&self, dir: &Utf8Path) -> Result<bool> {
        Ok(!self.status(dir)?.is_empty())
    }

    /// Whether any remote is configured
    pub fn has_remote(&self, dir: &Utf8Path) -> bool {
        self.git(dir, &["remote"])
            .map(|out| !out.is_empty())
            .unwrap_or(false)
    }

    /// URL of `origin`
    pub fn remote_url(&self, dir: &Utf8Path) -> Result<String> {
        self.git(dir, &["remote", "get-url", "origin"])
    }

    pub fn current_branch(&self, dir: &Utf8Path) -> Result<String> {
        self.git(dir, &["branch", "--show-current"])
    }
}
