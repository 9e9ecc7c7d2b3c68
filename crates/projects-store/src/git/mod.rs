//! git and GitHub CLI wrappers
//!
//! Both wrappers are generic over a [`CommandRunner`](crate::process::CommandRunner)
//! and return [`Error::ExternalTool`](crate::Error::ExternalTool) when the
//! underlying program fails.
//!
//! ```no_run
//! use projects_store::git::Git;
//! use projects_store::process::SystemRunner;
//! use camino::Utf8Path;
//!
//! # fn example() -> projects_store::Result<()> {
//! let git = Git::new(SystemRunner);
//! let dir = Utf8Path::new("/tmp/demo");
//! if !git.is_repo(dir) {
//!     git.init(dir)?;
//! }
//! git.add_all(dir)?;
//! git.commit(dir, "Initial commit")?;
//! # Ok(())
//! # }
//! ```

mod github;
mod repo;

pub use github::GitHub;
pub use repo::Git;
