//! External process capability
//!
//! git and gh are only ever invoked through a [`CommandRunner`], so tests
//! can substitute a fake.

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs an external program synchronously
pub trait CommandRunner {
    /// Run `program args..` in `dir`, returning trimmed stdout
    ///
    /// A non-zero exit or spawn failure becomes [`Error::ExternalTool`]
    /// carrying the tool's stderr when it produced any.
    fn run(&self, dir: &Utf8Path, program: &str, args: &[&str]) -> Result<String>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, dir: &Utf8Path, program: &str, args: &[&str]) -> Result<String> {
        (**self).run(dir, program, args)
    }
}

/// Runner backed by [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, dir: &Utf8Path, program: &str, args: &[&str]) -> Result<String> {
        debug!("Running {} {} in {}", program, args.join(" "), dir);

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::external_tool(program, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr)
            };
            return Err(Error::external_tool(
                format!("{} {}", program, args.first().copied().unwrap_or_default()),
                message,
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_program_is_external_tool_error() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();

        let err = SystemRunner
            .run(dir, "definitely-not-a-real-program-xyz", &["--version"])
            .unwrap_err();
        assert!(matches!(err, Error::ExternalTool { .. }));
    }
}
