//! Open command: reveal a project directory in the OS file manager

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

use crate::cli::OpenArgs;
use crate::context::RuntimeContext;
use crate::output;

/// File manager launcher for the current platform
fn opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

pub fn run(args: OpenArgs, ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.find(&args.slug)?;
    let program = opener();

    // The file manager outlives this process
    Command::new(program)
        .arg(project.directory.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to run {}", program))?;

    if !ctx.is_json() {
        output::success(&format!("Opened {}", project.directory));
    }
    Ok(())
}
