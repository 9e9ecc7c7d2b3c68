//! Edit command: open a project file in the configured editor

use anyhow::{anyhow, bail, Context, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::process::Command;
use tracing::debug;

use crate::cli::EditArgs;
use crate::context::RuntimeContext;

pub fn run(args: EditArgs, ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.find(&args.slug)?;
    let target = match &args.file {
        Some(file) => resolve_target(&project.directory, file)?,
        None => project.primary_file(),
    };

    let mut parts = ctx.config.editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow!("no editor configured; set `editor` in config.toml or $EDITOR"))?;
    let program_path =
        which::which(program).with_context(|| format!("Editor '{}' not found in PATH", program))?;

    debug!("Opening {} with {}", target, ctx.config.editor);
    let status = Command::new(program_path)
        .args(parts)
        .arg(target.as_str())
        .current_dir(&project.directory)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", program))?;

    if !status.success() {
        bail!("editor '{}' exited with {}", program, status);
    }
    Ok(())
}

/// Join a project-relative path, refusing anything that escapes the project
fn resolve_target(project_dir: &Utf8Path, file: &Utf8Path) -> Result<Utf8PathBuf> {
    let escapes = file
        .components()
        .any(|c| !matches!(c, Utf8Component::Normal(_) | Utf8Component::CurDir));
    if escapes {
        bail!("{} must be a path inside the project directory", file);
    }
    Ok(project_dir.join(file))
}
