//! Registry index: a generated markdown summary of top-level projects
//!
//! `PROJECTS.md` is output only. Nothing reads it back, and it can always be
//! regenerated from the project directories.

use crate::error::{Error, Result};
use crate::store::list_projects;
use crate::types::Project;
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt::Write as _;
use std::fs;
use tracing::{debug, warn};

/// Registry file name at the projects root
pub const REGISTRY_FILE: &str = "PROJECTS.md";

/// Render the registry document for a list of projects
pub fn render_registry(projects: &[Project]) -> String {
    let mut out = String::from("# Projects\n\nAuto-generated registry of all projects.\n\n");

    if projects.is_empty() {
        out.push_str("No projects yet. Run `projects create <slug>` to get started.\n");
    } else {
        out.push_str("| Slug | Title | Status | Created |\n");
        out.push_str("|------|-------|--------|---------|\n");
        for project in projects {
            let meta = &project.metadata;
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                cell(&meta.slug),
                cell(&meta.title),
                cell(&meta.status),
                meta.created_date()
            );
        }
    }

    out.push('\n');
    out
}

/// Keep a value on one table row: pipes are escaped, line breaks flattened
fn cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// Regenerate `PROJECTS.md` under `root`, overwriting any previous copy
pub fn write_registry(root: &Utf8Path) -> Result<Utf8PathBuf> {
    let projects = list_projects(root)?;
    let path = root.join(REGISTRY_FILE);

    fs::create_dir_all(root).map_err(|e| Error::io("create directory", root, e))?;
    fs::write(&path, render_registry(&projects)).map_err(|e| Error::io("write", &path, e))?;

    debug!("Regenerated {} ({} projects)", path, projects.len());
    Ok(path)
}

/// Regenerate the registry, logging instead of failing
pub fn refresh_registry(root: &Utf8Path) {
    if let Err(e) = write_registry(root) {
        warn!("Could not regenerate {}: {}", REGISTRY_FILE, e);
    }
}
