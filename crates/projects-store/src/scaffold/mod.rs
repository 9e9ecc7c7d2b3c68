//! Scaffold builder for new projects
//!
//! Creates the project directory, the primary file and the starter
//! documents for the configured [`ScaffoldLayout`]. Steps run in order and
//! a failure part way through leaves whatever was already created on disk.

mod renderer;

pub use renderer::{TemplateFile, TemplateRenderer, TemplateVars};

use crate::error::{Error, Result};
use crate::slug::validate_slug;
use crate::store::write_project_file;
use crate::types::ProjectMetadata;
use camino::{Utf8Path, Utf8PathBuf};
use projects_core::ScaffoldLayout;
use std::fs;
use tracing::{debug, info};

const MINIMAL_DIRS: &[&str] = &["docs", "memory", "context", "tasks"];
const FULL_EXTRA_DIRS: &[&str] = &["code", "private"];

const MINIMAL_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "docs/README.md",
        template: include_str!("../../templates/README.md"),
    },
    TemplateFile {
        path: "memory/MEMORY.md",
        template: include_str!("../../templates/MEMORY.md"),
    },
    TemplateFile {
        path: "context/CONTEXT.md",
        template: include_str!("../../templates/CONTEXT.md"),
    },
    TemplateFile {
        path: "tasks/TODO.md",
        template: include_str!("../../templates/TODO.md"),
    },
];

const FULL_EXTRA_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "USAGE.md",
        template: include_str!("../../templates/USAGE.md"),
    },
    TemplateFile {
        path: ".gitignore",
        template: include_str!("../../templates/gitignore"),
    },
];

/// Subdirectories created for a layout
pub fn layout_dirs(layout: ScaffoldLayout) -> Vec<&'static str> {
    let mut dirs = MINIMAL_DIRS.to_vec();
    if layout == ScaffoldLayout::Full {
        dirs.extend_from_slice(FULL_EXTRA_DIRS);
    }
    dirs
}

/// Starter documents written for a layout
pub fn layout_files(layout: ScaffoldLayout) -> Vec<TemplateFile> {
    let mut files = MINIMAL_FILES.to_vec();
    if layout == ScaffoldLayout::Full {
        files.extend_from_slice(FULL_EXTRA_FILES);
    }
    files
}

/// Initial body of the primary file
pub fn initial_body(metadata: &ProjectMetadata) -> String {
    format!("# {}\n\n{}\n", metadata.title, metadata.description)
}

/// Create a new project under `root`, returning its directory
///
/// Fails with [`Error::AlreadyExists`] when `root/<slug>` is present. The
/// existence check is not exclusive: a concurrent creator surfaces as an
/// [`Error::Io`] from the directory creation instead.
pub fn scaffold(
    root: &Utf8Path,
    metadata: &ProjectMetadata,
    layout: ScaffoldLayout,
) -> Result<Utf8PathBuf> {
    validate_slug(&metadata.slug)?;

    let dir = root.join(&metadata.slug);
    if dir.exists() {
        return Err(Error::already_exists(dir.as_str()));
    }

    fs::create_dir_all(root).map_err(|e| Error::io("create directory", root, e))?;
    fs::create_dir(&dir).map_err(|e| Error::io("create directory", &dir, e))?;

    for sub in layout_dirs(layout) {
        let path = dir.join(sub);
        fs::create_dir_all(&path).map_err(|e| Error::io("create directory", &path, e))?;
    }
    debug!("Created {} layout under {}", layout, dir);

    write_project_file(&dir, metadata, &initial_body(metadata))?;

    let vars = TemplateVars::from_metadata(metadata);
    TemplateRenderer::new().render_files(&layout_files(layout), &vars, &dir)?;

    info!("Scaffolded project {} at {}", metadata.slug, dir);
    Ok(dir)
}
