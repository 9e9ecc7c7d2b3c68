//! Starter document rendering with `{var}` substitution

use crate::error::{Error, Result};
use crate::types::ProjectMetadata;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::debug;

/// Variables available to starter document templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    pub title: String,
    pub description: String,
    pub created: String,
    pub status: String,
}

impl TemplateVars {
    /// Collect template variables from project metadata
    pub fn from_metadata(metadata: &ProjectMetadata) -> Self {
        Self {
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            created: metadata.created_date(),
            status: metadata.status.clone(),
        }
    }
}

/// A starter document: path relative to the project directory plus template text
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub path: &'static str,
    pub template: &'static str,
}

/// Renders embedded templates into a project directory
#[derive(Debug, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a template string, replacing `{title}`, `{description}`,
    /// `{created}` and `{status}`
    pub fn render_string(&self, template: &str, vars: &TemplateVars) -> String {
        template
            .replace("{title}", &vars.title)
            .replace("{description}", &vars.description)
            .replace("{created}", &vars.created)
            .replace("{status}", &vars.status)
    }

    /// Render each template into `target_dir`, returning the written paths
    ///
    /// Stops at the first failure; files written before it are left in place.
    pub fn render_files(
        &self,
        files: &[TemplateFile],
        vars: &TemplateVars,
        target_dir: &Utf8Path,
    ) -> Result<Vec<Utf8PathBuf>> {
        let mut created_files = Vec::with_capacity(files.len());

        for file in files {
            let full_path = target_dir.join(file.path);

            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::io("create directory", parent, e))?;
            }

            let content = self.render_string(file.template, vars);
            fs::write(&full_path, content).map_err(|e| Error::io("write", &full_path, e))?;
            debug!("Wrote {}", full_path);

            created_files.push(full_path);
        }

        Ok(created_files)
    }
}
