//! Shared fixtures for projects-store integration tests

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use projects_core::config::PROJECTS_DIR_ENV;
use projects_core::{ProjectsConfig, ScaffoldLayout};
use projects_store::{scaffold, ProjectMetadata};
use tempfile::TempDir;

/// A scratch projects directory plus a config pointing at it
pub struct Workspace {
    pub config: ProjectsConfig,
    _temp: TempDir,
}

impl Workspace {
    /// Create a workspace with the given folders configured
    ///
    /// Clears `PROJECTS_DIR`, so callers must be `#[serial]`.
    pub fn new(folders: &[(&str, &str)]) -> Self {
        std::env::remove_var(PROJECTS_DIR_ENV);

        let temp = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let config_path = base.join("config.toml");

        let mut toml = format!("projects_dir = \"{}\"\n", base.join("projects"));
        for (name, account) in folders {
            toml.push_str(&format!(
                "\n[[folders]]\nname = \"{}\"\ngithub_account = \"{}\"\n",
                name, account
            ));
        }
        std::fs::write(&config_path, toml).unwrap();

        let config = ProjectsConfig::load_from_path(&config_path).unwrap();
        std::fs::create_dir_all(&config.projects_dir).unwrap();
        for (name, _) in folders {
            std::fs::create_dir_all(config.projects_dir.join(name)).unwrap();
        }

        Self {
            config,
            _temp: temp,
        }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.config.projects_dir
    }

    pub fn folder(&self, name: &str) -> Utf8PathBuf {
        self.config.projects_dir.join(name)
    }

    /// Scaffold a project with the full layout under `root`
    pub fn create(&self, root: &Utf8Path, slug: &str, title: &str) -> Utf8PathBuf {
        scaffold(root, &ProjectMetadata::new(slug, title), ScaffoldLayout::Full).unwrap()
    }
}
