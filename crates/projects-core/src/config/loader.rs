//! Settings store loading and persistence
//!
//! Configuration is resolved with the following precedence (low to high):
//! 1. Built-in defaults (`~/.projects/projects`, `$EDITOR` or `vim`)
//! 2. The TOML settings file (`~/.projects/config.toml` or `--config`)
//! 3. Environment variables (`PROJECTS_DIR`)

use crate::error::{Error, Result};
use crate::types::{Folder, ScaffoldLayout};
use crate::utils::{expand_tilde, get_home_dir};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// Settings file name inside the app directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the projects directory
pub const PROJECTS_DIR_ENV: &str = "PROJECTS_DIR";

const DEFAULT_EDITOR: &str = "vim";

/// Root app directory (`~/.projects`)
pub fn app_dir() -> Result<Utf8PathBuf> {
    Ok(get_home_dir()?.join(".projects"))
}

/// Default projects directory (`~/.projects/projects`)
pub fn default_projects_dir() -> Result<Utf8PathBuf> {
    Ok(app_dir()?.join("projects"))
}

/// Default settings file path (`~/.projects/config.toml`)
pub fn default_config_path() -> Result<Utf8PathBuf> {
    Ok(app_dir()?.join(CONFIG_FILE_NAME))
}

/// On-disk shape of config.toml; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    projects_dir: Option<Utf8PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    editor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    github_org: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    auto_git_init: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    scaffold_layout: Option<ScaffoldLayout>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    folders: Vec<Folder>,
}

/// Resolved configuration for one CLI invocation
#[derive(Debug, Clone)]
pub struct ProjectsConfig {
    /// Root directory holding top-level projects and folder subdirectories
    pub projects_dir: Utf8PathBuf,

    /// Editor command used by `edit`
    pub editor: String,

    /// GitHub organization for newly created repositories
    pub github_org: Option<String>,

    /// Initialize a git repository when a project is created
    pub auto_git_init: bool,

    /// Layout used by the scaffold builder
    pub scaffold_layout: ScaffoldLayout,

    /// Configured folders, in declaration order
    pub folders: Vec<Folder>,

    /// Path the configuration was loaded from and is saved to
    pub config_path: Utf8PathBuf,

    // Values as written in the file, so env-derived values never get persisted
    file_projects_dir: Option<Utf8PathBuf>,
    file_editor: Option<String>,
}

impl ProjectsConfig {
    /// Load configuration from the default settings path
    pub fn load() -> Result<Self> {
        Self::load_from_path(&default_config_path()?)
    }

    /// Load configuration from a specific path, returning defaults when the file is missing
    pub fn load_from_path(path: &Utf8Path) -> Result<Self> {
        let config_path = expand_tilde(path)?;

        let file = match fs::read_to_string(&config_path) {
            Ok(content) => {
                debug!("Loading config from {}", config_path);
                toml::from_str::<ConfigFile>(&content)
                    .map_err(|e| Error::toml_parse(config_path.as_str(), e))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", config_path);
                ConfigFile::default()
            }
            Err(e) => return Err(Error::io(config_path.as_str(), e)),
        };

        Self::resolve(file, config_path)
    }

    fn resolve(file: ConfigFile, config_path: Utf8PathBuf) -> Result<Self> {
        let projects_dir = match std::env::var(PROJECTS_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => expand_tilde(Utf8Path::new(dir.trim()))?,
            _ => match &file.projects_dir {
                Some(dir) if !dir.as_str().is_empty() => expand_tilde(dir)?,
                _ => default_projects_dir()?,
            },
        };

        validate_folders(&file.folders, &config_path)?;

        let editor = file
            .editor
            .clone()
            .filter(|e| !e.trim().is_empty())
            .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Ok(Self {
            projects_dir,
            editor,
            github_org: file.github_org.filter(|o| !o.trim().is_empty()),
            auto_git_init: file.auto_git_init.unwrap_or(true),
            scaffold_layout: file.scaffold_layout.unwrap_or_default(),
            folders: file.folders,
            config_path,
            file_projects_dir: file.projects_dir,
            file_editor: file.editor,
        })
    }

    /// Persist the configuration to `config_path`
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent.as_str(), e))?;
        }

        let file = ConfigFile {
            projects_dir: self.file_projects_dir.clone(),
            editor: self.file_editor.clone(),
            github_org: self.github_org.clone(),
            auto_git_init: Some(self.auto_git_init),
            scaffold_layout: Some(self.scaffold_layout),
            folders: self.folders.clone(),
        };

        let content = toml::to_string_pretty(&file)?;
        fs::write(&self.config_path, content)
            .map_err(|e| Error::io(self.config_path.as_str(), e))?;
        debug!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Create the projects directory if it does not exist
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.projects_dir)
            .map_err(|e| Error::io(self.projects_dir.as_str(), e))?;
        Ok(())
    }

    /// Look up a configured folder by name
    pub fn folder_by_name(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    /// Whether any folders are configured
    pub fn has_folders(&self) -> bool {
        !self.folders.is_empty()
    }
}

/// Folder names double as subdirectory names, so they follow the slug rules
/// and must be unique
fn validate_folders(folders: &[Folder], config_path: &Utf8Path) -> Result<()> {
    for (i, folder) in folders.iter().enumerate() {
        if !folder.has_valid_name() {
            return Err(Error::invalid_config(format!(
                "folder name {:?} in {} must be lowercase letters, digits, and single hyphens",
                folder.name, config_path
            )));
        }
        if folders[..i].iter().any(|f| f.name == folder.name) {
            return Err(Error::invalid_config(format!(
                "folder {:?} is defined more than once in {}",
                folder.name, config_path
            )));
        }
    }
    Ok(())
}
