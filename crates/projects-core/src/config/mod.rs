//! Configuration management

mod loader;

pub use loader::{
    app_dir, default_config_path, default_projects_dir, ProjectsConfig, CONFIG_FILE_NAME,
    PROJECTS_DIR_ENV,
};
