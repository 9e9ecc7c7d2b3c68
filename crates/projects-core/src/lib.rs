//! # projects-core
//!
//! Core library for the projects CLI providing:
//! - Settings store parsing (`~/.projects/config.toml`)
//! - Folder definitions binding a subdirectory to a GitHub account
//! - Output mode selection shared by every command

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::ProjectsConfig;
pub use error::{Error, Result};
pub use types::{Folder, OutputMode, ScaffoldLayout};
pub use utils::{expand_tilde, get_home_dir};
