//! # projects-store
//!
//! Project registry library for the projects CLI:
//! - Project metadata and the `PROJECT.md` frontmatter codec
//! - Slug validation and derivation
//! - Scaffolding new project directories
//! - Discovery and lookup within a root and across configured folders
//! - The generated `PROJECTS.md` registry index
//! - Memory log parsing
//! - git / GitHub CLI wrappers behind an injectable [`process::CommandRunner`]

pub mod error;
pub mod folders;
pub mod frontmatter;
pub mod git;
pub mod health;
pub mod memory;
pub mod process;
pub mod registry;
pub mod scaffold;
pub mod slug;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use folders::{add_folder, remove_folder, FolderNamespace};
pub use frontmatter::FrontmatterError;
pub use health::ProjectHealth;
pub use memory::MemoryEntry;
pub use process::{CommandRunner, SystemRunner};
pub use registry::{refresh_registry, write_registry, REGISTRY_FILE};
pub use scaffold::scaffold;
pub use slug::{slugify, validate_slug};
pub use store::{
    delete_project, find_project, list_projects, load_project, save_project, PRIMARY_FILE,
};
pub use types::{parse_tags, Project, ProjectMetadata, ProjectStatus};
