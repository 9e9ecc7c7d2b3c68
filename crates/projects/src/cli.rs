//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// projects - scaffold, track, and push lightweight project workspaces
#[derive(Parser, Debug)]
#[command(name = "projects")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to config.toml (default: ~/.projects/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Scope the command to a configured folder
    #[arg(long, global = true, value_name = "NAME")]
    pub folder: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    Create(CreateArgs),

    /// List projects
    #[command(alias = "ls")]
    List(ListArgs),

    /// View project details
    View(ViewArgs),

    /// Print project data for scripts and agents
    Load(LoadArgs),

    /// Show git health of every project
    Status(StatusArgs),

    /// Update project metadata
    Update(UpdateArgs),

    /// Delete a project and its directory
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Move a project into, out of, or between folders
    Move(MoveArgs),

    /// Manage folders bound to GitHub accounts
    #[command(subcommand)]
    Folder(FolderCommands),

    /// Commit and push a project, creating a GitHub repository if needed
    Push(PushArgs),

    /// Open a project file in the configured editor
    Edit(EditArgs),

    /// Open a project directory in the file manager
    Open(OpenArgs),

    /// Show entries from a project's memory log
    Memory(MemoryArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project slug (generated from --title when omitted)
    pub slug: Option<String>,

    /// Project title (defaults to the slug)
    #[arg(long)]
    pub title: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Initial status (active, paused, archived)
    #[arg(long, default_value = "active")]
    pub status: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print one field per project from the JSON form (e.g. meta.title, dir)
    #[arg(long, value_name = "PATH")]
    pub field: Option<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Project slug
    pub slug: String,

    /// Print a single field from the JSON form (e.g. meta.title, dir)
    #[arg(long, value_name = "PATH")]
    pub field: Option<String>,
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Project slug
    pub slug: String,

    /// Output `export NAME='value'` lines
    #[arg(long, conflicts_with = "bash")]
    pub export: bool,

    /// Output `NAME='value'` lines for eval
    #[arg(long)]
    pub bash: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print one field per project from the JSON form (e.g. has_remote)
    #[arg(long, value_name = "PATH")]
    pub field: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Project slug
    pub slug: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New status (active, paused, archived)
    #[arg(long)]
    pub status: Option<String>,

    /// Replace tags (comma-separated)
    #[arg(long)]
    pub tags: Option<String>,
}

impl UpdateArgs {
    /// Whether any field was supplied
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.tags.is_some()
    }
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project slug
    pub slug: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Project slug
    pub slug: String,

    /// Destination folder ("" for the top level)
    #[arg(long, value_name = "FOLDER")]
    pub to: String,
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// Add a folder bound to a GitHub account
    Add(FolderAddArgs),

    /// List configured folders
    #[command(alias = "ls")]
    List,

    /// Remove a folder from configuration (its directory is kept)
    #[command(alias = "rm")]
    Remove(FolderRemoveArgs),
}

#[derive(Args, Debug)]
pub struct FolderAddArgs {
    /// Folder name (same rules as a project slug)
    pub name: String,

    /// GitHub account used when pushing projects in this folder
    #[arg(long)]
    pub account: Option<String>,
}

#[derive(Args, Debug)]
pub struct FolderRemoveArgs {
    /// Folder name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct PushArgs {
    /// Project slug
    pub slug: String,

    /// Commit message
    #[arg(short, long, default_value = "Update project")]
    pub message: String,

    /// Create the GitHub repository as public
    #[arg(long)]
    pub public: bool,

    /// Never create a GitHub repository
    #[arg(long)]
    pub no_github: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Project slug
    pub slug: String,

    /// File to open, relative to the project directory (default: PROJECT.md)
    pub file: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Project slug
    pub slug: String,
}

#[derive(Args, Debug)]
pub struct MemoryArgs {
    /// Project slug
    pub slug: String,

    /// Only show the last N entries (0 for all)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub latest: usize,
}
