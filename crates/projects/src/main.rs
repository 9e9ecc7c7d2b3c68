//! projects CLI - scaffold, track, and push lightweight project workspaces
//!
//! This is the main entry point for the `projects` command-line interface.

mod cli;
mod commands;
mod context;
mod output;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use projects_core::{OutputMode, ProjectsConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let config = match cli.config.as_deref() {
        Some(path) => ProjectsConfig::load_from_path(path),
        None => ProjectsConfig::load(),
    }
    .context("Failed to load configuration")?;

    let mode = OutputMode::resolve(cli.json, std::io::stdout().is_terminal());
    let mut ctx = RuntimeContext::new(config, mode, cli.folder);

    match cli.command {
        Commands::Create(args) => commands::create::run(args, &ctx),
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::View(args) => commands::view::run(args, &ctx),
        Commands::Load(args) => commands::load::run(args, &ctx),
        Commands::Status(args) => commands::status::run(args, &ctx),
        Commands::Update(args) => commands::update::run(args, &ctx),
        Commands::Delete(args) => commands::delete::run(args, &ctx),
        Commands::Move(args) => commands::relocate::run(args, &ctx),
        Commands::Folder(cmd) => commands::folder::run(cmd, &mut ctx),
        Commands::Push(args) => commands::push::run(args, &ctx),
        Commands::Edit(args) => commands::edit::run(args, &ctx),
        Commands::Open(args) => commands::open::run(args, &ctx),
        Commands::Memory(args) => commands::memory::run(args, &ctx),
    }
}

/// Initialize tracing with appropriate verbosity
///
/// `RUST_LOG` wins over the flags when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
