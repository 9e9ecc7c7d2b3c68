//! Folder management commands
//!
//! A folder is a subdirectory of the projects directory bound to a GitHub
//! account. Pushing a project that lives in a folder switches `gh` to that
//! account first.

use anyhow::{anyhow, bail, Context, Result};
use dialoguer::Select;
use projects_store::git::GitHub;
use projects_store::{add_folder, remove_folder, validate_slug, CommandRunner};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::{FolderAddArgs, FolderCommands, FolderRemoveArgs};
use crate::context::RuntimeContext;
use crate::output;

#[derive(Tabled)]
struct FolderRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "GitHub Account")]
    account: String,
    #[tabled(rename = "Path")]
    path: String,
}

#[derive(Serialize)]
struct FolderAdded<'a> {
    status: &'static str,
    folder: &'a str,
    github_account: &'a str,
    path: &'a str,
}

#[derive(Serialize)]
struct FolderRemoved<'a> {
    status: &'static str,
    folder: &'a str,
}

/// Main entry point for folder subcommands
pub fn run(cmd: FolderCommands, ctx: &mut RuntimeContext) -> Result<()> {
    match cmd {
        FolderCommands::Add(args) => add(args, ctx),
        FolderCommands::List => list(ctx),
        FolderCommands::Remove(args) => remove(args, ctx),
    }
}

fn add(args: FolderAddArgs, ctx: &mut RuntimeContext) -> Result<()> {
    let name = args.name.as_str();
    validate_slug(name).context("Invalid folder name")?;
    if ctx.config.folder_by_name(name).is_some() {
        bail!("folder {:?} already exists", name);
    }

    let github = ctx.github();
    let account = match args.account.filter(|a| !a.trim().is_empty()) {
        Some(account) => account,
        None => pick_account(&github, ctx)?,
    };

    if !github.is_available() {
        output::warning("gh CLI not found; install it and run 'gh auth login' before pushing");
    } else {
        let accounts = github.list_auth_accounts();
        if !accounts.is_empty() && !accounts.contains(&account) {
            output::warning(&format!(
                "account {:?} not found in gh auth (have: {}); run 'gh auth login' to add it",
                account,
                accounts.join(", ")
            ));
        }
    }

    let path = add_folder(&mut ctx.config, name, &account)?;
    ctx.config.save().context("Failed to save configuration")?;

    if ctx.is_json() {
        return ctx.print_json(&FolderAdded {
            status: "created",
            folder: name,
            github_account: &account,
            path: path.as_str(),
        });
    }

    output::success(&format!("Folder {} created", name));
    output::kv("GitHub account", &account);
    output::kv("Path", path.as_str());
    println!();
    output::info(&format!(
        "Create projects here with: projects create <slug> --folder {}",
        name
    ));
    Ok(())
}

/// Choose an account from `gh auth status` when `--account` is omitted
fn pick_account<R: CommandRunner>(github: &GitHub<R>, ctx: &RuntimeContext) -> Result<String> {
    if !github.is_available() {
        bail!("--account is required (gh CLI not available for selection)");
    }

    let mut accounts = github.list_auth_accounts();
    match accounts.len() {
        0 => bail!(
            "--account is required (no accounts found in gh auth). \
             Run 'gh auth login' first, or pass --account <username>"
        ),
        1 => {
            let account = accounts.remove(0);
            if !ctx.is_json() {
                output::info(&format!("Using GitHub account {}", account));
            }
            Ok(account)
        }
        _ if !ctx.is_interactive() => bail!(
            "--account is required in non-interactive mode (available: {})",
            accounts.join(", ")
        ),
        _ => {
            let selection = Select::new()
                .with_prompt("Which GitHub account for this folder?")
                .items(&accounts)
                .default(0)
                .interact()?;
            accounts
                .into_iter()
                .nth(selection)
                .ok_or_else(|| anyhow!("no account selected"))
        }
    }
}

fn list(ctx: &RuntimeContext) -> Result<()> {
    let folders = &ctx.config.folders;

    if ctx.is_json() {
        return ctx.print_json(folders);
    }

    if folders.is_empty() {
        output::info(
            "No folders configured. Use 'projects folder add <name> --account <gh-user>' to get started.",
        );
        return Ok(());
    }

    let ns = ctx.namespace();
    let rows: Vec<FolderRow> = folders
        .iter()
        .map(|f| FolderRow {
            name: f.name.clone(),
            account: f.github_account.clone(),
            path: ns.folder_dir(&f.name).to_string(),
        })
        .collect();

    output::header("Folders");
    println!();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
    Ok(())
}

fn remove(args: FolderRemoveArgs, ctx: &mut RuntimeContext) -> Result<()> {
    let folder = remove_folder(&mut ctx.config, &args.name)?;
    ctx.config.save().context("Failed to save configuration")?;

    if ctx.is_json() {
        return ctx.print_json(&FolderRemoved {
            status: "removed",
            folder: &folder.name,
        });
    }

    output::success(&format!("Folder {} removed from config", folder.name));
    output::info("Directory and projects were not deleted.");
    Ok(())
}
