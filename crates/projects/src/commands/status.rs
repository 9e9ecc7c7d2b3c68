//! Status command: git health across projects

use anyhow::Result;
use console::style;
use projects_store::{health, ProjectHealth};
use tabled::{settings::Style, Table, Tabled};

use crate::cli::StatusArgs;
use crate::commands::print_field;
use crate::context::RuntimeContext;
use crate::output;

#[derive(Tabled)]
struct HealthRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Git")]
    git: String,
    #[tabled(rename = "Remote")]
    remote: String,
    #[tabled(rename = "Clean")]
    clean: String,
}

#[derive(Tabled)]
struct FolderHealthRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Folder")]
    folder: String,
    #[tabled(inline)]
    health: HealthCells,
}

#[derive(Tabled)]
struct HealthCells {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Git")]
    git: String,
    #[tabled(rename = "Remote")]
    remote: String,
    #[tabled(rename = "Clean")]
    clean: String,
}

pub fn run(args: StatusArgs, ctx: &RuntimeContext) -> Result<()> {
    let projects = ctx.namespace().list_all(ctx.folder_hint())?;

    let spinner = output::spinner(ctx.mode, "Checking project health...");
    let git = ctx.git();
    let report: Vec<ProjectHealth> = projects.iter().map(|p| health::check(p, &git)).collect();
    spinner.finish_and_clear();

    if let Some(field) = &args.field {
        for entry in &report {
            print_field(entry, field)?;
        }
        return Ok(());
    }

    if ctx.is_json() {
        return ctx.print_json(&report);
    }

    if report.is_empty() {
        output::info("No projects yet. Create one with: projects create <slug>");
        return Ok(());
    }

    output::header("Project health");
    println!();

    let mut table = if ctx.config.has_folders() {
        Table::new(report.iter().map(|entry| FolderHealthRow {
            slug: entry.slug.clone(),
            folder: if entry.folder.is_empty() {
                "-".to_string()
            } else {
                entry.folder.clone()
            },
            health: cells(entry),
        }))
    } else {
        Table::new(report.iter().map(|entry| {
            let HealthCells {
                status,
                git,
                remote,
                clean,
            } = cells(entry);
            HealthRow {
                slug: entry.slug.clone(),
                status,
                git,
                remote,
                clean,
            }
        }))
    };
    table.with(Style::sharp());
    println!("{}", table);
    Ok(())
}

fn cells(entry: &ProjectHealth) -> HealthCells {
    let muted = || style("-").dim().to_string();

    HealthCells {
        status: output::status(&entry.status).to_string(),
        git: if entry.has_git {
            style("yes").green().to_string()
        } else {
            style("no").dim().to_string()
        },
        remote: match (entry.has_git, entry.has_remote) {
            (true, true) => style("yes").green().to_string(),
            (true, false) => style("no").yellow().to_string(),
            _ => muted(),
        },
        clean: match (entry.has_git, entry.uncommitted) {
            (true, false) => style("clean").green().to_string(),
            (true, true) => style("dirty").yellow().to_string(),
            _ => muted(),
        },
    }
}
