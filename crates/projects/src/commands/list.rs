//! List command

use anyhow::Result;
use projects_store::Project;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::ListArgs;
use crate::commands::print_field;
use crate::context::RuntimeContext;
use crate::output;

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

#[derive(Tabled)]
struct FolderProjectRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Folder")]
    folder: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

pub fn run(args: ListArgs, ctx: &RuntimeContext) -> Result<()> {
    let projects = ctx.namespace().list_all(ctx.folder_hint())?;

    if let Some(field) = &args.field {
        for project in &projects {
            print_field(project, field)?;
        }
        return Ok(());
    }

    if ctx.is_json() {
        return ctx.print_json(&projects);
    }

    if projects.is_empty() {
        output::info("No projects yet. Create one with: projects create <slug>");
        return Ok(());
    }

    let mut table = if ctx.config.has_folders() {
        Table::new(projects.iter().map(folder_row))
    } else {
        Table::new(projects.iter().map(row))
    };
    table.with(Style::sharp());
    println!("{}", table);

    if ctx.is_interactive() {
        println!("\n{} project(s)", projects.len());
    }
    Ok(())
}

fn row(project: &Project) -> ProjectRow {
    ProjectRow {
        slug: project.metadata.slug.clone(),
        title: project.metadata.title.clone(),
        status: output::status(&project.metadata.status).to_string(),
        created: project.metadata.created_date(),
    }
}

fn folder_row(project: &Project) -> FolderProjectRow {
    FolderProjectRow {
        slug: project.metadata.slug.clone(),
        folder: if project.folder.is_empty() {
            "-".to_string()
        } else {
            project.folder.clone()
        },
        title: project.metadata.title.clone(),
        status: output::status(&project.metadata.status).to_string(),
        created: project.metadata.created_date(),
    }
}
