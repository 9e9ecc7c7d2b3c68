//! View command

use anyhow::Result;
use console::style;

use crate::cli::ViewArgs;
use crate::commands::{format_timestamp, print_field};
use crate::context::RuntimeContext;
use crate::output;

pub fn run(args: ViewArgs, ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.find(&args.slug)?;

    if let Some(field) = &args.field {
        return print_field(&project, field);
    }

    if ctx.is_json() {
        return ctx.print_json(&project);
    }

    let meta = &project.metadata;
    output::header(&meta.title);
    output::kv("Slug", &meta.slug);
    output::kv("Status", &output::status(&meta.status).to_string());
    if !project.folder.is_empty() {
        output::kv("Folder", &project.folder);
    }
    output::kv("Created", &format_timestamp(meta.created_at));
    output::kv("Updated", &format_timestamp(meta.updated_at));
    if !meta.description.is_empty() {
        output::kv("Description", &meta.description);
    }
    if !meta.tags.is_empty() {
        output::kv("Tags", &meta.tags.join(", "));
    }
    if let Some(remote) = &meta.git_remote {
        output::kv("Remote", remote);
    }
    output::kv("Directory", project.directory.as_str());

    if !project.body.is_empty() {
        println!("\n{}", style("─".repeat(40)).dim());
        print!("{}", project.body);
        if !project.body.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
