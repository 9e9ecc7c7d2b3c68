//! Update command

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use projects_store::{parse_tags, save_project, ProjectStatus};
use serde::Serialize;

use crate::cli::UpdateArgs;
use crate::commands::format_timestamp;
use crate::context::RuntimeContext;
use crate::output;

#[derive(Serialize)]
struct UpdateResult<'a> {
    status: &'static str,
    slug: &'a str,
    updated_at: Option<DateTime<Utc>>,
}

pub fn run(args: UpdateArgs, ctx: &RuntimeContext) -> Result<()> {
    if !args.has_changes() {
        bail!("no fields to update. Use --title, --description, --status, or --tags");
    }

    // Validate before touching the file
    let status = args
        .status
        .as_deref()
        .map(str::parse::<ProjectStatus>)
        .transpose()?;

    let mut project = ctx.find(&args.slug)?;
    let meta = &mut project.metadata;

    if let Some(title) = &args.title {
        meta.title = title.clone();
    }
    if let Some(description) = &args.description {
        meta.description = description.clone();
    }
    if let Some(status) = status {
        meta.status = status.to_string();
    }
    if let Some(tags) = &args.tags {
        meta.tags = parse_tags(tags);
    }
    meta.touch();

    save_project(&project).with_context(|| format!("Failed to update {}", args.slug))?;
    ctx.refresh_registry();

    let meta = &project.metadata;
    if ctx.is_json() {
        return ctx.print_json(&UpdateResult {
            status: "updated",
            slug: &meta.slug,
            updated_at: meta.updated_at,
        });
    }

    output::success(&format!("Updated project {}", args.slug));
    if args.title.is_some() {
        output::kv("Title", &meta.title);
    }
    if args.description.is_some() {
        output::kv("Description", &meta.description);
    }
    if args.status.is_some() {
        output::kv("Status", &output::status(&meta.status).to_string());
    }
    if args.tags.is_some() {
        output::kv("Tags", &meta.tags.join(", "));
    }
    output::kv("Updated", &format_timestamp(meta.updated_at));
    Ok(())
}
