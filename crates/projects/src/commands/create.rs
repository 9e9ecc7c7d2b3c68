//! Create command

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use chrono::{DateTime, Utc};
use projects_store::{
    load_project, parse_tags, scaffold, slugify, validate_slug, ProjectMetadata, ProjectStatus,
};
use serde::Serialize;
use tracing::warn;

use crate::cli::CreateArgs;
use crate::context::RuntimeContext;
use crate::output;

const INITIAL_COMMIT: &str = "Initial project scaffold";

#[derive(Serialize)]
struct CreateResult<'a> {
    status: &'static str,
    slug: &'a str,
    dir: &'a str,
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    folder: Option<&'a str>,
}

pub fn run(args: CreateArgs, ctx: &RuntimeContext) -> Result<()> {
    let title = args.title.unwrap_or_default();
    let slug = match args.slug {
        Some(slug) => slug,
        None if !title.trim().is_empty() => slugify(&title),
        None => return Err(anyhow!("a slug or --title is required")),
    };
    if slug.is_empty() {
        return Err(anyhow!("could not derive a slug from title {:?}", title));
    }
    validate_slug(&slug)?;
    let status: ProjectStatus = args.status.parse()?;

    let folder = ctx.folder_hint().unwrap_or_default();
    let root = ctx.namespace().root_for(folder)?;

    let metadata = ProjectMetadata::new(slug.as_str(), title)
        .with_description(args.description.unwrap_or_default())
        .with_tags(args.tags.as_deref().map(parse_tags).unwrap_or_default())
        .with_status(status);

    let dir = scaffold(&root, &metadata, ctx.config.scaffold_layout)
        .with_context(|| format!("Failed to create project {}", slug))?;

    if ctx.config.auto_git_init {
        init_repository(ctx, &dir);
    }

    ctx.refresh_registry();
    let project = load_project(&dir)?;

    if ctx.is_json() {
        return ctx.print_json(&CreateResult {
            status: "created",
            slug: project.slug(),
            dir: dir.as_str(),
            created_at: project.metadata.created_at,
            folder: (!folder.is_empty()).then_some(folder),
        });
    }

    output::success(&format!("Created project {}", project.slug()));
    output::kv("Title", &project.metadata.title);
    output::kv("Path", dir.as_str());
    if !folder.is_empty() {
        output::kv("Folder", folder);
    }
    Ok(())
}

/// Initialize a repository with a first commit; failures only warn
fn init_repository(ctx: &RuntimeContext, dir: &Utf8Path) {
    let git = ctx.git();
    if let Err(e) = git.init(dir) {
        if !ctx.is_json() {
            output::warning(&format!("git init failed: {}", e));
        }
        warn!("git init failed in {}: {}", dir, e);
        return;
    }

    if let Err(e) = git.add_all(dir).and_then(|()| git.commit(dir, INITIAL_COMMIT)) {
        warn!("Initial commit failed in {}: {}", dir, e);
    }
}
