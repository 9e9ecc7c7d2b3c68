//! Delete command

use anyhow::{bail, Result};
use dialoguer::Confirm;
use projects_store::delete_project;
use serde::Serialize;

use crate::cli::DeleteArgs;
use crate::context::RuntimeContext;
use crate::output;

#[derive(Serialize)]
struct DeleteResult<'a> {
    status: &'static str,
    slug: &'a str,
}

pub fn run(args: DeleteArgs, ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.find(&args.slug)?;

    if !args.force {
        if !ctx.is_interactive() {
            bail!("use --force to delete without confirmation in non-interactive mode");
        }

        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete project '{}' and everything in {}?",
                args.slug, project.directory
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            output::info("Cancelled, nothing was deleted");
            return Ok(());
        }
    }

    delete_project(&project)?;
    ctx.refresh_registry();

    if ctx.is_json() {
        return ctx.print_json(&DeleteResult {
            status: "deleted",
            slug: &args.slug,
        });
    }

    output::success(&format!("Deleted project {}", args.slug));
    Ok(())
}
