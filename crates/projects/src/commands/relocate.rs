//! Move command: relocate a project between the top level and folders

use anyhow::Result;
use serde::Serialize;

use crate::cli::MoveArgs;
use crate::context::RuntimeContext;
use crate::output;

#[derive(Serialize)]
struct MoveResult<'a> {
    status: &'static str,
    slug: &'a str,
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    from_folder: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    to_folder: &'a str,
}

pub fn run(args: MoveArgs, ctx: &RuntimeContext) -> Result<()> {
    let destination = args.to.trim();
    let ns = ctx.namespace();

    // The project is looked up wherever it lives; --folder does not scope moves
    let project = ns.find(&args.slug, None)?;
    let moved = ns.move_project(&project, destination)?;

    ctx.refresh_registry();

    if ctx.is_json() {
        return ctx.print_json(&MoveResult {
            status: "moved",
            slug: &args.slug,
            from: project.directory.as_str(),
            to: moved.directory.as_str(),
            from_folder: &project.folder,
            to_folder: destination,
        });
    }

    output::success(&format!(
        "Moved {} from {} to {}",
        args.slug,
        location(&project.folder),
        location(destination)
    ));
    output::kv("New path", moved.directory.as_str());
    Ok(())
}

fn location(folder: &str) -> String {
    if folder.is_empty() {
        "the top level".to_string()
    } else {
        format!("folder {}", folder)
    }
}
