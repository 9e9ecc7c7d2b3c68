//! Memory command: show a project's memory log

use anyhow::Result;
use console::style;
use projects_store::memory::{latest_entries, load_project_memory, memory_path};

use crate::cli::MemoryArgs;
use crate::context::RuntimeContext;
use crate::output;

pub fn run(args: MemoryArgs, ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.find(&args.slug)?;
    let entries = load_project_memory(&project.directory)?;
    let shown = latest_entries(&entries, args.latest);

    if ctx.is_json() {
        return ctx.print_json(&shown);
    }

    if shown.is_empty() {
        output::info(&format!(
            "No memory entries yet. Add some to {}",
            memory_path(&project.directory)
        ));
        return Ok(());
    }

    for entry in shown {
        println!("{}", style(&entry.heading).bold());
        if !entry.content.is_empty() {
            println!("{}", entry.content);
        }
        println!();
    }
    Ok(())
}
