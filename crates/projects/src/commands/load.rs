//! Load command: project data for scripts and agents

use anyhow::Result;
use projects_store::Project;

use crate::cli::LoadArgs;
use crate::context::RuntimeContext;

pub fn run(args: LoadArgs, ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.find(&args.slug)?;

    let prefix = if args.export {
        "export "
    } else if args.bash {
        ""
    } else {
        return ctx.print_json(&project);
    };

    for (name, value) in shell_vars(&project) {
        println!("{}{}={}", prefix, name, shell_quote(&value));
    }
    Ok(())
}

/// Variables describing a project; tags and remote only when present
fn shell_vars(project: &Project) -> Vec<(&'static str, String)> {
    let meta = &project.metadata;
    let mut vars = vec![
        ("PROJECT_SLUG", meta.slug.clone()),
        ("PROJECT_TITLE", meta.title.clone()),
        ("PROJECT_STATUS", meta.status.clone()),
        ("PROJECT_DIR", project.directory.to_string()),
        ("PROJECT_DESCRIPTION", meta.description.clone()),
    ];
    if !meta.tags.is_empty() {
        vars.push(("PROJECT_TAGS", meta.tags.join(",")));
    }
    if let Some(remote) = &meta.git_remote {
        vars.push(("PROJECT_GIT_REMOTE", remote.clone()));
    }
    vars
}

/// Single-quote a value for POSIX shells
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
