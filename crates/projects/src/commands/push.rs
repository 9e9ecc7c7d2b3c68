//! Push command: stage, commit, and publish a project

use anyhow::{bail, Context, Result};
use projects_store::save_project;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::PushArgs;
use crate::context::RuntimeContext;
use crate::output;

const DEFAULT_BRANCH: &str = "main";

#[derive(Serialize)]
struct PushResult<'a> {
    status: &'static str,
    slug: &'a str,
    remote: String,
}

pub fn run(args: PushArgs, ctx: &RuntimeContext) -> Result<()> {
    let mut project = ctx.find(&args.slug)?;
    let dir = project.directory.clone();
    let git = ctx.git();
    let github = ctx.github();
    let quiet = ctx.is_json();

    if !git.is_repo(&dir) {
        if !quiet {
            output::info("Setting up git...");
        }
        git.init(&dir).context("git init failed")?;
    }

    git.add_all(&dir).context("git add failed")?;
    if git.has_uncommitted(&dir).context("Failed to check for changes")? {
        git.commit(&dir, &args.message).context("git commit failed")?;
        if !quiet {
            output::success("Changes committed");
        }
    } else if !quiet {
        output::info("Nothing new to commit");
    }

    if let Some(folder) = ctx.namespace().folder_of(&project) {
        if let Err(e) = github.switch_account(&folder.github_account) {
            warn!("Could not switch gh account: {}", e);
            if !quiet {
                output::warning(&format!(
                    "could not switch gh to account {}: {}",
                    folder.github_account, e
                ));
            }
        }
    }

    let has_remote = git.has_remote(&dir);
    if !has_remote && !args.no_github {
        if !github.is_available() {
            bail!("no remote configured and gh CLI not available; add a remote manually or install gh");
        }

        let spinner = output::spinner(ctx.mode, "Creating GitHub repository...");
        let created = github.create_repo(
            &dir,
            project.slug(),
            ctx.config.github_org.as_deref(),
            !args.public,
        );
        spinner.finish_and_clear();
        let url = created.context("Failed to create GitHub repository")?;

        project.metadata.git_remote = Some(url.clone());
        if let Err(e) = save_project(&project) {
            warn!("Failed to record remote in {}: {}", project.primary_file(), e);
            if !quiet {
                output::warning(&format!("failed to save remote URL to PROJECT.md: {}", e));
            }
        }
        ctx.refresh_registry();

        if !quiet {
            output::success(&format!("Repository created: {}", url));
        }
    } else if has_remote {
        let branch = git
            .current_branch(&dir)
            .ok()
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        debug!("Pushing {} on branch {}", dir, branch);

        let spinner = output::spinner(ctx.mode, "Pushing...");
        let pushed = git.push_set_upstream(&dir, "origin", &branch);
        spinner.finish_and_clear();
        pushed.context("git push failed")?;

        if !quiet {
            output::success("Pushed to remote");
        }
    } else if !quiet {
        output::info("No remote configured; committed locally");
    }

    if ctx.is_json() {
        return ctx.print_json(&PushResult {
            status: "pushed",
            slug: project.slug(),
            remote: git.remote_url(&dir).unwrap_or_default(),
        });
    }
    Ok(())
}
