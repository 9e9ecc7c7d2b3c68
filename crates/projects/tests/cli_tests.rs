//! End-to-end tests driving the `projects` binary
//!
//! Each test gets its own scratch home, config file, and projects
//! directory. Output is piped, so the binary runs non-interactively.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config = format!(
            "projects_dir = '{}'\nauto_git_init = false\neditor = 'true'\n",
            temp.path().join("projects").display()
        );
        fs::write(temp.path().join("config.toml"), config).unwrap();
        Self { temp }
    }

    fn projects_dir(&self) -> PathBuf {
        self.temp.path().join("projects")
    }

    fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.toml")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_projects"))
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .env("HOME", self.temp.path())
            .env("RUST_LOG", "error")
            .env_remove("PROJECTS_DIR")
            .output()
            .expect("Failed to execute projects binary")
    }

    /// Run and require success, returning stdout
    fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }

    fn json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        serde_json::from_str(&self.ok(&full)).unwrap()
    }

    /// Run and require failure, returning stderr
    fn fails(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(!output.status.success(), "{:?} unexpectedly succeeded", args);
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}

fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

#[test]
fn test_create_list_and_view() {
    let sb = Sandbox::new();

    let created = sb.json(&["create", "--title", "My Cool App!", "--tags", "rust, cli"]);
    assert_eq!(created["status"], "created");
    assert_eq!(created["slug"], "my-cool-app");
    assert!(created.get("folder").is_none());

    let dir = sb.projects_dir().join("my-cool-app");
    assert!(exists(dir.join("PROJECT.md")));
    assert!(exists(dir.join("memory/MEMORY.md")));
    assert!(exists(sb.projects_dir().join("PROJECTS.md")));

    let listed = sb.json(&["list"]);
    let projects = listed.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["meta"]["title"], "My Cool App!");
    assert_eq!(projects[0]["meta"]["tags"], serde_json::json!(["rust", "cli"]));

    assert_eq!(sb.ok(&["view", "my-cool-app", "--field", "meta.status"]), "active\n");
    assert_eq!(sb.ok(&["list", "--field", "meta.slug"]), "my-cool-app\n");
}

#[test]
fn test_create_rejects_bad_input() {
    let sb = Sandbox::new();

    sb.fails(&["create", "Not_A_Slug"]);
    sb.fails(&["create", "demo", "--status", "someday"]);
    sb.fails(&["create", "demo", "--folder", "work"]);
    assert!(!exists(sb.projects_dir().join("demo")));

    sb.ok(&["create", "demo"]);
    let stderr = sb.fails(&["create", "demo"]);
    assert!(stderr.to_lowercase().contains("already exists"), "stderr: {}", stderr);
}

#[test]
fn test_update_bumps_timestamp() {
    let sb = Sandbox::new();
    let created = sb.json(&["create", "demo"]);

    let stderr = sb.fails(&["update", "demo"]);
    assert!(stderr.contains("no fields to update"), "stderr: {}", stderr);
    sb.fails(&["update", "demo", "--status", "done"]);

    let updated = sb.json(&["update", "demo", "--status", "paused", "--title", "Renamed"]);
    assert_eq!(updated["status"], "updated");
    assert_ne!(updated["updated_at"], created["created_at"]);

    let view = sb.json(&["view", "demo"]);
    assert_eq!(view["meta"]["status"], "paused");
    assert_eq!(view["meta"]["title"], "Renamed");
}

#[test]
fn test_delete_requires_force_when_piped() {
    let sb = Sandbox::new();
    sb.ok(&["create", "demo"]);

    let stderr = sb.fails(&["delete", "demo"]);
    assert!(stderr.contains("--force"), "stderr: {}", stderr);
    assert!(exists(sb.projects_dir().join("demo")));

    let deleted = sb.json(&["delete", "demo", "--force"]);
    assert_eq!(deleted["status"], "deleted");
    assert!(!exists(sb.projects_dir().join("demo")));
    sb.fails(&["view", "demo"]);
}

#[test]
fn test_folders_and_move() {
    let sb = Sandbox::new();

    let added = sb.json(&["folder", "add", "work", "--account", "jack-work"]);
    assert_eq!(added["folder"], "work");
    assert_eq!(added["github_account"], "jack-work");
    assert!(fs::read_to_string(sb.config_path())
        .unwrap()
        .contains("jack-work"));
    sb.fails(&["folder", "add", "work", "--account", "someone"]);

    let created = sb.json(&["create", "api", "--folder", "work"]);
    assert_eq!(created["folder"], "work");
    assert!(exists(sb.projects_dir().join("work/api/PROJECT.md")));
    assert!(exists(sb.projects_dir().join("PROJECTS.md")));
    assert!(!exists(sb.projects_dir().join("work/PROJECTS.md")));

    sb.ok(&["create", "notes"]);
    assert_eq!(sb.ok(&["list", "--field", "folder", "--folder", "work"]), "work\n");
    assert_eq!(sb.json(&["list"]).as_array().unwrap().len(), 2);

    let moved = sb.json(&["move", "api", "--to", ""]);
    assert_eq!(moved["status"], "moved");
    assert_eq!(moved["from_folder"], "work");
    assert!(moved.get("to_folder").is_none());
    assert!(exists(sb.projects_dir().join("api/PROJECT.md")));
    assert!(!exists(sb.projects_dir().join("work/api")));

    sb.fails(&["move", "api", "--to", ""]);
    sb.fails(&["move", "api", "--to", "missing"]);

    let removed = sb.json(&["folder", "remove", "work"]);
    assert_eq!(removed["status"], "removed");
    assert!(exists(sb.projects_dir().join("work")));
    assert_eq!(sb.json(&["folder", "list"]), serde_json::json!([]));
}

#[test]
fn test_load_formats() {
    let sb = Sandbox::new();
    sb.ok(&["create", "demo", "--title", "It's Demo", "--tags", "a,b"]);

    let exports = sb.ok(&["load", "demo", "--export"]);
    assert!(exports.contains("export PROJECT_SLUG='demo'\n"));
    assert!(exports.contains(r"export PROJECT_TITLE='It'\''s Demo'"));
    assert!(exports.contains("export PROJECT_TAGS='a,b'\n"));
    assert!(!exports.contains("PROJECT_GIT_REMOTE"));

    let bash = sb.ok(&["load", "demo", "--bash"]);
    assert!(bash.starts_with("PROJECT_SLUG='demo'\n"));

    let json: Value = serde_json::from_str(&sb.ok(&["load", "demo"])).unwrap();
    assert_eq!(json["meta"]["slug"], "demo");
}

#[test]
fn test_memory_entries() {
    let sb = Sandbox::new();
    sb.ok(&["create", "demo", "--title", "Demo"]);

    let all = sb.json(&["memory", "demo"]);
    let headings: Vec<_> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["heading"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(headings, vec!["Demo - Memory", "Quick Facts", "Notes"]);

    let latest = sb.json(&["memory", "demo", "--latest", "1"]);
    assert_eq!(latest.as_array().unwrap().len(), 1);
    assert_eq!(latest[0]["heading"], "Notes");
}

#[test]
fn test_status_without_git() {
    let sb = Sandbox::new();
    sb.ok(&["create", "demo"]);

    let report = sb.json(&["status"]);
    assert_eq!(report[0]["slug"], "demo");
    assert_eq!(report[0]["has_project_md"], true);
    assert_eq!(report[0]["has_remote"], false);
}
