//! Folder namespace lookups, listings, and moves

mod common;

use common::Workspace;
use projects_store::{list_projects, Error, FolderNamespace, PRIMARY_FILE};
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn test_federated_listing_and_lookup() {
    let ws = Workspace::new(&[("work", "jack-work"), ("personal", "jack")]);
    ws.create(ws.root(), "notes", "Notes");
    ws.create(&ws.folder("work"), "api", "API");
    ws.create(&ws.folder("personal"), "blog", "Blog");

    let ns = FolderNamespace::new(&ws.config);
    let listed: Vec<_> = ns
        .list_all(None)
        .unwrap()
        .into_iter()
        .map(|p| (p.metadata.slug, p.folder))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("api".to_string(), "work".to_string()),
            ("blog".to_string(), "personal".to_string()),
            ("notes".to_string(), String::new()),
        ]
    );

    let api = ns.find("api", None).unwrap();
    assert_eq!(api.folder, "work");
    assert_eq!(
        ns.folder_of(&api).map(|f| f.github_account.as_str()),
        Some("jack-work")
    );
    assert!(ns.folder_of(&ns.find("notes", None).unwrap()).is_none());

    // Top-level registry only sees top-level projects
    assert_eq!(list_projects(ws.root()).unwrap().len(), 1);
}

#[test]
#[serial]
fn test_folder_hint_scopes_search() {
    let ws = Workspace::new(&[("work", "jack-work")]);
    ws.create(ws.root(), "notes", "");

    let ns = FolderNamespace::new(&ws.config);
    let err = ns.find("notes", Some("work")).unwrap_err();
    assert!(err.is_not_found());
    assert!(ns.list_all(Some("work")).unwrap().is_empty());
}

#[test]
#[serial]
fn test_move_round_trip_preserves_content() {
    let ws = Workspace::new(&[("work", "jack-work")]);
    let original_dir = ws.create(ws.root(), "demo", "Demo");
    let original = fs::read_to_string(original_dir.join(PRIMARY_FILE)).unwrap();

    let ns = FolderNamespace::new(&ws.config);
    let project = ns.find("demo", None).unwrap();
    let moved = ns.move_project(&project, "work").unwrap();

    assert!(!original_dir.exists());
    assert_eq!(moved.directory, ws.folder("work").join("demo"));
    assert_eq!(
        fs::read_to_string(moved.directory.join(PRIMARY_FILE)).unwrap(),
        original
    );
    assert_eq!(ns.find("demo", None).unwrap().folder, "work");
}

#[test]
#[serial]
fn test_move_failures_have_no_side_effects() {
    let ws = Workspace::new(&[("work", "jack-work")]);
    let dir = ws.create(&ws.folder("work"), "demo", "Demo");
    let ns = FolderNamespace::new(&ws.config);
    let project = ns.find("demo", None).unwrap();

    assert!(matches!(
        ns.move_project(&project, "work"),
        Err(Error::SameLocation { .. })
    ));
    assert!(matches!(
        ns.move_project(&project, "archive"),
        Err(Error::FolderNotConfigured { .. })
    ));

    assert!(dir.join(PRIMARY_FILE).is_file());
    assert!(!ws.folder("archive").exists());
    assert!(!ws.root().join("demo").exists());
}
