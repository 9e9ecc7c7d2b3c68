//! Folder namespace: one level of named, account-bound project roots
//!
//! The projects directory is itself a project root (the top level). Each
//! configured folder is a subdirectory of it holding its own projects.

use crate::error::{Error, Result};
use crate::slug::validate_slug;
use crate::store::{find_project, list_projects, load_project, sort_by_slug};
use crate::types::Project;
use camino::{Utf8Path, Utf8PathBuf};
use projects_core::{Folder, ProjectsConfig};
use std::fs;
use tracing::{debug, info, warn};

/// Lookup and listing across the top level and every configured folder
#[derive(Debug, Clone, Copy)]
pub struct FolderNamespace<'a> {
    config: &'a ProjectsConfig,
}

impl<'a> FolderNamespace<'a> {
    pub fn new(config: &'a ProjectsConfig) -> Self {
        Self { config }
    }

    /// Top-level projects directory
    pub fn root(&self) -> &Utf8Path {
        &self.config.projects_dir
    }

    /// Directory of a folder, without checking it is configured
    pub fn folder_dir(&self, folder: &str) -> Utf8PathBuf {
        self.config.projects_dir.join(folder)
    }

    /// Project root for a destination: empty means top level, otherwise the
    /// folder must be configured
    pub fn root_for(&self, folder: &str) -> Result<Utf8PathBuf> {
        if folder.is_empty() {
            return Ok(self.config.projects_dir.clone());
        }
        if self.config.folder_by_name(folder).is_none() {
            return Err(Error::folder_not_configured(folder));
        }
        Ok(self.folder_dir(folder))
    }

    /// Configured folder a project lives in, if any
    pub fn folder_of(&self, project: &Project) -> Option<&'a Folder> {
        if project.folder.is_empty() {
            None
        } else {
            self.config.folder_by_name(&project.folder)
        }
    }

    /// Find a project by slug
    ///
    /// With a folder hint only that folder is searched. Otherwise the top
    /// level is searched first, then each configured folder in
    /// configuration order.
    pub fn find(&self, slug: &str, folder_hint: Option<&str>) -> Result<Project> {
        if let Some(folder) = folder_hint.filter(|f| !f.is_empty()) {
            validate_slug(folder)?;
            return match find_project(&self.folder_dir(folder), slug) {
                Ok(project) => Ok(tag(project, folder)),
                Err(e) if e.is_not_found() => Err(Error::not_found(slug, Some(folder))),
                Err(e) => Err(e),
            };
        }

        match find_project(self.root(), slug) {
            Ok(project) => return Ok(project),
            Err(e) if !e.is_not_found() => return Err(e),
            Err(_) => {}
        }

        for folder in &self.config.folders {
            match find_project(&self.folder_dir(&folder.name), slug) {
                Ok(project) => return Ok(tag(project, &folder.name)),
                Err(e) if !e.is_not_found() => return Err(e),
                Err(_) => debug!("{} not in folder {}", slug, folder.name),
            }
        }

        Err(Error::not_found(slug, None))
    }

    /// List projects, tagged with their folder and sorted by slug
    ///
    /// With a folder hint only that folder is listed. Otherwise the top
    /// level and every configured folder are combined; an unreadable folder
    /// is skipped but an unreadable top level is an error.
    pub fn list_all(&self, folder_hint: Option<&str>) -> Result<Vec<Project>> {
        if let Some(folder) = folder_hint.filter(|f| !f.is_empty()) {
            validate_slug(folder)?;
            let projects = list_projects(&self.folder_dir(folder))?;
            return Ok(projects.into_iter().map(|p| tag(p, folder)).collect());
        }

        let mut all = list_projects(self.root())?;

        for folder in &self.config.folders {
            match list_projects(&self.folder_dir(&folder.name)) {
                Ok(projects) => all.extend(projects.into_iter().map(|p| tag(p, &folder.name))),
                Err(e) => warn!("Skipping folder {}: {}", folder.name, e),
            }
        }

        sort_by_slug(&mut all);
        Ok(all)
    }

    /// Move a project to another folder (empty for top level)
    ///
    /// Validation happens before any filesystem change. The move itself is
    /// a single rename; the primary file is not rewritten.
    pub fn move_project(&self, project: &Project, destination: &str) -> Result<Project> {
        let dest_root = self.root_for(destination)?;
        let name = project
            .directory
            .file_name()
            .ok_or_else(|| Error::not_found(project.slug(), None))?
            .to_string();
        let dest_dir = dest_root.join(&name);

        if dest_dir == project.directory || project.folder == destination {
            let location = if destination.is_empty() {
                "the top level".to_string()
            } else {
                format!("folder {:?}", destination)
            };
            return Err(Error::SameLocation {
                slug: name,
                location,
            });
        }

        if dest_dir.exists() {
            return Err(Error::already_exists(dest_dir.as_str()));
        }

        fs::create_dir_all(&dest_root).map_err(|e| Error::io("create directory", &dest_root, e))?;
        fs::rename(&project.directory, &dest_dir)
            .map_err(|e| Error::io("move project to", &dest_dir, e))?;

        info!("Moved {} from {} to {}", name, project.directory, dest_dir);

        let moved = load_project(&dest_dir)?;
        Ok(tag(moved, destination))
    }
}

fn tag(mut project: Project, folder: &str) -> Project {
    project.folder = folder.to_string();
    project
}

/// Register a new folder and create its directory
///
/// The caller persists the configuration afterwards.
pub fn add_folder(config: &mut ProjectsConfig, name: &str, account: &str) -> Result<Utf8PathBuf> {
    validate_slug(name)?;
    if config.folder_by_name(name).is_some() {
        return Err(Error::FolderExists {
            name: name.to_string(),
        });
    }

    let dir = config.projects_dir.join(name);
    fs::create_dir_all(&dir).map_err(|e| Error::io("create directory", &dir, e))?;

    config.folders.push(Folder::new(name, account));
    info!("Added folder {} ({})", name, account);
    Ok(dir)
}

/// Remove a folder from configuration, leaving its directory untouched
///
/// The caller persists the configuration afterwards.
pub fn remove_folder(config: &mut ProjectsConfig, name: &str) -> Result<Folder> {
    let index = config
        .folders
        .iter()
        .position(|f| f.name == name)
        .ok_or_else(|| Error::folder_not_configured(name))?;

    let folder = config.folders.remove(index);
    info!("Removed folder {} from configuration", name);
    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::scaffold;
    use crate::types::ProjectMetadata;
    use projects_core::ScaffoldLayout;
    use serial_test::serial;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        config: ProjectsConfig,
    }

    fn fixture(folders: &[&str]) -> Fixture {
        std::env::remove_var(projects_core::config::PROJECTS_DIR_ENV);
        let temp = TempDir::new().unwrap();
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let config_path = base.join("config.toml");
        let projects_dir = base.join("projects");
        std::fs::write(
            &config_path,
            format!("projects_dir = \"{}\"\n", projects_dir),
        )
        .unwrap();

        let mut config = ProjectsConfig::load_from_path(&config_path).unwrap();
        for folder in folders {
            add_folder(&mut config, folder, "someone").unwrap();
        }
        Fixture {
            _temp: temp,
            config,
        }
    }

    fn create(root: &Utf8Path, slug: &str) {
        scaffold(root, &ProjectMetadata::new(slug, ""), ScaffoldLayout::Minimal).unwrap();
    }

    #[test]
    #[serial]
    fn test_find_prefers_top_level_then_folder_order() {
        let fx = fixture(&["work", "personal"]);
        let ns = FolderNamespace::new(&fx.config);
        create(ns.root(), "shared");
        create(&ns.folder_dir("work"), "shared");
        create(&ns.folder_dir("work"), "report");
        create(&ns.folder_dir("personal"), "report");
        create(&ns.folder_dir("personal"), "blog");

        assert_eq!(ns.find("shared", None).unwrap().folder, "");
        assert_eq!(ns.find("report", None).unwrap().folder, "work");
        assert_eq!(ns.find("blog", None).unwrap().folder, "personal");
        assert_eq!(ns.find("report", Some("personal")).unwrap().folder, "personal");

        let err = ns.find("blog", Some("work")).unwrap_err();
        assert_eq!(err.to_string(), "Project \"blog\" not found in folder \"work\"");
        assert!(ns.find("ghost", None).unwrap_err().is_not_found());
    }

    #[test]
    #[serial]
    fn test_list_all_tags_and_sorts() {
        let fx = fixture(&["work"]);
        let ns = FolderNamespace::new(&fx.config);
        create(ns.root(), "zulu");
        create(&ns.folder_dir("work"), "alpha");
        create(ns.root(), "mike");

        let all = ns.list_all(None).unwrap();
        let pairs: Vec<_> = all
            .iter()
            .map(|p| (p.metadata.slug.as_str(), p.folder.as_str()))
            .collect();
        assert_eq!(pairs, vec![("alpha", "work"), ("mike", ""), ("zulu", "")]);

        let only_work = ns.list_all(Some("work")).unwrap();
        assert_eq!(only_work.len(), 1);
        assert_eq!(only_work[0].folder, "work");
    }

    #[test]
    #[serial]
    fn test_list_all_skips_unreadable_folder() {
        let fx = fixture(&["work"]);
        let ns = FolderNamespace::new(&fx.config);
        create(ns.root(), "top");
        // Replace the folder directory with a plain file
        std::fs::remove_dir(ns.folder_dir("work")).unwrap();
        std::fs::write(ns.folder_dir("work"), "not a directory").unwrap();

        let all = ns.list_all(None).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].metadata.slug, "top");
    }

    #[test]
    #[serial]
    fn test_list_all_fails_on_unreadable_top_level() {
        let fx = fixture(&["work"]);
        let ns = FolderNamespace::new(&fx.config);
        std::fs::remove_dir_all(ns.root()).unwrap();
        std::fs::write(ns.root(), "not a directory").unwrap();

        let err = ns.list_all(None).unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "got {err:?}");
    }

    #[test]
    #[serial]
    fn test_move_between_levels() {
        let fx = fixture(&["work"]);
        let ns = FolderNamespace::new(&fx.config);
        create(ns.root(), "demo");

        let project = ns.find("demo", None).unwrap();
        let before = std::fs::read_to_string(project.primary_file()).unwrap();

        let moved = ns.move_project(&project, "work").unwrap();
        assert_eq!(moved.folder, "work");
        assert_eq!(moved.directory, ns.folder_dir("work").join("demo"));
        assert!(!project.directory.exists());
        assert_eq!(std::fs::read_to_string(moved.primary_file()).unwrap(), before);

        let back = ns.move_project(&moved, "").unwrap();
        assert!(back.is_top_level());
        assert_eq!(back.directory, ns.root().join("demo"));
    }

    #[test]
    #[serial]
    fn test_move_rejections_leave_filesystem_untouched() {
        let fx = fixture(&["work"]);
        let ns = FolderNamespace::new(&fx.config);
        create(ns.root(), "demo");
        create(&ns.folder_dir("work"), "taken");
        create(ns.root(), "taken");
        let project = ns.find("demo", None).unwrap();

        let same = ns.move_project(&project, "").unwrap_err();
        assert!(matches!(same, Error::SameLocation { .. }));

        let missing = ns.move_project(&project, "nowhere").unwrap_err();
        assert!(matches!(missing, Error::FolderNotConfigured { .. }));
        assert!(!ns.folder_dir("nowhere").exists());

        let taken = ns.find("taken", None).unwrap();
        let clash = ns.move_project(&taken, "work").unwrap_err();
        assert!(matches!(clash, Error::AlreadyExists { .. }));

        assert!(project.directory.join("PROJECT.md").is_file());
        assert!(taken.directory.join("PROJECT.md").is_file());
    }

    #[test]
    #[serial]
    fn test_add_and_remove_folder() {
        let mut fx = fixture(&[]);

        let dir = add_folder(&mut fx.config, "clients", "acme-bot").unwrap();
        assert!(dir.is_dir());
        assert_eq!(fx.config.folders, vec![Folder::new("clients", "acme-bot")]);

        assert!(matches!(
            add_folder(&mut fx.config, "clients", "other"),
            Err(Error::FolderExists { .. })
        ));
        assert!(matches!(
            add_folder(&mut fx.config, "Bad Name", "x"),
            Err(Error::InvalidSlug { .. })
        ));

        let removed = remove_folder(&mut fx.config, "clients").unwrap();
        assert_eq!(removed.github_account, "acme-bot");
        assert!(fx.config.folders.is_empty());
        assert!(dir.is_dir());

        assert!(matches!(
            remove_folder(&mut fx.config, "clients"),
            Err(Error::FolderNotConfigured { .. })
        ));
    }
}
