//! Project discovery, loading, and persistence within one root directory
//!
//! A directory is a project when it directly contains a parsable
//! [`PRIMARY_FILE`]. Listing is lenient and skips anything that fails to
//! load; single-project lookup is strict and reports the failure.

use crate::error::{Error, Result};
use crate::frontmatter;
use crate::types::Project;
use crate::types::ProjectMetadata;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::ErrorKind;
use tracing::{debug, info, warn};

/// Primary file holding a project's frontmatter and body
pub const PRIMARY_FILE: &str = "PROJECT.md";

/// Path of the primary file inside a project directory
pub fn primary_file_path(dir: &Utf8Path) -> Utf8PathBuf {
    dir.join(PRIMARY_FILE)
}

/// Load a project from its directory
///
/// The returned project has an empty folder; callers that know the folder
/// set it.
pub fn load_project(dir: &Utf8Path) -> Result<Project> {
    let path = primary_file_path(dir);
    let text = fs::read_to_string(&path).map_err(|e| Error::io("read", &path, e))?;
    let (metadata, body) = frontmatter::decode(&text).map_err(|e| Error::malformed(path.as_str(), e))?;

    if let Some(name) = dir.file_name() {
        if name != metadata.slug {
            warn!(
                "Directory {} holds project with slug {:?}; lookups use the directory name",
                dir, metadata.slug
            );
        }
    }

    Ok(Project {
        metadata,
        body,
        directory: dir.to_owned(),
        folder: String::new(),
    })
}

/// Overwrite a project directory's primary file
pub fn write_project_file(dir: &Utf8Path, metadata: &ProjectMetadata, body: &str) -> Result<()> {
    let path = primary_file_path(dir);
    let text = frontmatter::encode(metadata, body)?;
    fs::write(&path, text).map_err(|e| Error::io("write", &path, e))?;
    debug!("Wrote {}", path);
    Ok(())
}

/// List every loadable project directly under `root`, sorted by slug
///
/// Hidden entries, plain files and directories that fail to load are
/// skipped. A missing `root` yields an empty list.
pub fn list_projects(root: &Utf8Path) -> Result<Vec<Project>> {
    let entries = match root.read_dir_utf8() {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io("read directory", root, e)),
    };

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("read directory", root, e))?;
        let name = entry.file_name();
        if name.starts_with('.') {
            continue;
        }
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }

        let dir = entry.path();
        if !primary_file_path(dir).is_file() {
            continue;
        }

        match load_project(dir) {
            Ok(project) => projects.push(project),
            Err(e) => debug!("Skipping {}: {}", dir, e),
        }
    }

    sort_by_slug(&mut projects);
    Ok(projects)
}

pub(crate) fn sort_by_slug(projects: &mut [Project]) {
    projects.sort_by(|a, b| a.metadata.slug.cmp(&b.metadata.slug));
}

/// Find a project by directory name under `root`
///
/// Fails with [`Error::NotFound`] when `slug` is not a plain directory name
/// or `root/<slug>` lacks a primary file, and with
/// [`Error::MalformedDocument`] when the primary file cannot be decoded.
pub fn find_project(root: &Utf8Path, slug: &str) -> Result<Project> {
    let plain_name =
        !slug.is_empty() && !slug.contains(['/', '\\']) && slug != "." && slug != "..";
    let dir = root.join(slug);
    if !plain_name || !dir.is_dir() || !primary_file_path(&dir).is_file() {
        return Err(Error::not_found(slug, None));
    }
    load_project(&dir)
}

/// Rewrite a project's primary file from its in-memory state
///
/// Callers bump `updated_at` (see [`ProjectMetadata::touch`]) first.
pub fn save_project(project: &Project) -> Result<()> {
    write_project_file(&project.directory, &project.metadata, &project.body)?;
    info!("Updated project {}", project.metadata.slug);
    Ok(())
}

/// Recursively remove a project's directory
pub fn delete_project(project: &Project) -> Result<()> {
    fs::remove_dir_all(&project.directory)
        .map_err(|e| Error::io("remove directory", &project.directory, e))?;
    info!("Deleted project {} at {}", project.metadata.slug, project.directory);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::scaffold;
    use projects_core::ScaffoldLayout;
    use tempfile::TempDir;

    fn root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    fn create(root: &Utf8Path, slug: &str) -> Utf8PathBuf {
        scaffold(root, &ProjectMetadata::new(slug, ""), ScaffoldLayout::Minimal).unwrap()
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let projects = list_projects(&root(&temp).join("nope")).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_list_sorted_and_lenient() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        create(&root, "zeta");
        create(&root, "alpha");
        create(&root, "mid");

        // Corrupt primary file
        fs::write(root.join("mid").join(PRIMARY_FILE), "no frontmatter here").unwrap();
        // Directory without a primary file
        fs::create_dir(root.join("empty")).unwrap();
        // Hidden directory and plain file
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join("PROJECTS.md"), "# Projects\n").unwrap();

        let slugs: Vec<_> = list_projects(&root)
            .unwrap()
            .into_iter()
            .map(|p| p.metadata.slug)
            .collect();
        assert_eq!(slugs, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_find_strict_on_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        create(&root, "demo");
        fs::write(root.join("demo").join(PRIMARY_FILE), "---\nslug: demo\n").unwrap();

        let err = find_project(&root, "demo").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
        assert!(err.to_string().contains(PRIMARY_FILE));
    }

    #[test]
    fn test_find_missing() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::create_dir(root.join("bare")).unwrap();

        assert!(find_project(&root, "ghost").unwrap_err().is_not_found());
        assert!(find_project(&root, "bare").unwrap_err().is_not_found());
        assert!(find_project(&root, "").unwrap_err().is_not_found());
        assert!(find_project(&root.join("bare"), "..").unwrap_err().is_not_found());
    }

    #[test]
    fn test_save_and_delete() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        create(&root, "demo");

        let mut project = find_project(&root, "demo").unwrap();
        project.metadata.tags = vec!["rust".to_string()];
        project.metadata.touch();
        save_project(&project).unwrap();

        let reloaded = find_project(&root, "demo").unwrap();
        assert_eq!(reloaded.metadata.tags, vec!["rust"]);
        assert_eq!(reloaded.body, project.body);

        delete_project(&reloaded).unwrap();
        assert!(!root.join("demo").exists());
        assert!(find_project(&root, "demo").unwrap_err().is_not_found());
    }

    #[test]
    fn test_lookup_is_directory_keyed() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        let dir = create(&root, "demo");
        let meta = ProjectMetadata::new("renamed", "Renamed");
        write_project_file(&dir, &meta, "").unwrap();

        let project = find_project(&root, "demo").unwrap();
        assert_eq!(project.metadata.slug, "renamed");
        assert!(find_project(&root, "renamed").unwrap_err().is_not_found());
    }
}
