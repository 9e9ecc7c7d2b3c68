//! Error types for projects-store

use crate::frontmatter::FrontmatterError;
use thiserror::Error;

/// Result type alias using projects-store's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project registry error types
#[derive(Error, Debug)]
pub enum Error {
    /// Slug (or folder name) failed validation
    #[error("Invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: String },

    /// Status is not one of the known values
    #[error("Invalid status {status:?}: must be active, paused, or archived")]
    InvalidStatus { status: String },

    /// Target directory already present
    #[error("Already exists: {path}")]
    AlreadyExists { path: String },

    /// Project lookup miss
    #[error("Project {slug:?} not found{}", folder_suffix(.folder))]
    NotFound { slug: String, folder: Option<String> },

    /// Primary project file violates the frontmatter contract
    #[error("Malformed project file {path}: {source}")]
    MalformedDocument {
        path: String,
        #[source]
        source: FrontmatterError,
    },

    /// Folder is not present in configuration
    #[error("Folder {name:?} not configured; run 'projects folder add {name} --account <gh-user>' first")]
    FolderNotConfigured { name: String },

    /// Folder already present in configuration
    #[error("Folder {name:?} already exists")]
    FolderExists { name: String },

    /// Move source and destination are the same
    #[error("Project {slug:?} is already in {location}")]
    SameLocation { slug: String, location: String },

    /// Filesystem operation failed
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// git/gh failed or could not be spawned
    #[error("{program} failed: {message}")]
    ExternalTool { program: String, message: String },

    /// Metadata could not be serialized
    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),
}

fn folder_suffix(folder: &Option<String>) -> String {
    folder
        .as_ref()
        .map(|f| format!(" in folder {f:?}"))
        .unwrap_or_default()
}

impl Error {
    /// Create an invalid slug error
    pub fn invalid_slug(slug: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSlug {
            slug: slug.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid status error
    pub fn invalid_status(status: impl Into<String>) -> Self {
        Self::InvalidStatus {
            status: status.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a not found error, optionally scoped to a folder
    pub fn not_found(slug: impl Into<String>, folder: Option<&str>) -> Self {
        Self::NotFound {
            slug: slug.into(),
            folder: folder.map(str::to_string),
        }
    }

    /// Create a malformed document error
    pub fn malformed(path: impl Into<String>, source: FrontmatterError) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            source,
        }
    }

    /// Create a folder not configured error
    pub fn folder_not_configured(name: impl Into<String>) -> Self {
        Self::FolderNotConfigured { name: name.into() }
    }

    /// Create an IO error naming the attempted operation and path
    pub fn io(operation: &'static str, path: impl AsRef<str>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.as_ref().to_string(),
            source,
        }
    }

    /// Create an external tool error
    pub fn external_tool(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool {
            program: program.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            Error::not_found("demo", None).to_string(),
            "Project \"demo\" not found"
        );
        assert_eq!(
            Error::not_found("demo", Some("work")).to_string(),
            "Project \"demo\" not found in folder \"work\""
        );
    }

    #[test]
    fn test_io_message_names_path() {
        let err = Error::io(
            "create directory",
            "/tmp/x",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(err.to_string().starts_with("Failed to create directory /tmp/x"));
    }
}
