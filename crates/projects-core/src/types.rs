//! Shared types for configuration and presentation

use serde::{Deserialize, Serialize};

/// A named partition of the projects directory bound to a GitHub account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name, also the subdirectory name under the projects directory
    pub name: String,

    /// GitHub account used when pushing projects that live in this folder
    #[serde(default)]
    pub github_account: String,
}

impl Folder {
    /// Create a new folder definition
    pub fn new(name: impl Into<String>, github_account: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            github_account: github_account.into(),
        }
    }

    /// Whether the name is usable as a folder subdirectory: 1-64 lowercase
    /// alphanumerics separated by single hyphens
    pub fn has_valid_name(&self) -> bool {
        self.name.len() <= 64
            && self.name.split('-').all(|part| {
                !part.is_empty()
                    && part
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            })
    }
}

/// Directory layout produced when scaffolding a new project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldLayout {
    /// docs, memory, context and tasks areas only
    Minimal,
    /// Minimal plus code/, private/, USAGE.md and a .gitignore
    #[default]
    Full,
}

impl ScaffoldLayout {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for ScaffoldLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How command results are rendered
///
/// Resolved once per invocation and passed to every command explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Styled output with prompts (stdout is a terminal)
    Interactive,
    /// Plain text, never prompts
    Plain,
    /// Machine-readable JSON on stdout
    Json,
}

impl OutputMode {
    /// Resolve the output mode from the `--json` flag and terminal detection
    pub fn resolve(json: bool, stdout_is_terminal: bool) -> Self {
        if json {
            Self::Json
        } else if stdout_is_terminal {
            Self::Interactive
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Whether the user can be prompted
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive)
    }
}
