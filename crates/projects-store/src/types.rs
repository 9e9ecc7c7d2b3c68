//! Project metadata model

use crate::error::{Error, Result};
use camino::Utf8PathBuf;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Paused,
    Archived,
}

impl ProjectStatus {
    /// All known statuses, in display order
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::Paused, Self::Archived];

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "archived" => Ok(Self::Archived),
            other => Err(Error::invalid_status(other)),
        }
    }
}

/// Frontmatter record stored at the head of `PROJECT.md`
///
/// Fields missing from a decoded document keep their zero value; creation
/// defaults are only applied by [`ProjectMetadata::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMetadata {
    pub title: String,
    pub slug: String,

    /// Kept as text so hand-edited files with unknown values still load
    pub status: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_remote: Option<String>,
}

impl ProjectMetadata {
    /// Create metadata for a new project with creation defaults applied
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        let slug = slug.into();
        let title = title.into();
        let now = now();

        Self {
            title: if title.trim().is_empty() {
                slug.clone()
            } else {
                title
            },
            slug,
            status: ProjectStatus::Active.to_string(),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status.to_string();
        self
    }

    /// Parsed status, if the stored text is a known value
    pub fn parsed_status(&self) -> Option<ProjectStatus> {
        self.status.parse().ok()
    }

    /// Advance `updated_at`
    ///
    /// Timestamps have whole-second resolution, so when the clock has not
    /// moved past the previous value the new one is previous + 1s.
    pub fn touch(&mut self) {
        let now = now();
        let floor = self.updated_at.max(self.created_at);
        self.updated_at = Some(match floor {
            Some(prev) if now <= prev => prev + Duration::seconds(1),
            _ => now,
        });
    }

    /// Creation date (`YYYY-MM-DD`), or empty when unset
    pub fn created_date(&self) -> String {
        self.created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Parse comma-separated tags, trimming whitespace and dropping empties
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A project discovered on disk
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    #[serde(rename = "meta")]
    pub metadata: ProjectMetadata,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,

    #[serde(rename = "dir")]
    pub directory: Utf8PathBuf,

    /// Containing folder, empty for top-level projects
    #[serde(skip_serializing_if = "String::is_empty")]
    pub folder: String,
}

impl Project {
    pub fn slug(&self) -> &str {
        &self.metadata.slug
    }

    /// Path to the primary file
    pub fn primary_file(&self) -> Utf8PathBuf {
        self.directory.join(crate::store::PRIMARY_FILE)
    }

    /// Whether the project lives at the top level of the projects directory
    pub fn is_top_level(&self) -> bool {
        self.folder.is_empty()
    }
}

/// `YYYY-MM-DDTHH:MM:SSZ` timestamps, absent or empty meaning unset
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => {
                if let Ok(t) = DateTime::parse_from_rfc3339(s) {
                    return Ok(Some(t.with_timezone(&Utc)));
                }
                NaiveDateTime::parse_from_str(s, FORMAT)
                    .map(|t| Some(t.and_utc()))
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}
