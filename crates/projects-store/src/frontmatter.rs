//! Frontmatter codec for the primary project file
//!
//! A document is a `---` marker line, a YAML metadata block, a closing
//! `---` line, then an optional body separated by one blank line:
//!
//! ```text
//! ---
//! title: Demo
//! slug: demo
//! status: active
//! created_at: 2024-01-02T15:04:05Z
//! updated_at: 2024-01-02T15:04:05Z
//! ---
//!
//! # Demo
//! ```

use crate::error::Result;
use crate::types::ProjectMetadata;
use thiserror::Error;

/// Marker line opening and closing the metadata block
pub const MARKER: &str = "---";

/// Ways a document can violate the frontmatter contract
#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("missing opening frontmatter delimiter")]
    MissingOpening,

    #[error("missing closing frontmatter delimiter")]
    MissingClosing,

    #[error("invalid frontmatter: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Encode metadata and body into document text
///
/// The output always ends with a newline. An empty body omits the body
/// section entirely.
pub fn encode(metadata: &ProjectMetadata, body: &str) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(metadata)?;

    let mut out = String::with_capacity(yaml.len() + body.len() + 16);
    out.push_str(MARKER);
    out.push('\n');
    out.push_str(&yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(MARKER);
    out.push('\n');

    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
    }

    Ok(out)
}

/// Decode document text into metadata and body
///
/// The body is everything after the closing marker line with at most one
/// leading blank line removed.
pub fn decode(text: &str) -> std::result::Result<(ProjectMetadata, String), FrontmatterError> {
    let mut lines = text.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim() == MARKER => {}
        _ => return Err(FrontmatterError::MissingOpening),
    }

    let mut yaml = String::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim() == MARKER {
            closed = true;
            break;
        }
        yaml.push_str(line);
    }

    if !closed {
        return Err(FrontmatterError::MissingClosing);
    }

    let metadata = if yaml.trim().is_empty() {
        ProjectMetadata::default()
    } else {
        serde_yaml_ng::from_str(&yaml)?
    };

    let rest: String = lines.collect();
    let body = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(&rest)
        .to_string();

    Ok((metadata, body))
}
