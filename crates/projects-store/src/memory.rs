//! Memory log parsing
//!
//! Splits a markdown notes file into entries, one per `#` or `##` heading.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;

/// Memory file path relative to a project directory
pub const MEMORY_FILE: &str = "memory/MEMORY.md";

/// One heading-delimited section of a memory file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryEntry {
    pub heading: String,
    pub content: String,
}

/// Parse memory entries from markdown text
///
/// Text before the first heading is ignored. Deeper headings (`###`) are
/// part of the surrounding entry's content.
pub fn parse_memory(text: &str) -> Vec<MemoryEntry> {
    let mut entries = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if line.starts_with("# ") || line.starts_with("## ") {
            if let Some((heading, lines)) = current.take() {
                entries.push(finish(heading, &lines));
            }
            let heading = line.trim_start_matches('#').trim().to_string();
            current = Some((heading, Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }

    if let Some((heading, lines)) = current {
        entries.push(finish(heading, &lines));
    }

    entries
}

fn finish(heading: String, lines: &[&str]) -> MemoryEntry {
    MemoryEntry {
        heading,
        content: lines.join("\n").trim().to_string(),
    }
}

/// Load entries from a memory file; a missing file yields no entries
pub fn load_memory_file(path: &Utf8Path) -> Result<Vec<MemoryEntry>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_memory(&text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(Error::io("read", path, e)),
    }
}

/// Memory file of a project directory
pub fn memory_path(project_dir: &Utf8Path) -> Utf8PathBuf {
    project_dir.join(MEMORY_FILE)
}

/// Load a project's memory entries
pub fn load_project_memory(project_dir: &Utf8Path) -> Result<Vec<MemoryEntry>> {
    load_memory_file(&memory_path(project_dir))
}

/// Last `n` entries; all of them when `n` is zero or at least the total
pub fn latest_entries(entries: &[MemoryEntry], n: usize) -> &[MemoryEntry] {
    if n == 0 || n >= entries.len() {
        entries
    } else {
        &entries[entries.len() - n..]
    }
}
