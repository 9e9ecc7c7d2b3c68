//! Command handlers

pub mod create;
pub mod delete;
pub mod edit;
pub mod folder;
pub mod list;
pub mod load;
pub mod memory;
pub mod open;
pub mod push;
pub mod relocate;
pub mod status;
pub mod update;
pub mod view;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Resolve a dot-separated path (`meta.title`, `meta.tags.0`) in a JSON value
pub fn extract_field<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Render a field value for plain output; strings print without quotes
pub fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Serialize `item` and print the value at `path`
pub fn print_field<T: Serialize>(item: &T, path: &str) -> Result<()> {
    let value = serde_json::to_value(item)?;
    let field = extract_field(&value, path).ok_or_else(|| anyhow!("unknown field: {}", path))?;
    println!("{}", field_text(field));
    Ok(())
}

/// Timestamp as stored in frontmatter, or `-` when unset
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| "-".to_string())
}
