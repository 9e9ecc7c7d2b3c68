//! Slug validation and derivation
//!
//! Slugs identify projects and folders and double as directory names.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Maximum slug length in characters
pub const MAX_SLUG_LEN: usize = 64;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex is valid"));

/// Check that `slug` is 1-64 lowercase alphanumerics separated by single hyphens
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::invalid_slug(slug, "slug cannot be empty"));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(Error::invalid_slug(
            slug,
            format!("slug must be at most {} characters", MAX_SLUG_LEN),
        ));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(Error::invalid_slug(
            slug,
            "use lowercase letters, digits, and single hyphens (e.g. my-project)",
        ));
    }
    Ok(())
}

/// Derive a slug from free text
///
/// Diacritics are stripped via NFD decomposition, anything that is not an
/// ASCII letter, digit or separator is dropped. The result may be empty.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());

    for c in text.nfd() {
        match c {
            'a'..='z' | '0'..='9' => slug.push(c),
            'A'..='Z' => slug.push(c.to_ascii_lowercase()),
            ' ' | '-' | '_' | '\t' | '\n' => {
                if !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            }
            _ => {}
        }
    }

    let mut slug = slug.trim_matches('-').to_string();
    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        slug = slug.trim_end_matches('-').to_string();
    }
    slug
}
