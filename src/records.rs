//! Sidecar record types and loading.
//!
//! Two kinds of sidecar file drive the compiler:
//!
//! - **Root sidecar** (`rss_root.json`): one per site, holds channel-level
//!   metadata plus the two bits of configuration the compiler needs: which
//!   subtree is "the site" (`rootDir`) and where the compiled feed goes
//!   (`rssFilename`).
//! - **Item sidecar** (`rss_items.json`): one per post directory, an ordered
//!   JSON array of post records. Array order is meaningful: it is the
//!   tiebreak order when two posts share a `pubDate`.
//!
//! ## Placeholder values
//!
//! The `root` and `post` commands write template records whose required
//! fields carry reserved placeholder strings (`TITLE`, `URL`, `DESCRIPTION`,
//! `AUTHOR`). The user replaces them with a text editor; a compile refuses to
//! run while any required field still equals its placeholder. Detection is
//! plain value equality; each field has exactly one reserved placeholder,
//! exposed through [`placeholder_for`].
//!
//! ## Schema strictness
//!
//! Sidecar structs use `deny_unknown_fields`, so a typo like `"titel"` is a
//! [`ParseError`] at load time rather than a silently ignored key. Absent
//! required keys also fail at load; *blank* values that are present parse
//! fine and are the validator's business.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the per-site root sidecar, found by upward search.
pub const ROOT_SIDECAR: &str = "rss_root.json";
/// File name of the per-directory item sidecar, found by downward search.
pub const ITEMS_SIDECAR: &str = "rss_items.json";

/// Template placeholder for `title` fields.
pub const PLACEHOLDER_TITLE: &str = "TITLE";
/// Template placeholder for the root `link` field.
pub const PLACEHOLDER_LINK: &str = "URL";
/// Template placeholder for `description` fields.
pub const PLACEHOLDER_DESCRIPTION: &str = "DESCRIPTION";
/// Template placeholder for `author` and `defaultAuthor` fields.
pub const PLACEHOLDER_AUTHOR: &str = "AUTHOR";
/// Template placeholder the `img` command leaves in a CDATA-wrapped
/// description's `<img src="...">` slot.
pub const PLACEHOLDER_IMG_SRC: &str = "IMG_SRC";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid sidecar {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The per-site record. Exactly one governs a compile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RootRecord {
    /// Channel title.
    pub title: String,
    /// Site base URL; item links are built by appending path segments to it.
    pub link: String,
    /// Channel description.
    pub description: String,
    /// Subtree that is "the site" for URL purposes, relative to the
    /// directory holding this record. `"."` means the record's own directory.
    pub root_dir: String,
    /// Name of the compiled feed file, written next to this record.
    pub rss_filename: String,
    /// Fallback author for items that don't set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_author: Option<String>,
}

impl RootRecord {
    /// The record the `root` command writes: placeholders for the fields the
    /// user must edit, real defaults for the two configuration fields.
    pub fn template() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            link: PLACEHOLDER_LINK.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            root_dir: ".".to_string(),
            rss_filename: "rss.xml".to_string(),
            default_author: Some(PLACEHOLDER_AUTHOR.to_string()),
        }
    }

    /// `defaultAuthor` if it has been edited to a real value.
    ///
    /// A blank or still-placeholder value counts as "not configured": the
    /// field is optional, so an unedited template must not leak `AUTHOR`
    /// into the feed or block a compile.
    pub fn real_default_author(&self) -> Option<&str> {
        self.default_author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty() && *a != PLACEHOLDER_AUTHOR)
    }
}

/// One post record from an item sidecar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ItemRecord {
    /// The post's HTML file name within its directory. Set by `post`,
    /// never blank.
    pub filename: String,
    /// Post title.
    pub title: String,
    /// Post description. May be CDATA-wrapped by the `img` command.
    pub description: String,
    /// Per-item author; falls back to the root's `defaultAuthor`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date: RFC 2822, RFC 3339, or bare `YYYY-MM-DD`.
    pub pub_date: String,
}

impl ItemRecord {
    /// The record the `post` command appends.
    ///
    /// `author_seed` is the root's configured `defaultAuthor` when real;
    /// otherwise the `AUTHOR` placeholder goes in so the field is visible
    /// for editing.
    pub fn template(filename: &str, author_seed: Option<&str>, pub_date: String) -> Self {
        Self {
            filename: filename.to_string(),
            title: PLACEHOLDER_TITLE.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            author: Some(
                author_seed
                    .unwrap_or(PLACEHOLDER_AUTHOR)
                    .to_string(),
            ),
            pub_date,
        }
    }
}

/// The reserved template placeholder for a field, by its on-disk key.
pub fn placeholder_for(field: &str) -> Option<&'static str> {
    match field {
        "title" => Some(PLACEHOLDER_TITLE),
        "link" => Some(PLACEHOLDER_LINK),
        "description" => Some(PLACEHOLDER_DESCRIPTION),
        "author" | "defaultAuthor" => Some(PLACEHOLDER_AUTHOR),
        _ => None,
    }
}

/// Whether `value` is exactly the reserved placeholder for `field`.
pub fn is_placeholder(field: &str, value: &str) -> bool {
    placeholder_for(field) == Some(value)
}

/// Load the root sidecar at `path`.
pub fn load_root(path: &Path) -> Result<RootRecord, ParseError> {
    let raw = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an item sidecar at `path`, preserving array order.
pub fn load_items(path: &Path) -> Result<Vec<ItemRecord>, ParseError> {
    let raw = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize records back to `path`, pretty-printed with a trailing newline
/// so the file diffs cleanly under version control.
pub fn save_items(path: &Path, items: &[ItemRecord]) -> Result<(), ParseError> {
    let mut json = serde_json::to_string_pretty(items).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    json.push('\n');
    fs::write(path, json).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a root record to `path`.
pub fn save_root(path: &Path, root: &RootRecord) -> Result<(), ParseError> {
    let mut json = serde_json::to_string_pretty(root).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    json.push('\n');
    fs::write(path, json).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })
}
