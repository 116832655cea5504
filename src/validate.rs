//! Record validation: the gate between hand-edited sidecars and the feed.
//!
//! Validation answers one question per field: has the user actually filled
//! this in? Three ways to fail, each a [`Problem`] variant:
//!
//! - a required field is present but blank,
//! - a required field still equals its template placeholder,
//! - a `pubDate` that none of the accepted formats can parse.
//!
//! (A field whose *key* is absent never gets this far; that is a
//! [`ParseError`](crate::records::ParseError) at load time.)
//!
//! Validators return every violation they find rather than the first, so
//! `check` can print a complete fix-it list in one pass. `make` looks only
//! at the head of the list and aborts.

use crate::dates;
use crate::records::{
    ItemRecord, PLACEHOLDER_IMG_SRC, RootRecord, is_placeholder,
};
use std::fmt;
use std::path::{Path, PathBuf};

/// What is wrong with a field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Missing,
    Placeholder(&'static str),
    InvalidDate(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing => write!(f, "is required but blank"),
            Problem::Placeholder(p) => {
                write!(f, "still carries the template placeholder {p}")
            }
            Problem::InvalidDate(raw) => write!(
                f,
                "has unrecognized date {raw:?} (expected RFC 2822, RFC 3339, or YYYY-MM-DD)"
            ),
        }
    }
}

/// A single validation failure, locatable by file and field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub file: PathBuf,
    pub field: &'static str,
    pub problem: Problem,
}

impl Violation {
    fn new(file: &Path, field: &'static str, problem: Problem) -> Self {
        Self {
            file: file.to_path_buf(),
            field,
            problem,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: field {} {}",
            self.file.display(),
            self.field,
            self.problem
        )
    }
}

/// Validate a root record. `file` names the sidecar in any violations.
pub fn validate_root(root: &RootRecord, file: &Path) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_text(&mut violations, file, "title", &root.title);
    check_text(&mut violations, file, "link", &root.link);
    check_text(&mut violations, file, "description", &root.description);
    check_blank(&mut violations, file, "rootDir", &root.root_dir);
    check_blank(&mut violations, file, "rssFilename", &root.rss_filename);
    // defaultAuthor is optional: blank or still-placeholder just means
    // "not configured", never a violation

    violations
}

/// Validate one item record.
///
/// `has_default_author` reports whether the governing root supplies a real
/// `defaultAuthor`: a still-placeholder item author is fine when a
/// substitute exists, a violation when it doesn't.
pub fn validate_item(item: &ItemRecord, file: &Path, has_default_author: bool) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_blank(&mut violations, file, "filename", &item.filename);
    check_text(&mut violations, file, "title", &item.title);
    check_text(&mut violations, file, "description", &item.description);

    if item.description.contains(&format!("src=\"{PLACEHOLDER_IMG_SRC}\"")) {
        violations.push(Violation::new(
            file,
            "description",
            Problem::Placeholder(PLACEHOLDER_IMG_SRC),
        ));
    }

    if let Some(author) = item.author.as_deref() {
        if is_placeholder("author", author) && !has_default_author {
            violations.push(Violation::new(
                file,
                "author",
                Problem::Placeholder("AUTHOR"),
            ));
        }
    }

    let date = item.pub_date.trim();
    if date.is_empty() {
        violations.push(Violation::new(file, "pubDate", Problem::Missing));
    } else if dates::parse_pub_date(date).is_err() {
        violations.push(Violation::new(
            file,
            "pubDate",
            Problem::InvalidDate(item.pub_date.clone()),
        ));
    }

    violations
}

/// Required text field: must be non-blank and not its placeholder.
fn check_text(violations: &mut Vec<Violation>, file: &Path, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::new(file, field, Problem::Missing));
    } else if is_placeholder(field, value) {
        if let Some(placeholder) = crate::records::placeholder_for(field) {
            violations.push(Violation::new(file, field, Problem::Placeholder(placeholder)));
        }
    }
}

/// Required field with no reserved placeholder: must simply be non-blank.
fn check_blank(violations: &mut Vec<Violation>, file: &Path, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::new(file, field, Problem::Missing));
    }
}
