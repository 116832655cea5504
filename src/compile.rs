//! The compile pipeline: discovery → validation → URL derivation → rendering.
//!
//! Two entry points, both taking the starting directory as an explicit
//! argument (callers resolve the working directory, nothing here reads
//! ambient process state):
//!
//! - [`make`] runs the whole pipeline and returns the rendered XML plus the
//!   path it belongs at. It aborts on the *first* problem (a feed is never
//!   built from a tree that hasn't fully validated) and performs no writes;
//!   the caller owns the final `fs::write`.
//! - [`check`] runs discovery and validation only, and aggregates *every*
//!   violation in scope instead of stopping, so one run produces a complete
//!   fix-it list. Discovery failures (malformed file, no root) still abort:
//!   they make the scope itself undefined.

use crate::locate::{self, LocateError};
use crate::records::{self, ItemRecord, ParseError, is_placeholder};
use crate::render::{self, FeedItem, RenderError};
use crate::urls::{self, UrlError};
use crate::validate::{self, Problem, Violation};
use crate::dates;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Invalid(Violation),
    #[error(transparent)]
    Url(#[from] UrlError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("{0} is not a sidecar file (expected rss_root.json or rss_items.json)")]
    NotASidecar(PathBuf),
}

/// The result of a successful `make`: the document and where it goes.
#[derive(Debug)]
pub struct Compiled {
    pub xml: String,
    /// `<root record dir>/<rssFilename>`; the caller writes here.
    pub output_path: PathBuf,
    pub item_count: usize,
}

/// Run the full pipeline from `start_dir`.
pub fn make(start_dir: &Path) -> Result<Compiled, CompileError> {
    let (root, root_dir) = locate::locate_root(start_dir)?;
    let root_file = root_dir.join(records::ROOT_SIDECAR);

    if let Some(violation) = validate::validate_root(&root, &root_file).into_iter().next() {
        return Err(CompileError::Invalid(violation));
    }

    let discovered = locate::locate_items(&root_dir)?;
    let default_author = root.real_default_author().map(String::from);

    for item in &discovered {
        let violations =
            validate::validate_item(&item.record, &item.source_file, default_author.is_some());
        if let Some(violation) = violations.into_iter().next() {
            return Err(CompileError::Invalid(violation));
        }
    }

    let site_root = urls::site_root(&root_dir, &root.root_dir)?;

    let mut feed_items = Vec::with_capacity(discovered.len());
    for item in &discovered {
        let link = urls::item_url(
            &root.link,
            &site_root,
            &item.dir_path,
            &item.record.filename,
        )?;
        // validation already vetted the date; surface a violation rather
        // than panic if the two ever disagree
        let pub_date = dates::parse_pub_date(&item.record.pub_date).map_err(|e| {
            CompileError::Invalid(Violation {
                file: item.source_file.clone(),
                field: "pubDate",
                problem: Problem::InvalidDate(e.0),
            })
        })?;

        feed_items.push(FeedItem {
            title: item.record.title.clone(),
            link,
            description: item.record.description.clone(),
            author: effective_author(&item.record, default_author.as_deref()),
            pub_date,
        });
    }

    let xml = render::render(&root, &feed_items)?;

    Ok(Compiled {
        xml,
        output_path: root_dir.join(&root.rss_filename),
        item_count: feed_items.len(),
    })
}

/// Validate without rendering.
///
/// With no `target`, the scope is everything reachable from the root record
/// governing `start_dir`. With a `target` sidecar file, only that file's
/// records are validated (the governing root is still located, because item
/// author rules depend on `defaultAuthor`).
pub fn check(start_dir: &Path, target: Option<&Path>) -> Result<Vec<Violation>, CompileError> {
    match target {
        None => {
            let (root, root_dir) = locate::locate_root(start_dir)?;
            let root_file = root_dir.join(records::ROOT_SIDECAR);
            let mut violations = validate::validate_root(&root, &root_file);

            let has_default = root.real_default_author().is_some();
            for item in locate::locate_items(&root_dir)? {
                violations.extend(validate::validate_item(
                    &item.record,
                    &item.source_file,
                    has_default,
                ));
            }
            Ok(violations)
        }
        Some(path) => check_file(path),
    }
}

fn check_file(path: &Path) -> Result<Vec<Violation>, CompileError> {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(records::ROOT_SIDECAR) => {
            let root = records::load_root(path)?;
            Ok(validate::validate_root(&root, path))
        }
        Some(records::ITEMS_SIDECAR) => {
            let dir = path.parent().unwrap_or(Path::new("."));
            let (root, _) = locate::locate_root(dir)?;
            let has_default = root.real_default_author().is_some();

            let mut violations = Vec::new();
            for record in records::load_items(path)? {
                violations.extend(validate::validate_item(&record, path, has_default));
            }
            Ok(violations)
        }
        _ => Err(CompileError::NotASidecar(path.to_path_buf())),
    }
}

/// The author string that actually goes in the feed for an item:
/// its own real value, else the root's default, else nothing.
fn effective_author(item: &ItemRecord, default_author: Option<&str>) -> Option<String> {
    item.author
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty() && !is_placeholder("author", a))
        .or(default_author)
        .map(String::from)
}
