//! Sidecar discovery: the upward and downward tree searches.
//!
//! The compiler never takes file paths to its inputs directly. Instead it is
//! pointed at a starting directory and finds everything itself:
//!
//! - **Upward**: [`locate_root`] checks the starting directory, then each
//!   parent in turn, for `rss_root.json`. The nearest match wins, so nested
//!   sites shadow outer ones.
//! - **Downward**: [`locate_items`] walks every descendant directory of the
//!   root record's directory and collects the records of each
//!   `rss_items.json` it finds, tagged with the absolute directory that
//!   contributed them.
//!
//! Traversal is deterministic (directories in lexicographic name order,
//! records in their in-file order), so repeated compiles over
//! unchanged trees produce identical output. Hidden directories (`.git` and
//! friends) are skipped.
//!
//! A malformed sidecar anywhere in the walk aborts discovery with the
//! offending path; partial results are never returned.

use crate::records::{self, ItemRecord, ParseError, RootRecord};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("no rss_root.json found in {start} or any parent directory")]
    RootNotFound { start: PathBuf },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// An item record together with where it was found.
///
/// `dir_path` is the absolute directory holding the sidecar, the input to
/// URL derivation. `source_file` is the sidecar file itself, used to name
/// the file in validation reports. Neither is ever serialized.
#[derive(Debug, Clone)]
pub struct DiscoveredItem {
    pub record: ItemRecord,
    pub dir_path: PathBuf,
    pub source_file: PathBuf,
}

/// Find the root record governing `start_dir`.
///
/// `start_dir` should be absolute; the search covers `start_dir` itself and
/// every ancestor up to the filesystem root. Returns the decoded record and
/// the directory containing it.
pub fn locate_root(start_dir: &Path) -> Result<(RootRecord, PathBuf), LocateError> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(records::ROOT_SIDECAR);
        if candidate.is_file() {
            let root = records::load_root(&candidate)?;
            return Ok((root, dir.to_path_buf()));
        }
    }
    Err(LocateError::RootNotFound {
        start: start_dir.to_path_buf(),
    })
}

/// Collect every item record under `root_record_dir`, in stable order.
pub fn locate_items(root_record_dir: &Path) -> Result<Vec<DiscoveredItem>, LocateError> {
    let mut found = Vec::new();

    let walker = WalkDir::new(root_record_dir)
        .sort_by_file_name()
        .into_iter()
        // depth 0 is the root record dir itself, exempt even if its own
        // name happens to start with a dot
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root_record_dir.to_path_buf());
            ParseError::Io {
                path,
                source: e.into(),
            }
        })?;

        if !entry.file_type().is_file() || entry.file_name() != records::ITEMS_SIDECAR {
            continue;
        }

        let source_file = entry.path().to_path_buf();
        let dir_path = entry
            .path()
            .parent()
            .unwrap_or(root_record_dir)
            .to_path_buf();

        for record in records::load_items(&source_file)? {
            found.push(DiscoveredItem {
                record,
                dir_path: dir_path.clone(),
                source_file: source_file.clone(),
            });
        }
    }

    Ok(found)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
