//! Template record creation: the `root`, `post`, and `img` commands.
//!
//! These commands never edit field *values*: they write records whose
//! required fields carry the reserved placeholders, and the user fills them
//! in with a text editor. The one exception is seeding: `post` copies the
//! root's `defaultAuthor` into the new item when one is configured, and
//! stamps `pubDate` with the creation time.

use crate::dates;
use crate::locate::{self, LocateError};
use crate::records::{self, ItemRecord, ParseError, RootRecord};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("{0} already exists; edit it directly, or delete it to start over")]
    RootExists(PathBuf),
    #[error("invalid UTC offset {0}: expected whole hours between -23 and 23")]
    BadOffset(i32),
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Write a template root sidecar into `dir`.
///
/// Refuses if one already exists; the tool never overwrites hand-edited
/// records.
pub fn create_root(dir: &Path) -> Result<PathBuf, TemplateError> {
    let path = dir.join(records::ROOT_SIDECAR);
    if path.exists() {
        return Err(TemplateError::RootExists(path));
    }
    records::save_root(&path, &RootRecord::template())?;
    Ok(path)
}

/// Append a template item for `filename` to `dir`'s item sidecar,
/// creating the sidecar if this is the directory's first post.
///
/// `pubDate` records the local time of creation, or the current time at an
/// explicit UTC offset when `utc_offset_hours` is given (`-7` pins the
/// record to UTC−7 regardless of the machine's timezone).
pub fn create_post(
    dir: &Path,
    filename: &str,
    utc_offset_hours: Option<i32>,
) -> Result<PathBuf, TemplateError> {
    let pub_date = match utc_offset_hours {
        Some(hours) => dates::now_at_offset(hours)
            .ok_or(TemplateError::BadOffset(hours))?
            .to_rfc2822(),
        None => dates::now_local().to_rfc2822(),
    };

    // the root governs author seeding, so a site must exist before posts
    let (root, _) = locate::locate_root(dir)?;
    let record = ItemRecord::template(filename, root.real_default_author(), pub_date);

    let path = dir.join(records::ITEMS_SIDECAR);
    let mut items = if path.exists() {
        records::load_items(&path)?
    } else {
        Vec::new()
    };
    items.push(record);
    records::save_items(&path, &items)?;

    Ok(path)
}

/// Wrap each description in `file` in a CDATA block carrying an empty
/// `<img>` tag, so the user can point posts at cover images.
///
/// Descriptions already containing a CDATA marker are left untouched, so
/// re-running is safe. Returns how many descriptions were wrapped.
pub fn add_image_slots(file: &Path) -> Result<usize, TemplateError> {
    let mut items = records::load_items(file)?;

    let mut wrapped = 0;
    for item in &mut items {
        if item.description.contains("CDATA") {
            continue;
        }
        item.description = format!(
            "<![CDATA[{} <img src=\"{}\">]]>",
            item.description,
            records::PLACEHOLDER_IMG_SRC
        );
        wrapped += 1;
    }

    if wrapped > 0 {
        records::save_items(file, &items)?;
    }
    Ok(wrapped)
}
