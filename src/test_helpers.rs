//! Shared test utilities for the feedwright test suite.
//!
//! Builds synthetic site trees on disk with `serde_json::json!` fixtures,
//! so discovery, validation, and compile tests exercise real file I/O
//! against throwaway `TempDir`s instead of checked-in fixture directories.

use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Write a fully valid root sidecar: site root is the record's own
/// directory, feed goes to `rss.xml`, no default author.
pub fn write_valid_root(dir: &Path) {
    write_root(
        dir,
        "Example Site",
        "https://example.com",
        "Posts from Example Site",
        ".",
        "rss.xml",
        None,
    );
}

/// Write an unedited template root sidecar (all placeholders), exactly as
/// the `root` command produces it.
pub fn write_template_root(dir: &Path) {
    write_root(dir, "TITLE", "URL", "DESCRIPTION", ".", "rss.xml", Some("AUTHOR"));
}

/// Write a root sidecar with explicit field values.
pub fn write_root(
    dir: &Path,
    title: &str,
    link: &str,
    description: &str,
    root_dir: &str,
    rss_filename: &str,
    default_author: Option<&str>,
) {
    fs::create_dir_all(dir).unwrap();
    let mut root = json!({
        "title": title,
        "link": link,
        "description": description,
        "rootDir": root_dir,
        "rssFilename": rss_filename,
    });
    if let Some(author) = default_author {
        root["defaultAuthor"] = json!(author);
    }
    fs::write(
        dir.join("rss_root.json"),
        serde_json::to_string_pretty(&root).unwrap(),
    )
    .unwrap();
}

/// Write an item sidecar holding `items`, creating `dir` as needed.
pub fn write_items(dir: &Path, items: &[Value]) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("rss_items.json"),
        serde_json::to_string_pretty(&items).unwrap(),
    )
    .unwrap();
}

/// A record that passes validation: real title, derived description, no
/// author.
pub fn valid_item(filename: &str, title: &str, pub_date: &str) -> Value {
    json!({
        "filename": filename,
        "title": title,
        "description": format!("All about {title}"),
        "pubDate": pub_date,
    })
}

/// A record exactly as `post` creates it with no default author configured:
/// placeholders everywhere, valid creation date.
pub fn placeholder_item(filename: &str) -> Value {
    json!({
        "filename": filename,
        "title": "TITLE",
        "description": "DESCRIPTION",
        "author": "AUTHOR",
        "pubDate": "Sat, 01 Jun 2024 10:00:00 -0700",
    })
}

/// A valid record with an explicit author value (or none at all).
pub fn item_with_author(
    filename: &str,
    title: &str,
    pub_date: &str,
    author: Option<&str>,
) -> Value {
    let mut item = valid_item(filename, title, pub_date);
    if let Some(author) = author {
        item["author"] = json!(author);
    }
    item
}

/// A valid record with an explicit description.
pub fn item_with_description(
    filename: &str,
    title: &str,
    pub_date: &str,
    description: &str,
) -> Value {
    let mut item = valid_item(filename, title, pub_date);
    item["description"] = json!(description);
    item
}
