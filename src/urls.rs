//! Public URL derivation from filesystem locations.
//!
//! An item's URL is a pure function of four inputs: the root record's `link`
//! and `rootDir`, the directory the item was discovered in, and its
//! `filename`. The site root is `rootRecordDir/rootDir`; the path segments
//! between the site root and the item's directory become the URL path,
//! always with forward slashes no matter what the host OS uses natively.
//!
//! Misconfigurations are rejected, never clamped: a `rootDir` that climbs
//! out of the root record's directory, or an item directory that isn't
//! under the site root, is a [`UrlError::PathOutsideRoot`].

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UrlError {
    #[error("{dir} is outside the configured site root {site_root}")]
    PathOutsideRoot { dir: PathBuf, site_root: PathBuf },
}

/// Resolve the absolute site root: `root_record_dir` joined with the
/// configured `rootDir`, lexically normalized.
///
/// `.` segments collapse; `..` segments pop previously pushed segments but
/// may not climb above `root_record_dir`: a `rootDir` of `"../elsewhere"`
/// is a configuration error, not a request to widen the site.
pub fn site_root(root_record_dir: &Path, root_dir: &str) -> Result<PathBuf, UrlError> {
    let mut resolved = root_record_dir.to_path_buf();
    let mut depth = 0usize;

    for component in Path::new(root_dir).components() {
        match component {
            Component::CurDir => {}
            Component::Normal(segment) => {
                resolved.push(segment);
                depth += 1;
            }
            Component::ParentDir if depth > 0 => {
                resolved.pop();
                depth -= 1;
            }
            // leading `..`, an absolute path, or a windows prefix all point
            // outside the root record's directory
            _ => {
                return Err(UrlError::PathOutsideRoot {
                    dir: root_record_dir.join(root_dir),
                    site_root: root_record_dir.to_path_buf(),
                });
            }
        }
    }

    Ok(resolved)
}

/// Build the public URL for an item discovered in `dir_path`.
///
/// `dir_path` must be `site_root` itself or a descendant of it. The result
/// is `link` + the relative path + `filename`, with exactly one `/` between
/// segments regardless of a trailing slash on `link`.
pub fn item_url(
    link: &str,
    site_root: &Path,
    dir_path: &Path,
    filename: &str,
) -> Result<String, UrlError> {
    let relative = dir_path
        .strip_prefix(site_root)
        .map_err(|_| UrlError::PathOutsideRoot {
            dir: dir_path.to_path_buf(),
            site_root: site_root.to_path_buf(),
        })?;

    let mut url = String::from(link.trim_end_matches('/'));
    for component in relative.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(segment) => {
                url.push('/');
                url.push_str(&segment.to_string_lossy());
            }
            // strip_prefix output is relative, but reject any `..` that
            // slipped in through an unnormalized input
            _ => {
                return Err(UrlError::PathOutsideRoot {
                    dir: dir_path.to_path_buf(),
                    site_root: site_root.to_path_buf(),
                });
            }
        }
    }
    url.push('/');
    url.push_str(filename);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // site_root
    // =========================================================================

    #[test]
    fn dot_root_dir_is_the_record_dir() {
        let root = site_root(Path::new("/site"), ".").unwrap();
        assert_eq!(root, Path::new("/site"));
    }

    #[test]
    fn relative_root_dir_descends() {
        let root = site_root(Path::new("/site"), "public/www").unwrap();
        assert_eq!(root, Path::new("/site/public/www"));
    }

    #[test]
    fn dot_segments_collapse() {
        let root = site_root(Path::new("/site"), "./public/./www").unwrap();
        assert_eq!(root, Path::new("/site/public/www"));
    }

    #[test]
    fn internal_parent_segments_resolve() {
        let root = site_root(Path::new("/site"), "public/../www").unwrap();
        assert_eq!(root, Path::new("/site/www"));
    }

    #[test]
    fn escaping_root_record_dir_is_rejected() {
        let err = site_root(Path::new("/site"), "../elsewhere").unwrap_err();
        assert!(matches!(err, UrlError::PathOutsideRoot { .. }));

        // `..` that nets out above the record dir is still an escape
        assert!(site_root(Path::new("/site"), "public/../../other").is_err());
    }

    #[test]
    fn absolute_root_dir_is_rejected() {
        assert!(site_root(Path::new("/site"), "/var/www").is_err());
    }

    // =========================================================================
    // item_url
    // =========================================================================

    #[test]
    fn item_at_site_root() {
        let url = item_url(
            "https://example.com",
            Path::new("/site"),
            Path::new("/site"),
            "post.html",
        )
        .unwrap();
        assert_eq!(url, "https://example.com/post.html");
    }

    #[test]
    fn nested_item_keeps_directory_segments() {
        let url = item_url(
            "https://example.com",
            Path::new("/site"),
            Path::new("/site/blog/2024/june"),
            "post.html",
        )
        .unwrap();
        assert_eq!(url, "https://example.com/blog/2024/june/post.html");
    }

    #[test]
    fn trailing_slash_on_link_does_not_double() {
        let url = item_url(
            "https://example.com/",
            Path::new("/site"),
            Path::new("/site/blog"),
            "post.html",
        )
        .unwrap();
        assert_eq!(url, "https://example.com/blog/post.html");
    }

    #[test]
    fn link_with_path_prefix_is_preserved() {
        let url = item_url(
            "https://example.com/~user/blog",
            Path::new("/site"),
            Path::new("/site/posts"),
            "a.html",
        )
        .unwrap();
        assert_eq!(url, "https://example.com/~user/blog/posts/a.html");
    }

    #[test]
    fn dir_outside_site_root_is_rejected() {
        let err = item_url(
            "https://example.com",
            Path::new("/site/public"),
            Path::new("/site/drafts"),
            "post.html",
        )
        .unwrap_err();
        assert!(matches!(err, UrlError::PathOutsideRoot { .. }));
        assert!(err.to_string().contains("drafts"));
    }

    #[test]
    fn moving_an_item_changes_only_the_path_segment() {
        let before = item_url(
            "https://example.com",
            Path::new("/site"),
            Path::new("/site/2024/june"),
            "post.html",
        )
        .unwrap();
        let after = item_url(
            "https://example.com",
            Path::new("/site"),
            Path::new("/site/2024/july"),
            "post.html",
        )
        .unwrap();
        assert_eq!(before, "https://example.com/2024/june/post.html");
        assert_eq!(after, "https://example.com/2024/july/post.html");
    }
}
