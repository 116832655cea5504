//! # Feedwright
//!
//! A minimal RSS feed compiler for static websites. Your filesystem is the
//! data source: small JSON sidecar files next to your posts describe each
//! feed entry, and one root sidecar describes the site. Compiling walks the
//! tree, validates every record, derives each post's URL from where it
//! lives on disk, and writes a single RSS 2.0 document.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Locate     start dir   ->  root record + item records   (tree search)
//! 2. Validate   records     ->  ok | violations              (placeholder gate)
//! 3. Resolve    dir + file  ->  public URL per item          (path -> URL)
//! 4. Render     records     ->  rss.xml                      (RSS 2.0 string)
//! ```
//!
//! The stages are independent functions over plain data. Discovery takes
//! the starting directory as an argument and reads nothing ambient, so the
//! whole pipeline runs against synthetic trees in tests. Rendering returns
//! a `String` and writes nothing; the caller owns the single output write.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`records`] | Sidecar schemas, placeholder constants, JSON load/save |
//! | [`locate`] | Upward search for the root record, downward search for items |
//! | [`validate`] | Blank/placeholder/date checks producing per-field violations |
//! | [`urls`] | Filesystem location to public URL derivation |
//! | [`render`] | Ordering and RSS 2.0 serialization |
//! | [`compile`] | The `make` and `check` pipelines over the modules above |
//! | [`template`] | The `root`, `post`, and `img` record-creation commands |
//! | [`dates`] | `pubDate` parsing and RFC 2822 emission |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Sidecars Over Front-Matter
//!
//! Feed metadata lives in dedicated `rss_items.json` files rather than
//! inside the HTML posts themselves. The tool never parses your content;
//! posts can be hand-written HTML, generator output, or anything else that
//! ends up at a URL. One sidecar per directory keeps related posts together
//! and keeps the records greppable and diffable.
//!
//! ## Placeholders Over Prompts
//!
//! `root` and `post` write records with reserved placeholder values
//! (`TITLE`, `URL`, `DESCRIPTION`, `AUTHOR`) instead of prompting
//! interactively. You edit JSON in your own editor; the compiler refuses to
//! build until every placeholder is gone. Detection is plain string
//! equality against the template constants, nothing cleverer.
//!
//! ## Fail Closed, Report Fully
//!
//! `make` writes nothing unless the entire tree validates: a feed with one
//! placeholder item is worse than no feed. `check` is the inverse: it
//! never stops early, and reports every violation in one pass so a dirty
//! tree is fixable in one editing session.
//!
//! ## No Cache, No Daemon
//!
//! Every run re-reads the tree from disk. Sites small enough to want this
//! tool compile in milliseconds; determinism and debuggability are worth
//! more than saved reads. Two concurrent compiles race benignly: the last
//! writer of the output file wins.

pub mod compile;
pub mod dates;
pub mod locate;
pub mod output;
pub mod records;
pub mod render;
pub mod template;
pub mod urls;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
