//! CLI output formatting for the compile and check commands.
//!
//! Reports are **file-centric**: violations are grouped under the sidecar
//! file they occur in, with one indented line per field problem, so a check
//! run reads as an edit list: open each file, fix the listed fields.
//!
//! ```text
//! /site/rss_root.json
//!     title: still carries the template placeholder TITLE
//!     link: still carries the template placeholder URL
//! /site/blog/rss_items.json
//!     pubDate: has unrecognized date "yesterday" ...
//!
//! 3 problems in 2 files
//! ```
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::compile::Compiled;
use crate::validate::Violation;

/// Format a check report: violations grouped by file, with a summary line.
pub fn format_check_report(violations: &[Violation]) -> Vec<String> {
    if violations.is_empty() {
        return vec!["All records valid".to_string()];
    }

    let mut lines = Vec::new();
    let mut current_file = None;
    for violation in violations {
        if current_file != Some(&violation.file) {
            lines.push(violation.file.display().to_string());
            current_file = Some(&violation.file);
        }
        lines.push(format!("    {}: {}", violation.field, violation.problem));
    }

    let file_count = {
        let mut files: Vec<_> = violations.iter().map(|v| &v.file).collect();
        files.dedup();
        files.len()
    };
    lines.push(String::new());
    lines.push(format!(
        "{} in {}",
        count(violations.len(), "problem"),
        count(file_count, "file")
    ));
    lines
}

/// Format the result of a successful `make`.
pub fn format_make_output(compiled: &Compiled) -> Vec<String> {
    vec![format!(
        "Compiled {} -> {}",
        count(compiled.item_count, "item"),
        compiled.output_path.display()
    )]
}

pub fn print_check_report(violations: &[Violation]) {
    for line in format_check_report(violations) {
        println!("{line}");
    }
}

pub fn print_make_output(compiled: &Compiled) {
    for line in format_make_output(compiled) {
        println!("{line}");
    }
}

/// `1 item`, `2 items`. Naive pluralization is fine for these nouns.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
