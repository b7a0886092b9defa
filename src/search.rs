//! Case-insensitive substring search over generated transcripts.
//!
//! This is a naive full scan, not an index: every `.html` file under the
//! output tree is read in full and tested for containment.

use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use walkdir::WalkDir;

/// Walks `root` recursively and returns the names of `.html` files whose
/// content contains `term`, case-insensitively.
///
/// Unreadable files are reported to stderr and skipped; the scan itself
/// never fails. Returned names are sorted file names, not paths.
pub fn search_output(term: &str, root: &Path) -> Vec<String> {
    let needle = term.to_lowercase();
    let mut matches = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() || !is_html(path) {
            continue;
        }
        match fs::read_to_string(path) {
            Ok(content) => {
                if content.to_lowercase().contains(&needle) {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        matches.push(name.to_string());
                    }
                }
            }
            Err(err) => {
                eprintln!(
                    "{}",
                    format!("Error reading {}: {err}", path.display()).red()
                );
            }
        }
    }

    matches.sort();
    matches
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html"))
}
