//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the crate's `src/` tree for antipatterns. Each has a
//! budget of zero; test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Budgeted patterns: (pattern, what it means).
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics on None/Err"),
    ("panic!(", "crashes the widget"),
    ("unreachable!(", "crashes the widget"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "silently discards a value"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "hides unused code"),
];

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn banned_pattern_budgets() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, reason) in BANNED {
        for (path, count) in count_in_source(&files, pattern) {
            report.push(format!("  {pattern} ({reason}) in {path}: {count}"));
        }
    }
    assert!(report.is_empty(), "hygiene budget exceeded:\n{}", report.join("\n"));
}
