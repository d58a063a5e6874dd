//! Hygiene — enforces coding standards at test time
//!
//! Scans the admin client's production sources (everything under `src/`
//! except `*_test.rs`) for constructs that crash the WASM bundle, drop
//! errors silently, or hide unfinished work. Each budget is zero; fix the
//! code, never raise the number. Parameters read only in the browser build
//! are silenced with a `cfg_attr`-gated lint allow, not a discard.

use std::fs;
use std::path::Path;

/// `(pattern, budget)` pairs checked line by line.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("dbg!(", 0),
    // Silent loss.
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_some_and(|e| e == "rs") && !path_str.ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("lib.rs")),
        "hygiene scan must run from the client crate root"
    );
}

#[test]
fn panic_and_placeholder_budgets() {
    let files = source_files();
    let mut violations = Vec::new();
    for (pattern, budget) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            violations.push(format!("  `{pattern}`: found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(violations.is_empty(), "hygiene budgets exceeded:\n{}", violations.join("\n"));
}
