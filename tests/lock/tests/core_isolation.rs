//! Build-graph and I/O isolation of the core crates.
//!
//! `digen_kernel` and `digen_search` are pure: no console output, no file
//! or stdin access, no subscriber installation. Everything observable goes
//! through return values and `tracing` events.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Forbidden patterns in non-comment, non-test core source lines.
const FORBIDDEN_PATTERNS: &[&str] = &[
    "std::io",
    "std::fs",
    "println!",
    "eprintln!",
    "print!(",
    "tracing_subscriber",
    "thread_rng",
];

fn scan_core_dir(dir: &Path) -> Vec<(String, usize, String)> {
    assert!(dir.exists(), "core dir missing: {}", dir.display());
    let mut violations = Vec::new();
    walk(dir, &mut violations);
    violations
}

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };

    // Skip #[cfg(test)] module blocks via brace-depth tracking.
    let mut brace_depth: usize = 0;
    let mut skip_depth: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.chars().filter(|&c| c == '{').count();
        let closes = line.chars().filter(|&c| c == '}').count();

        if cfg_test_pending && opens > 0 {
            skip_depth = Some(brace_depth);
            cfg_test_pending = false;
        }

        brace_depth = brace_depth.saturating_add(opens);
        brace_depth = brace_depth.saturating_sub(closes);

        if let Some(depth) = skip_depth {
            if brace_depth <= depth {
                skip_depth = None;
            }
            continue;
        }

        if trimmed.starts_with("//") {
            continue;
        }
        for pattern in FORBIDDEN_PATTERNS {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn assert_clean(crate_dir: &str) {
    let violations = scan_core_dir(&workspace_root().join(crate_dir).join("src"));
    if !violations.is_empty() {
        let mut msg = format!("I/O found in {crate_dir} source:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn kernel_source_does_no_io() {
    assert_clean("kernel");
}

#[test]
fn search_source_does_no_io() {
    assert_clean("search");
}

#[test]
fn search_does_not_depend_on_harness() {
    let cargo_toml = workspace_root().join("search").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("search/Cargo.toml must exist");
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        assert!(
            !trimmed.contains("digen-harness"),
            "search/Cargo.toml line {}: depends on the harness: {trimmed}",
            line_no + 1
        );
    }
}
