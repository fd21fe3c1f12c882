//! Hygiene — source-level budgets checked at test time.
//!
//! Scans `src/` (sibling `*_test.rs` files excluded) for constructs that
//! would crash the page script, swallow errors without looking at them, or
//! bypass the `log` facade. Every budget is zero and only ever shrinks.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "panics abort the page script" },
    Rule { pattern: ".expect(", budget: 0, why: "panics abort the page script" },
    Rule { pattern: "panic!(", budget: 0, why: "panics abort the page script" },
    Rule { pattern: "unreachable!(", budget: 0, why: "panics abort the page script" },
    Rule { pattern: "todo!(", budget: 0, why: "stubs must not ship" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "stubs must not ship" },
    Rule { pattern: "let _ =", budget: 0, why: "report failures through error::report" },
    Rule { pattern: ".ok()", budget: 0, why: "match the error so it can be logged" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete unused code instead" },
    Rule { pattern: "println!(", budget: 0, why: "use the log facade" },
    Rule { pattern: "eprintln!(", budget: 0, why: "use the log facade" },
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rust && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn violations(sources: &[(PathBuf, String)], pattern: &str) -> Vec<String> {
    sources
        .iter()
        .flat_map(|(path, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(move |(n, _)| format!("  {}:{}", path.display(), n + 1))
        })
        .collect()
}

#[test]
fn scans_some_sources() {
    let sources = production_sources();
    assert!(
        sources.iter().any(|(path, _)| path.ends_with("lib.rs")),
        "hygiene scan found no crate sources; run from the crate root"
    );
}

#[test]
fn budgets_hold() {
    let sources = production_sources();
    let mut report = Vec::new();
    for rule in RULES {
        let hits = violations(&sources, rule.pattern);
        if hits.len() > rule.budget {
            report.push(format!(
                "{} budget exceeded: found {}, max {} ({})\n{}",
                rule.pattern,
                hits.len(),
                rule.budget,
                rule.why,
                hits.join("\n")
            ));
        }
    }
    assert!(report.is_empty(), "{}", report.join("\n\n"));
}
