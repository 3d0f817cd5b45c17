//! Lint runner over translation-unit dump files.
//!
//! The front end writes one JSON dump per translation unit; this module
//! globs the dumps, feeds every well-formed declaration record to the
//! checker, and aggregates findings into a `LintResult` with a summary.

use crate::checker::{self, RULE_ID};
use crate::models::decl::{PropertyDeclaration, TranslationUnitDump};
use crate::models::{Issue, LintResult, Summary};
use crate::rules::RuleSet;
use glob::glob;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Run lint across dump files matched by the given glob patterns.
///
/// Every declaration is judged independently; findings keep coming after
/// the first violation. A dump that cannot be read or parsed yields a
/// single `parse-dump` error for that file. Malformed individual records
/// inside a well-formed dump are skipped without output.
pub fn run_lint(repo_root: &str, patterns: &[String]) -> LintResult {
    let root = PathBuf::from(repo_root);
    let rules = RuleSet::default();

    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        if let Ok(entries) = glob(&pattern) {
            for p in entries.flatten() {
                targets.push(p);
            }
        }
    }
    targets.sort();
    targets.dedup();

    let per_file: Vec<(Vec<Issue>, usize)> = targets
        .par_iter()
        .map(|path| (lint_dump(&rules, path), 1))
        .collect();

    // Deterministic ordering of issues by file, line, then message
    let mut issues: Vec<Issue> = per_file.into_iter().flat_map(|(v, _)| v).collect();
    issues.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then(a.line.cmp(&b.line))
            .then(a.message.cmp(&b.message))
    });

    let mut errs = 0usize;
    let mut warns = 0usize;
    let mut infos = 0usize;
    for is in &issues {
        match is.severity.as_str() {
            "error" => errs += 1,
            "warning" => warns += 1,
            _ => infos += 1,
        }
    }
    LintResult {
        issues,
        summary: Summary {
            errors: errs,
            warnings: warns,
            infos,
            files: targets.len(),
        },
    }
}

/// Lint a single dump file, collecting issues for its declarations.
fn lint_dump(rules: &RuleSet, path: &Path) -> Vec<Issue> {
    let data = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => {
            return vec![parse_dump_issue(path, "Dump file could not be read")];
        }
    };
    let dump: TranslationUnitDump = match serde_json::from_str(&data) {
        Ok(d) => d,
        Err(_) => {
            return vec![parse_dump_issue(path, "Dump file is not valid JSON")];
        }
    };

    let mut issues: Vec<Issue> = Vec::new();
    for record in dump.declarations {
        // One malformed record must not poison the rest of the unit
        let decl: PropertyDeclaration = match serde_json::from_value(record) {
            Ok(d) => d,
            Err(_) => continue,
        };
        if let Some(f) = checker::check(rules, &decl) {
            issues.push(Issue {
                file: decl.source_file,
                rule: RULE_ID.into(),
                severity: f.severity.into(),
                line: f.location.line,
                column: f.location.column,
                message: f.message,
            });
        }
    }
    issues
}

fn parse_dump_issue(path: &Path, message: &str) -> Issue {
    Issue {
        file: path.to_string_lossy().to_string(),
        rule: "parse-dump".into(),
        severity: "error".into(),
        line: 0,
        column: 0,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_dump(root: &Path, name: &str, body: &str) {
        let mut f = fs::File::create(root.join(name)).unwrap();
        write!(f, "{}", body).unwrap();
    }

    #[test]
    fn test_run_lint_collects_all_findings_in_a_unit() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_dump(
            root,
            "foo.props.json",
            r#"{
                "declarations": [
                    {"source_file": "/Users/dev/Foo.m",
                     "location": {"line": 3, "column": 1},
                     "type_name": "NSString *"},
                    {"source_file": "/Users/dev/Foo.m",
                     "location": {"line": 9, "column": 1},
                     "type_name": "NSDictionary *",
                     "attributes": ["strong", "nonatomic"]},
                    {"source_file": "/Users/dev/Foo.m",
                     "location": {"line": 15, "column": 1},
                     "type_name": "NSInteger"}
                ]
            }"#,
        );
        let res = run_lint(root.to_str().unwrap(), &["*.props.json".to_string()]);
        // Both violations reported; no short-circuit after the first
        assert_eq!(res.issues.len(), 2);
        assert_eq!(res.summary.errors, 2);
        assert_eq!(res.summary.files, 1);
        assert_eq!(res.issues[0].line, 3);
        assert_eq!(res.issues[1].line, 9);
        assert!(res.issues[0].message.contains("NSString *"));
    }

    #[test]
    fn test_malformed_record_is_skipped_silently() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_dump(
            root,
            "unit.props.json",
            r#"{
                "declarations": [
                    {"no_type_name_here": true},
                    {"source_file": "/Users/dev/Bar.m",
                     "location": {"line": 2, "column": 5},
                     "type_name": "NSArray<NSString *> *"}
                ]
            }"#,
        );
        let res = run_lint(root.to_str().unwrap(), &["*.props.json".to_string()]);
        assert_eq!(res.issues.len(), 1);
        assert_eq!(res.issues[0].file, "/Users/dev/Bar.m");
        assert_eq!(res.issues[0].column, 5);
    }

    #[test]
    fn test_invalid_dump_reports_parse_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_dump(root, "broken.props.json", "not json at all");
        let res = run_lint(root.to_str().unwrap(), &["*.props.json".to_string()]);
        assert_eq!(res.issues.len(), 1);
        assert_eq!(res.issues[0].rule, "parse-dump");
        assert_eq!(res.summary.errors, 1);
    }

    #[test]
    fn test_clean_unit_produces_no_issues() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_dump(
            root,
            "clean.props.json",
            r#"{
                "declarations": [
                    {"source_file": "/Users/dev/Ok.m",
                     "location": {"line": 4, "column": 1},
                     "type_name": "NSString *",
                     "attributes": ["copy", "nonatomic"]},
                    {"source_file": "/Applications/Xcode.app/SDK/NSObject.h",
                     "location": {"line": 40, "column": 1},
                     "type_name": "NSString *"}
                ]
            }"#,
        );
        let res = run_lint(root.to_str().unwrap(), &["*.props.json".to_string()]);
        assert!(res.issues.is_empty());
        assert_eq!(res.summary.files, 1);
    }

    #[test]
    fn test_issues_are_sorted_across_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_dump(
            root,
            "b.props.json",
            r#"{"declarations": [
                {"source_file": "/Users/dev/Zed.m",
                 "location": {"line": 1, "column": 1},
                 "type_name": "NSString *"}
            ]}"#,
        );
        write_dump(
            root,
            "a.props.json",
            r#"{"declarations": [
                {"source_file": "/Users/dev/Alpha.m",
                 "location": {"line": 8, "column": 1},
                 "type_name": "NSArray *"}
            ]}"#,
        );
        let res = run_lint(root.to_str().unwrap(), &["*.props.json".to_string()]);
        assert_eq!(res.issues.len(), 2);
        assert_eq!(res.issues[0].file, "/Users/dev/Alpha.m");
        assert_eq!(res.issues[1].file, "/Users/dev/Zed.m");
        assert_eq!(res.summary.files, 2);
    }
}
