//! Shared data models for lint output and declaration-dump inputs.

pub mod decl;

use serde::Serialize;

#[derive(Serialize)]
/// A single lint issue with severity and location.
pub struct Issue {
    pub file: String,
    pub rule: String,
    pub severity: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

#[derive(Serialize)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub files: usize,
}

#[derive(Serialize)]
/// Lint results container.
pub struct LintResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
