//! Output rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-issue fields and a top-level summary.

use crate::models::LintResult;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for is in &res.issues {
                let sev = match is.severity.as_str() {
                    "error" => {
                        if color {
                            "⟦error⟧".red().bold().to_string()
                        } else {
                            "⟦error⟧".to_string()
                        }
                    }
                    "warning" | "warn" => {
                        if color {
                            "⟦warn⟧".yellow().bold().to_string()
                        } else {
                            "⟦warn⟧".to_string()
                        }
                    }
                    _ => {
                        if color {
                            "⟦info⟧".blue().bold().to_string()
                        } else {
                            "⟦info⟧".to_string()
                        }
                    }
                };
                let icon = match is.severity.as_str() {
                    "error" => "✖".red().to_string(),
                    "warning" | "warn" => "▲".yellow().to_string(),
                    _ => "◆".blue().to_string(),
                };
                let loc = format!("{}:{}:{}", is.file, is.line, is.column);
                let loc = if color { loc.bold().to_string() } else { loc };
                println!("{} {} {} ❲{}❳ — {}", icon, sev, loc, is.rule, is.message);
            }
            let summary = format!(
                "— Summary — errors={} warnings={} infos={} files={}",
                res.summary.errors, res.summary.warnings, res.summary.infos, res.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    // Directly serialize LintResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}
