//! Configuration discovery and effective settings resolution.
//!
//! Proplint reads `proplint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `patterns`: `["**/*.props.json"]`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults. The config file only
//! steers the adapter (which dumps to scan, how to print); the rule set
//! itself is compile-time fixed.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Dump glob used when neither CLI nor config file names any.
pub const DEFAULT_PATTERN: &str = "**/*.props.json";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `proplint.toml|yaml`.
pub struct ProplintConfig {
    pub patterns: Option<Vec<String>>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub patterns: Vec<String>,
    /// Whether the patterns came from CLI/config rather than the default.
    pub patterns_configured: bool,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `proplint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("proplint.toml").exists()
            || cur.join("proplint.yaml").exists()
            || cur.join("proplint.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ProplintConfig` from `proplint.toml` or `proplint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<ProplintConfig> {
    let toml_path = root.join("proplint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: ProplintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["proplint.yaml", "proplint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: ProplintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_patterns: &[String],
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let (patterns, patterns_configured) = if !cli_patterns.is_empty() {
        (cli_patterns.to_vec(), true)
    } else if let Some(p) = cfg.patterns {
        (p, true)
    } else {
        (vec![DEFAULT_PATTERN.to_string()], false)
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        repo_root,
        patterns,
        patterns_configured,
        output,
    }
}
