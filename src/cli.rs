//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "proplint",
    version,
    about = "Property qualifier checker for Objective-C declaration dumps",
    long_about = "Proplint — flags Objective-C properties of NSString/NSArray/NSDictionary type that are not declared 'copy'.\n\nConfiguration precedence: CLI > proplint.toml > defaults.",
    after_help = "Examples:\n  proplint lint\n  proplint lint --pattern 'build/dumps/**/*.props.json'\n  proplint lint --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current proplint version."
    )]
    Version,
    /// Check declaration dumps for missing copy qualifiers
    #[command(
        about = "Run the property qualifier check",
        long_about = "Scan translation-unit dump files for property declarations of NSString/NSArray/NSDictionary type missing the 'copy' qualifier. Error findings fail the run.",
        after_help = "Examples:\n  proplint lint\n  proplint lint --pattern 'dumps/*.json' --output json"
    )]
    Lint {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(
            long,
            help = "Dump glob, repeatable (default: **/*.props.json or proplint.toml patterns)"
        )]
        pattern: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
