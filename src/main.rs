//! Proplint CLI binary entry point.
//! Delegates to modules for the lint run and prints results.

mod checker;
mod cli;
mod config;
mod lint;
mod models;
mod output;
mod rules;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            repo_root,
            pattern,
            output,
        } => {
            let eff =
                config::resolve_effective(repo_root.as_deref(), &pattern, output.as_deref());
            // Friendly note if no proplint config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No proplint.toml found; using defaults."
                );
            }
            // Emit single top info when the built-in dump glob is used
            if eff.output != "json" && !eff.patterns_configured {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("Using default pattern: {}", config::DEFAULT_PATTERN)
                );
            }
            let repo_root_str = eff.repo_root.to_string_lossy().to_string();
            let result = lint::run_lint(&repo_root_str, &eff.patterns);
            if result.summary.files == 0 {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "No dump files matched {:?} under '{}'. Pass --pattern or configure proplint.toml.",
                        eff.patterns, repo_root_str
                    )
                );
                std::process::exit(2);
            }
            output::print_lint(&result, &eff.output);
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
        }
    }
}
