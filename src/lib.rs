//! Proplint core library.
//!
//! This crate exposes programmatic APIs for checking Objective-C property
//! declarations for a missing `copy` qualifier on mutable-capable value
//! types (NSString, NSArray, NSDictionary).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `checker`: The property qualifier rule itself (pure).
//! - `rules`: The fixed rule set (vendor prefixes, watched type names).
//! - `lint`: Translation-unit dump scanning driving the checker.
//! - `models`: Data models for declaration records and lint output structs.
//! - `output`: Human/JSON printers for lint results.
//! - `utils`: Supporting helpers.
pub mod checker;
pub mod cli;
pub mod config;
pub mod lint;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;
