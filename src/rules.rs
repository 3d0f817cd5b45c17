//! The fixed rule set the checker evaluates against.
//!
//! Constants are compile-time: there is no runtime surface for editing the
//! watched type list. Vendor prefixes live in a `Vec` so a caller can build
//! a `RuleSet` with different exclusions, but the default is the single
//! reference prefix.

/// Filesystem prefix identifying SDK/framework headers to skip.
pub const DEFAULT_VENDOR_PREFIX: &str = "/Applications/Xcode.app/";

/// Type-name substrings whose properties must be declared `copy`.
pub const COPY_REQUIRED_TYPES: [&str; 3] = ["NSString", "NSArray", "NSDictionary"];

#[derive(Debug, Clone)]
/// Vendor-path exclusions plus the watched type-name substrings.
pub struct RuleSet {
    pub vendor_prefixes: Vec<String>,
    pub copy_required_types: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            vendor_prefixes: vec![DEFAULT_VENDOR_PREFIX.to_string()],
            copy_required_types: COPY_REQUIRED_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RuleSet {
    /// Rule set with custom vendor exclusions and the default type list.
    pub fn with_vendor_prefixes(prefixes: Vec<String>) -> Self {
        RuleSet {
            vendor_prefixes: prefixes,
            ..RuleSet::default()
        }
    }
}
