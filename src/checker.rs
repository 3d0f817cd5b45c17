//! The property qualifier rule.
//!
//! `check` inspects one property declaration and decides whether it is
//! missing the `copy` qualifier on a type that needs it. Pure and stateless:
//! every declaration is judged on its own, in any order, with no shared
//! state between calls.

use crate::models::decl::{PropertyAttribute, PropertyDeclaration, SourceLocation};
use crate::rules::RuleSet;

/// Severity attached to every finding. Missing `copy` fails the build;
/// a warning here would just accumulate as debt.
pub const SEVERITY: &str = "error";

/// Rule identifier used in issue output.
pub const RULE_ID: &str = "property-copy";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rule violation, anchored to the declaration's source location.
pub struct Finding {
    pub location: SourceLocation,
    pub severity: &'static str,
    pub message: String,
    pub type_name: String,
}

/// Whether a file name points at user-authored code.
///
/// Empty names (synthesized declarations) and anything under a vendor
/// prefix are skipped; the rule targets user code, not SDK headers pulled
/// in transitively.
pub fn is_user_source(rules: &RuleSet, file_name: &str) -> bool {
    if file_name.is_empty() {
        return false;
    }
    !rules
        .vendor_prefixes
        .iter()
        .any(|p| file_name.starts_with(p.as_str()))
}

/// Whether the declared type should carry the `copy` qualifier.
///
/// Substring test on purpose, not a canonical type match: it must also
/// catch pointer and generic spellings like `NSArray<NSString *> *`.
pub fn needs_copy_semantics(rules: &RuleSet, type_name: &str) -> bool {
    rules
        .copy_required_types
        .iter()
        .any(|t| type_name.contains(t.as_str()))
}

/// Evaluate one declaration against the rule set.
///
/// Returns a finding iff the declaration is in user source, its type is in
/// the watched set, and the `copy` flag is absent. Origin is tested first;
/// it filters out the bulk of declarations (SDK headers) cheapest.
pub fn check(rules: &RuleSet, decl: &PropertyDeclaration) -> Option<Finding> {
    if !is_user_source(rules, &decl.source_file) {
        return None;
    }
    if !needs_copy_semantics(rules, &decl.type_name) {
        return None;
    }
    if decl.attributes.contains(&PropertyAttribute::Copy) {
        return None;
    }
    Some(Finding {
        location: decl.location,
        severity: SEVERITY,
        message: format!(
            "property of type {} is not declared copy; a mutable instance \
             assigned as its backing storage can silently change the \
             property's value out from under its owner",
            decl.type_name
        ),
        type_name: decl.type_name.clone(),
    })
}
