//! Declaration-dump schema: the JSON shape a front end writes per
//! translation unit.
//!
//! A dump file holds one `TranslationUnitDump` with a `declarations` array.
//! Each element is a read-only view of one property declaration: originating
//! file, source location, the textual rendering of the declared type, and
//! the qualifier flags attached to the declaration.

use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Deserialize)]
/// Top-level dump document for a single translation unit.
pub struct TranslationUnitDump {
    #[serde(default)]
    pub declarations: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
/// One property declaration as reported by the front end.
pub struct PropertyDeclaration {
    /// Originating file; empty for synthesized/unknown declarations.
    #[serde(default)]
    pub source_file: String,
    #[serde(default)]
    pub location: SourceLocation,
    /// Textual rendering of the declared type, e.g. `"NSString *"`.
    pub type_name: String,
    #[serde(default)]
    pub attributes: BTreeSet<PropertyAttribute>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Position the diagnostic is anchored to. Opaque to the checker; it is
/// only copied through into the finding.
pub struct SourceLocation {
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
/// Qualifier flags a property declaration can carry. Mirrors the ObjC
/// property attribute kinds reported by a Clang-style front end.
pub enum PropertyAttribute {
    Copy,
    Weak,
    Strong,
    Assign,
    Retain,
    Atomic,
    Nonatomic,
    Readonly,
    Readwrite,
}
