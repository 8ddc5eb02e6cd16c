use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result of one audit run: the two source sets plus their differences.
/// Immutable once computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Import roots found across the source tree.
    pub imports: BTreeSet<String>,
    /// Package names declared in the manifest.
    pub declared: BTreeSet<String>,
    /// Imported but not declared.
    pub missing: BTreeSet<String>,
    /// Declared but never imported.
    pub unused: BTreeSet<String>,
}

impl Comparison {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}

/// Compute both set differences. Pure; empty inputs are fine.
///
/// Comparison is by surface name only: an import root whose published
/// distribution has a different name (PIL/pillow, sklearn/scikit-learn)
/// shows up as both missing and unused. Accepted limitation.
pub fn compare(imports: BTreeSet<String>, declared: BTreeSet<String>) -> Comparison {
    let missing = imports.difference(&declared).cloned().collect();
    let unused = declared.difference(&imports).cloned().collect();
    Comparison {
        imports,
        declared,
        missing,
        unused,
    }
}
