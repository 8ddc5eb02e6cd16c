use crate::comparator::Comparison;
use std::collections::BTreeSet;

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Four lines to stdout, one enumerated collection each. Discrepancies
    /// are informational; the exit code does not depend on them.
    pub fn print_report(&self, result: &Comparison) {
        println!(
            "Imports found in codebase: {}",
            Self::format_names(&result.imports)
        );
        println!(
            "Packages declared in manifest: {}",
            Self::format_names(&result.declared)
        );
        println!(
            "Possibly missing from manifest (imported, not declared): {}",
            Self::format_names(&result.missing)
        );
        println!(
            "Possibly unused in codebase (declared, not imported): {}",
            Self::format_names(&result.unused)
        );
    }

    fn format_names(names: &BTreeSet<String>) -> String {
        if names.is_empty() {
            return "(none)".to_string();
        }
        names.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
