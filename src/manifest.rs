use crate::error::AuditError;
use log::{debug, trace};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Delimiters that end the package name on a requirements line: version
/// comparators, extras, environment markers, inline comments.
const NAME_DELIMITERS: &[&str] = &["==", ">=", "<=", "!=", "~=", ">", "<", "=", "[", ";", "#"];

/// Read a requirements-style manifest and return the set of declared package
/// names, lowercased and stripped of version/extras/marker syntax.
///
/// An unreadable manifest is the one fatal error of the whole audit.
pub fn read_manifest(path: &Path) -> Result<BTreeSet<String>, AuditError> {
    let content = fs::read_to_string(path).map_err(|source| AuditError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    let packages = parse_manifest(&content);
    debug!(
        "Read {} declared packages from {}",
        packages.len(),
        path.display()
    );
    Ok(packages)
}

/// Parse manifest text. Blank lines, full-line comments, and pip option
/// lines (`-r`, `--hash`, `-e` ...) declare no package and are skipped, as
/// is any line that yields an empty name after stripping.
pub fn parse_manifest(content: &str) -> BTreeSet<String> {
    let mut packages = BTreeSet::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }

        let name = strip_specifiers(line).trim().to_lowercase();
        if name.is_empty() {
            trace!("manifest line yields no package name: {:?}", line);
            continue;
        }
        packages.insert(name);
    }

    packages
}

/// Cut the line at the first occurrence of any name delimiter.
fn strip_specifiers(line: &str) -> &str {
    let cut = NAME_DELIMITERS
        .iter()
        .filter_map(|d| line.find(d))
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}
