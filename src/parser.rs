use crate::error::AuditError;
use log::trace;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Extracts the top-level module names referenced by a file's import
/// statements. Only the import root matters for the audit: `a.b.c`
/// collapses to `a`, and local aliases are discarded, because the root is
/// what a manifest would declare.
pub struct ImportExtractor {
    import_re: Regex,
    from_re: Regex,
    bare_import_re: Regex,
    from_keyword_re: Regex,
    identifier_re: Regex,
}

impl ImportExtractor {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            import_re: Regex::new(r"^\s*import\s+(.+)$")?,
            from_re: Regex::new(r"^\s*from\s+(\S+)\s+import\b")?,
            bare_import_re: Regex::new(r"^\s*import\s*$")?,
            from_keyword_re: Regex::new(r"^\s*from\b")?,
            identifier_re: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?,
        })
    }

    /// Read a source file and extract its import roots.
    pub fn extract_from_file(&self, path: &Path) -> Result<BTreeSet<String>, AuditError> {
        let content = fs::read_to_string(path).map_err(|source| AuditError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract_imports(&content, path)
    }

    /// Scan source text line by line, at any indentation depth, and collect
    /// the lowercase import root of every import statement.
    ///
    /// `from .x import y` is relative and yields nothing: it cannot name an
    /// external package. Dynamic imports (importlib, __import__) are not
    /// detected; that is a static-analysis limitation, not a bug.
    pub fn extract_imports(
        &self,
        content: &str,
        path: &Path,
    ) -> Result<BTreeSet<String>, AuditError> {
        let mut modules = BTreeSet::new();

        for (idx, line) in content.lines().enumerate() {
            let line_number = idx + 1;

            // A comment ends the code portion of a line; the remainder can
            // hold several statements separated by semicolons.
            for statement in Self::strip_comment(line).split(';') {
                self.scan_statement(statement, path, line_number, &mut modules)?;
            }
        }

        Ok(modules)
    }

    fn scan_statement(
        &self,
        statement: &str,
        path: &Path,
        line_number: usize,
        modules: &mut BTreeSet<String>,
    ) -> Result<(), AuditError> {
        if let Some(captures) = self.from_re.captures(statement) {
            let module = &captures[1];
            if module.starts_with('.') {
                trace!("{}:{}: skipping relative import", path.display(), line_number);
                return Ok(());
            }
            modules.insert(self.root_of(module, path, line_number)?);
        } else if self.bare_import_re.is_match(statement) {
            return Err(AuditError::Parse {
                path: path.to_path_buf(),
                line: line_number,
                reason: "import statement has no target".to_string(),
            });
        } else if let Some(captures) = self.import_re.captures(statement) {
            // Collect before inserting: a target that is not `name` or
            // `name as alias` means the whole line is prose (a docstring
            // sentence that happens to start with "import"), not an import
            // statement.
            let mut found = Vec::new();
            for target in captures[1].split(',') {
                let tokens: Vec<&str> = target.split_whitespace().collect();
                let dotted = match tokens.as_slice() {
                    [] => {
                        return Err(AuditError::Parse {
                            path: path.to_path_buf(),
                            line: line_number,
                            reason: "empty name in import list".to_string(),
                        })
                    }
                    [dotted] => dotted,
                    [dotted, kw, _alias] if *kw == "as" => dotted,
                    _ => {
                        trace!(
                            "{}:{}: ignoring non-import line",
                            path.display(),
                            line_number
                        );
                        return Ok(());
                    }
                };
                found.push(self.root_of(dotted, path, line_number)?);
            }
            modules.extend(found);
        } else if self.from_keyword_re.is_match(statement)
            && statement.split_whitespace().any(|t| t == "import")
        {
            // A from-statement without a resolvable module, e.g. `from import x`.
            return Err(AuditError::Parse {
                path: path.to_path_buf(),
                line: line_number,
                reason: "malformed from-import".to_string(),
            });
        }

        Ok(())
    }

    /// First dotted segment, validated and lowercased.
    fn root_of(&self, dotted: &str, path: &Path, line: usize) -> Result<String, AuditError> {
        let root = dotted.split('.').next().unwrap_or(dotted);
        if !self.identifier_re.is_match(root) {
            return Err(AuditError::Parse {
                path: path.to_path_buf(),
                line,
                reason: format!("'{}' is not a valid module name", root),
            });
        }
        Ok(root.to_lowercase())
    }

    fn strip_comment(line: &str) -> &str {
        match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn extract(source: &str) -> BTreeSet<String> {
        ImportExtractor::new()
            .unwrap()
            .extract_imports(source, &PathBuf::from("test.py"))
            .unwrap()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_import() {
        assert_eq!(extract("import os"), set(&["os"]));
    }

    #[test]
    fn test_submodule_collapses_to_root() {
        assert_eq!(extract("import os\nimport os.path"), set(&["os"]));
    }

    #[test]
    fn test_alias_is_discarded() {
        assert_eq!(extract("import numpy as np"), set(&["numpy"]));
    }

    #[test]
    fn test_comma_separated_targets() {
        assert_eq!(extract("import sys, json as j"), set(&["json", "sys"]));
    }

    #[test]
    fn test_from_import_yields_module_not_member() {
        assert_eq!(
            extract("from collections import OrderedDict"),
            set(&["collections"])
        );
    }

    #[test]
    fn test_from_submodule_yields_root() {
        assert_eq!(extract("from flask.views import MethodView"), set(&["flask"]));
    }

    #[test]
    fn test_relative_imports_excluded() {
        assert_eq!(extract("from . import sibling"), set(&[]));
        assert_eq!(extract("from .utils import helper"), set(&[]));
    }

    #[test]
    fn test_nested_imports_are_found() {
        let source = "def handler():\n    import requests\n    if True:\n        from flask import Flask\n";
        assert_eq!(extract(source), set(&["flask", "requests"]));
    }

    #[test]
    fn test_names_are_lowercased() {
        assert_eq!(extract("import PIL"), set(&["pil"]));
    }

    #[test]
    fn test_inline_comment_after_import() {
        assert_eq!(extract("import os  # stdlib"), set(&["os"]));
    }

    #[test]
    fn test_trailing_semicolon_is_valid() {
        assert_eq!(extract("import os;\nimport sys\n"), set(&["os", "sys"]));
    }

    #[test]
    fn test_semicolon_separated_statements() {
        assert_eq!(extract("import os; import sys"), set(&["os", "sys"]));
        assert_eq!(extract("from x import y; import z"), set(&["x", "z"]));
    }

    #[test]
    fn test_commented_out_statement_after_semicolon() {
        assert_eq!(extract("import os  # old; import sys"), set(&["os"]));
    }

    #[test]
    fn test_prose_starting_with_import_is_ignored() {
        // A docstring sentence, not an import list.
        assert_eq!(extract("import the data from disk\n"), set(&[]));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let source = "import b\nimport a\nfrom c.d import e\n";
        assert_eq!(extract(source), extract(source));
    }

    #[test]
    fn test_non_import_lines_are_ignored() {
        let source = "x = 1\nprint('import-free')\n# import commented\nfrom_config = load()\n";
        assert_eq!(extract(source), set(&[]));
    }

    #[test]
    fn test_bare_import_is_a_parse_error() {
        let extractor = ImportExtractor::new().unwrap();
        let err = extractor
            .extract_imports("import\n", &PathBuf::from("bad.py"))
            .unwrap_err();
        assert!(matches!(err, AuditError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_from_without_module_is_a_parse_error() {
        let extractor = ImportExtractor::new().unwrap();
        let err = extractor
            .extract_imports("from import y\n", &PathBuf::from("bad.py"))
            .unwrap_err();
        assert!(matches!(err, AuditError::Parse { .. }));
    }

    #[test]
    fn test_prose_from_line_is_not_an_error() {
        // Docstrings often start lines with "from"; without the import
        // keyword they are not import statements.
        assert_eq!(extract("from the beginning\n"), set(&[]));
    }

    #[test]
    fn test_invalid_root_is_a_parse_error() {
        let extractor = ImportExtractor::new().unwrap();
        let err = extractor
            .extract_imports("import 123abc\n", &PathBuf::from("bad.py"))
            .unwrap_err();
        assert!(matches!(err, AuditError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_source_read_error() {
        let extractor = ImportExtractor::new().unwrap();
        let err = extractor
            .extract_from_file(&PathBuf::from("/nonexistent/never.py"))
            .unwrap_err();
        assert!(matches!(err, AuditError::SourceRead { .. }));
    }
}
