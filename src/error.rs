use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a single audit run.
///
/// Only `ManifestRead` is fatal; the walker and extractor errors are
/// recoverable and the analyzer logs them and keeps going.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    #[error("failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid import statement in {path} at line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl AuditError {
    /// Fatal errors abort the run; everything else is skip-with-warning.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AuditError::ManifestRead { .. })
    }
}
