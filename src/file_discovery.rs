use crate::config::Config;
use crate::error::AuditError;
use ignore::WalkBuilder;
use log::{debug, warn};
use std::path::PathBuf;

pub struct FileDiscovery {
    config: Config,
}

impl FileDiscovery {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Recursively collect every file under `source_dir` with the configured
    /// extension. Hidden directories and virtual environments are scanned
    /// like everything else; excluding them is the caller's business.
    pub fn discover_files(&self) -> crate::Result<Vec<PathBuf>> {
        debug!(
            "Walking source tree from root: {}",
            self.config.source_dir.display()
        );

        let walker = WalkBuilder::new(&self.config.source_dir)
            .standard_filters(false)
            .hidden(false)
            .follow_links(self.config.follow_links)
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                // Unreadable subdirectory: warn and keep walking.
                Err(e) => {
                    warn!("{}", AuditError::Walk(e));
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            if path.extension().and_then(|e| e.to_str()) == Some(self.config.file_extension.as_str())
            {
                files.push(path.to_path_buf());
            }
        }

        debug!("Discovered {} source files", files.len());
        Ok(files)
    }
}
