use crate::{
    comparator::{compare, Comparison},
    config::Config,
    file_discovery::FileDiscovery,
    manifest,
    parser::ImportExtractor,
};
use anyhow::Result;
use log::{debug, warn};
use std::collections::BTreeSet;

/// Runs one audit: walk the tree, extract imports, read the manifest,
/// diff the two sets.
pub struct Analyzer {
    config: Config,
    file_discovery: FileDiscovery,
    extractor: ImportExtractor,
}

impl Analyzer {
    pub fn new(config: Config) -> Result<Self> {
        let file_discovery = FileDiscovery::new(config.clone());
        let extractor = ImportExtractor::new()?;

        Ok(Self {
            config,
            file_discovery,
            extractor,
        })
    }

    pub fn run(&self) -> Result<Comparison> {
        let files = self.file_discovery.discover_files()?;
        debug!("Auditing {} source files", files.len());

        // Files are independent; the union is order-insensitive. A file that
        // fails to read or parse is skipped with a warning and never discards
        // imports already gathered from other files.
        let mut imports = BTreeSet::new();
        for path in &files {
            match self.extractor.extract_from_file(path) {
                Ok(found) => imports.extend(found),
                Err(e) => warn!("skipping {}: {}", path.display(), e),
            }
        }

        // The manifest is the one input the audit cannot do without.
        let declared = manifest::read_manifest(&self.config.manifest_path)?;

        Ok(compare(imports, declared))
    }
}
