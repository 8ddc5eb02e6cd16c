use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of the source tree to scan.
    pub source_dir: PathBuf,
    /// Dependency manifest to audit against.
    pub manifest_path: PathBuf,
    /// Extension of files handed to the import extractor.
    pub file_extension: String,
    /// Follow symlinks while walking the tree.
    pub follow_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            manifest_path: PathBuf::from("requirements.txt"),
            file_extension: "py".to_string(),
            follow_links: false,
        }
    }
}

impl Config {
    /// Load config from a specific file path
    pub fn from_file(path: &PathBuf) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a file
    pub fn to_file(&self, path: &PathBuf) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create a config file with all available options documented
    pub fn create_documented_config() -> String {
        r#"# import-audit configuration file

# Root of the source tree to scan for Python imports
source_dir = "."

# Dependency manifest to audit against
manifest_path = "requirements.txt"

# Extension of source files handed to the import extractor
file_extension = "py"

# Follow symlinks while walking the source tree
follow_links = false
"#
        .to_string()
    }
}
