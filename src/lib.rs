pub mod analyzer;
pub mod comparator;
pub mod config;
pub mod error;
pub mod file_discovery;
pub mod manifest;
pub mod parser;
pub mod reporter;

pub use analyzer::Analyzer;
pub use comparator::{compare, Comparison};
pub use config::Config;
pub use error::AuditError;
pub use file_discovery::FileDiscovery;
pub use parser::ImportExtractor;
pub use reporter::Reporter;

pub type Result<T> = anyhow::Result<T>;
