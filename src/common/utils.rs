use anyhow::Result;
use imgtext::ExtractorConfig;
use std::path::Path;

/// Reads `path` when given, otherwise falls back to the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    match path {
        Some(path) => ExtractorConfig::from_file(path),
        None => Ok(ExtractorConfig::default()),
    }
}
