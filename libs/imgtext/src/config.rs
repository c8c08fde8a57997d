use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::image2text::OcrConfig;

pub const DEFAULT_ERROR_LOG: &str = "image_text_extractor.log";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub allowed_users: HashMap<String, String>,
    pub error_log: Option<PathBuf>,
    pub ocr: OcrConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            allowed_users: HashMap::new(),
            error_log: Some(PathBuf::from(DEFAULT_ERROR_LOG)),
            ocr: OcrConfig::default(),
        }
    }
}

impl ExtractorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.allowed_users.insert(username.into(), password.into());
        self
    }
}
