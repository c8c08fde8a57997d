use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrModel {
    Tesseract,
    Neural,
}

impl std::fmt::Display for OcrModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OcrModel::Tesseract => write!(f, "Tesseract"),
            OcrModel::Neural => write!(f, "Neural"),
        }
    }
}

impl FromStr for OcrModel {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tesseract" => Ok(OcrModel::Tesseract),
            "neural" | "ocrs" => Ok(OcrModel::Neural),
            _ => Err(ExtractError::UnsupportedEngine(s.to_string())),
        }
    }
}

/// Characters the neural engine is allowed to emit.
pub const ALPHANUMERIC_ALLOWLIST: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuralConfig {
    pub detection_model: PathBuf,
    pub recognition_model: PathBuf,
    pub allowlist: Option<String>, // None disables filtering
}

impl Default for NeuralConfig {
    fn default() -> Self {
        let model_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ocrs");
        Self {
            detection_model: model_dir.join("text-detection.rten"),
            recognition_model: model_dir.join("text-recognition.rten"),
            allowlist: Some(ALPHANUMERIC_ALLOWLIST.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    pub engine_path: Option<PathBuf>, // tesseract binary, PATH lookup when unset
    pub dpi: Option<u32>,             // dots per inch
    pub psm: Option<u32>,             // Page segmentation mode
    pub oem: Option<u32>,             // OCR Engine Mode
    pub neural: NeuralConfig,
}

impl OcrConfig {
    pub fn new(engine_path: Option<PathBuf>, dpi: Option<u32>, psm: Option<u32>, oem: Option<u32>) -> Self {
        Self {
            engine_path,
            dpi,
            psm,
            oem,
            neural: NeuralConfig::default(),
        }
    }

    pub fn get_default_dpi() -> u32 {
        300
    }

    pub fn get_default_psm() -> u32 {
        3
    }

    pub fn get_default_oem() -> u32 {
        3
    }
}
