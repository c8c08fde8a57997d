use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::image2text::OcrModel;
use crate::image_utils::Roi;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    pub language: String,
    pub engine: String, // parsed into OcrModel per request
    pub preprocessing: bool,
    pub rotation_correction: bool,
    pub roi: Option<Roi>,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            engine: "tesseract".to_string(),
            preprocessing: true,
            rotation_correction: true,
            roi: None,
        }
    }
}

impl ExtractionOptions {
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[derive(Clone, Debug)]
pub struct ExtractionRequest {
    pub image_path: PathBuf,
    pub options: ExtractionOptions,
}

impl ExtractionRequest {
    pub fn new(image_path: impl Into<PathBuf>, options: ExtractionOptions) -> Self {
        Self {
            image_path: image_path.into(),
            options,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub text: String,
    pub language: String,
    pub confidence: f64,
    pub engine: OcrModel,
}
