// OCR module structure
mod ocr_neural;
mod ocr_tesseract;

mod types;
pub use ocr_neural::NeuralRecognizer;
pub use ocr_tesseract::TesseractRecognizer;
pub use types::{NeuralConfig, OcrConfig, OcrModel, ALPHANUMERIC_ALLOWLIST};

use anyhow::Result;
use image::DynamicImage;
use std::path::Path;

/// What a recognizer gets to look at for one request.
///
/// `image` is the decoded and transformed image, `path` the file it came from.
pub struct OcrInput<'a> {
    pub image: &'a DynamicImage,
    pub path: &'a Path,
    pub language: &'a str,
}

/// A backing OCR engine.
pub trait TextRecognizer {
    fn model(&self) -> OcrModel;

    fn recognize(&self, input: &OcrInput<'_>) -> Result<String>;
}

/// Builds the engine for `model`. The neural engine loads its models here,
/// so callers should build it once and keep it.
pub fn build_recognizer(model: OcrModel, config: &OcrConfig) -> Result<Box<dyn TextRecognizer>> {
    match model {
        OcrModel::Tesseract => Ok(Box::new(TesseractRecognizer::new(config.clone()))),
        OcrModel::Neural => Ok(Box::new(NeuralRecognizer::load(&config.neural)?)),
    }
}
