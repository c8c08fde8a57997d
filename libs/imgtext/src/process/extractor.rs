use std::cell::OnceCell;
use std::path::Path;

use crate::auth::{AccessGate, Credentials};
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::image2text::{build_recognizer, detect_language, OcrConfig, OcrInput, OcrModel, TextRecognizer};
use crate::image_utils::{
    load_image_from_path, ImageTransform, Preprocess, RegionExtraction, RotationCorrection,
};

use super::batch::BatchResults;
use super::types::{ExtractionOptions, ExtractionRequest, ExtractionResult};

/// Authenticates, loads, transforms, recognizes and identifies the language
/// of one image at a time.
///
/// The tesseract engine is cheap and built eagerly. The neural engine loads
/// model files, so it is built on first use and reused afterwards.
pub struct ImageTextExtractor {
    gate: AccessGate,
    ocr_config: OcrConfig,
    tesseract: OnceCell<Box<dyn TextRecognizer>>,
    neural: OnceCell<Box<dyn TextRecognizer>>,
}

impl ImageTextExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        log::debug!(
            "Extractor ready with {} allowed user(s)",
            config.allowed_users.len()
        );
        Self {
            gate: AccessGate::new(config.allowed_users),
            ocr_config: config.ocr,
            tesseract: OnceCell::new(),
            neural: OnceCell::new(),
        }
    }

    /// Replaces the engine used for `recognizer.model()`.
    pub fn with_recognizer(mut self, recognizer: Box<dyn TextRecognizer>) -> Self {
        let cell = OnceCell::from(recognizer);
        match cell.get().map(|r| r.model()) {
            Some(OcrModel::Tesseract) => self.tesseract = cell,
            Some(OcrModel::Neural) => self.neural = cell,
            None => {}
        }
        self
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.gate.authenticate(username, password)
    }

    /// Runs one request, logging any failure once and yielding `None` for it.
    pub fn extract_text_from_image(
        &self,
        image_path: impl AsRef<Path>,
        credentials: &Credentials,
        options: &ExtractionOptions,
    ) -> Option<ExtractionResult> {
        let request = ExtractionRequest::new(image_path.as_ref(), options.clone());
        match self.try_extract(&request, credentials) {
            Ok(result) => Some(result),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        }
    }

    pub fn try_extract(
        &self,
        request: &ExtractionRequest,
        credentials: &Credentials,
    ) -> Result<ExtractionResult, ExtractError> {
        if !self.gate.check(credentials) {
            return Err(ExtractError::AuthenticationFailed {
                username: credentials.username.clone(),
            });
        }

        let options = &request.options;
        let model: OcrModel = options.engine.parse()?;
        log::debug!(
            "Extracting text from {} with {}",
            request.image_path.display(),
            model
        );

        let mut image = load_image_from_path(&request.image_path)?;
        for stage in Self::stages(options) {
            image = stage.apply(image).map_err(|e| ExtractError::Transform {
                stage: stage.name(),
                message: format!("{:#}", e),
            })?;
        }

        let recognizer = self.recognizer(model)?;
        let input = OcrInput {
            image: &image,
            path: &request.image_path,
            language: &options.language,
        };
        let text = recognizer.recognize(&input).map_err(|e| ExtractError::Ocr {
            engine: model,
            message: format!("{:#}", e),
        })?;

        let detected = detect_language(&text)?;
        log::debug!(
            "Detected {} ({:.2}) in {}",
            detected.code,
            detected.confidence,
            request.image_path.display()
        );

        Ok(ExtractionResult {
            text: text.trim().to_string(),
            language: detected.code,
            confidence: detected.confidence,
            engine: model,
        })
    }

    /// Runs every path through the single-image path, in order.
    pub fn batch_process_images<P: AsRef<Path>>(
        &self,
        image_paths: &[P],
        credentials: &Credentials,
        options: &ExtractionOptions,
    ) -> BatchResults {
        let mut results = BatchResults::new();
        for path in image_paths {
            let result = self.extract_text_from_image(path, credentials, options);
            results.insert(path.as_ref().to_path_buf(), result);
        }
        log::debug!(
            "Batch finished: {}/{} image(s) extracted",
            results.succeeded(),
            results.len()
        );
        results
    }

    fn stages(options: &ExtractionOptions) -> Vec<Box<dyn ImageTransform>> {
        let mut stages: Vec<Box<dyn ImageTransform>> = Vec::new();
        if options.preprocessing {
            stages.push(Box::new(Preprocess));
        }
        if options.rotation_correction {
            stages.push(Box::new(RotationCorrection));
        }
        if let Some(roi) = options.roi {
            stages.push(Box::new(RegionExtraction::new(roi)));
        }
        stages
    }

    fn recognizer(&self, model: OcrModel) -> Result<&dyn TextRecognizer, ExtractError> {
        let cell = match model {
            OcrModel::Tesseract => &self.tesseract,
            OcrModel::Neural => &self.neural,
        };
        if let Some(recognizer) = cell.get() {
            return Ok(&**recognizer);
        }

        let recognizer =
            build_recognizer(model, &self.ocr_config).map_err(|e| ExtractError::EngineInit {
                engine: model,
                message: format!("{:#}", e),
            })?;
        Ok(&**cell.get_or_init(|| recognizer))
    }
}
