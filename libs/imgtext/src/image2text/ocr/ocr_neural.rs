use anyhow::{Context, Result};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use std::path::Path;

use super::types::{NeuralConfig, OcrModel};
use super::{OcrInput, TextRecognizer};

/// `ocrs` detection + recognition pipeline.
pub struct NeuralRecognizer {
    engine: OcrEngine,
    allowlist: Option<String>,
}

impl NeuralRecognizer {
    pub fn load(config: &NeuralConfig) -> Result<Self> {
        log::debug!(
            "Loading neural OCR models from {} and {}",
            config.detection_model.display(),
            config.recognition_model.display()
        );
        let detection_model = load_model(&config.detection_model)?;
        let recognition_model = load_model(&config.recognition_model)?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })?;

        Ok(Self {
            engine,
            allowlist: config.allowlist.clone(),
        })
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        // the neural engine works from the file on disk, not the transformed image
        let image = image::open(path)
            .with_context(|| format!("Failed to load image from {}", path.display()))?
            .into_rgb8();
        let source = ImageSource::from_bytes(image.as_raw(), image.dimensions())?;
        let input = self.engine.prepare_input(source)?;

        let word_rects = self.engine.detect_words(&input)?;
        let line_rects = self.engine.find_text_lines(&input, &word_rects);
        let line_texts = self.engine.recognize_text(&input, &line_rects)?;

        Ok(line_texts
            .iter()
            .flatten()
            .map(|line| line.to_string())
            .collect())
    }
}

impl TextRecognizer for NeuralRecognizer {
    fn model(&self) -> OcrModel {
        OcrModel::Neural
    }

    fn recognize(&self, input: &OcrInput<'_>) -> Result<String> {
        if input.language != "eng" {
            log::debug!("Neural engine ignores language hint '{}'", input.language);
        }
        let lines = self.read_lines(input.path)?;
        Ok(join_fragments(&lines, self.allowlist.as_deref()))
    }
}

fn load_model(path: &Path) -> Result<Model> {
    Model::load_file(path).with_context(|| format!("Failed to load OCR model {}", path.display()))
}

/// Drops characters outside `allowlist` from each fragment and joins the
/// non-empty fragments with single spaces.
pub(crate) fn join_fragments(fragments: &[String], allowlist: Option<&str>) -> String {
    fragments
        .iter()
        .map(|fragment| match allowlist {
            Some(allowed) => filter_allowed(fragment, allowed),
            None => fragment.trim().to_string(),
        })
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<String>>()
        .join(" ")
}

fn filter_allowed(fragment: &str, allowed: &str) -> String {
    fragment
        .split_whitespace()
        .map(|word| word.chars().filter(|c| allowed.contains(*c)).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<String>>()
        .join(" ")
}
