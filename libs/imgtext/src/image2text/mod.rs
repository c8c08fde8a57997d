mod language;
mod ocr;

pub use language::{detect_language, DetectedLanguage};
pub use ocr::{build_recognizer, NeuralConfig, OcrConfig, OcrInput, OcrModel, TextRecognizer};
pub use ocr::ALPHANUMERIC_ALLOWLIST;
pub use ocr::{NeuralRecognizer, TesseractRecognizer};
