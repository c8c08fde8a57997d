use std::path::PathBuf;

use thiserror::Error;

use crate::image2text::OcrModel;

/// Failure of a single extraction request.
///
/// Every variant is recoverable: the facade logs it and yields no result for
/// the request, the rest of a batch keeps going.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Authentication failed for user: {username}")]
    AuthenticationFailed { username: String },

    #[error("Unsupported OCR engine: {0}")]
    UnsupportedEngine(String),

    #[error("Failed to load image from {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image transform '{stage}' failed: {message}")]
    Transform { stage: &'static str, message: String },

    #[error("Failed to initialize {engine} engine: {message}")]
    EngineInit { engine: OcrModel, message: String },

    #[error("{engine} OCR failed: {message}")]
    Ocr { engine: OcrModel, message: String },

    #[error("Language detection failed: {0}")]
    LanguageDetection(String),
}
