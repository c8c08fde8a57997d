mod types;
pub use types::DetectedLanguage;

use crate::error::ExtractError;

/// Identifies the language of `text`.
///
/// Codes are ISO 639-3 (`eng`, `deu`, ...), the same scheme tesseract uses
/// for its language hint.
pub fn detect_language(text: &str) -> Result<DetectedLanguage, ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::LanguageDetection(
            "no features in text".to_string(),
        ));
    }

    let info = whatlang::detect(text).ok_or_else(|| {
        ExtractError::LanguageDetection(format!(
            "could not identify language of {} characters",
            text.chars().count()
        ))
    })?;

    Ok(DetectedLanguage {
        code: info.lang().code().to_string(),
        name: info.lang().eng_name().to_string(),
        confidence: info.confidence(),
        reliable: info.is_reliable(),
    })
}
