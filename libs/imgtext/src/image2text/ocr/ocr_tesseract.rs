use anyhow::{Context, Result};
use image::DynamicImage;
use rusty_tesseract::{Args, Image};
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use super::types::{OcrConfig, OcrModel};
use super::{OcrInput, TextRecognizer};

pub struct TesseractRecognizer {
    config: OcrConfig,
}

impl TesseractRecognizer {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    fn args(&self, language: &str) -> Args {
        Args {
            lang: language.to_string(),
            config_variables: HashMap::new(),
            dpi: Some(self.config.dpi.unwrap_or(OcrConfig::get_default_dpi()) as i32),
            psm: Some(self.config.psm.unwrap_or(OcrConfig::get_default_psm()) as i32),
            oem: Some(self.config.oem.unwrap_or(OcrConfig::get_default_oem()) as i32),
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn model(&self) -> OcrModel {
        OcrModel::Tesseract
    }

    fn recognize(&self, input: &OcrInput<'_>) -> Result<String> {
        let args = self.args(input.language);
        match &self.config.engine_path {
            Some(binary) => perform_ocr_with_binary(binary, input.image, &args),
            None => perform_ocr_tesseract(input.image, &args),
        }
    }
}

fn perform_ocr_tesseract(image: &DynamicImage, args: &Args) -> Result<String> {
    let ocr_image = Image::from_dynamic_image(image).context("Failed to hand image to tesseract")?;
    let text = rusty_tesseract::image_to_string(&ocr_image, args)?;
    Ok(text)
}

// rusty-tesseract always resolves `tesseract` from PATH, so an explicit
// binary is driven directly with the same arguments.
fn perform_ocr_with_binary(binary: &Path, image: &DynamicImage, args: &Args) -> Result<String> {
    let scratch = tempfile::Builder::new()
        .prefix("imgtext-")
        .suffix(".png")
        .tempfile()
        .context("Failed to create scratch image")?;
    image
        .save_with_format(scratch.path(), image::ImageFormat::Png)
        .context("Failed to write scratch image")?;

    let output = Command::new(binary)
        .args(command_args(scratch.path(), args))
        .output()
        .with_context(|| format!("Failed to run {}", binary.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow::anyhow!(
            "{} exited with {}: {}",
            binary.display(),
            output.status,
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn command_args(image_path: &Path, args: &Args) -> Vec<String> {
    let mut command = vec![
        image_path.display().to_string(),
        "stdout".to_string(),
        "-l".to_string(),
        args.lang.clone(),
    ];
    if let Some(dpi) = args.dpi {
        command.extend(["--dpi".to_string(), dpi.to_string()]);
    }
    if let Some(psm) = args.psm {
        command.extend(["--psm".to_string(), psm.to_string()]);
    }
    if let Some(oem) = args.oem {
        command.extend(["--oem".to_string(), oem.to_string()]);
    }
    command
}
