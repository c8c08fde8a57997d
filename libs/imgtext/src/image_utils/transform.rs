use anyhow::Result;
use image::DynamicImage;

use super::utils::Roi;

/// A step applied to the image before OCR.
///
/// The default `apply` hands the image back untouched; stages override it
/// once they have real work to do.
pub trait ImageTransform {
    fn name(&self) -> &'static str;

    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        Ok(image)
    }
}

/// Resizing, denoising and thresholding hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct Preprocess;

impl ImageTransform for Preprocess {
    fn name(&self) -> &'static str {
        "preprocess"
    }
}

/// Text orientation correction hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationCorrection;

impl ImageTransform for RotationCorrection {
    fn name(&self) -> &'static str {
        "rotation_correction"
    }
}

/// Region-of-interest hook. Carries its region but does not crop yet.
#[derive(Clone, Copy, Debug)]
pub struct RegionExtraction {
    pub roi: Roi,
}

impl RegionExtraction {
    pub fn new(roi: Roi) -> Self {
        Self { roi }
    }
}

impl ImageTransform for RegionExtraction {
    fn name(&self) -> &'static str {
        "roi_extraction"
    }
}
