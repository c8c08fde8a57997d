mod transform;
mod utils;

pub use transform::{ImageTransform, Preprocess, RegionExtraction, RotationCorrection};
pub use utils::{load_image_from_path, Roi};
