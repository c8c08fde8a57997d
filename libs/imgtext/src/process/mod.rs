mod batch;
mod extractor;
mod types;

pub use batch::BatchResults;
pub use extractor::ImageTextExtractor;
pub use types::{ExtractionOptions, ExtractionRequest, ExtractionResult};
