pub mod auth;
pub mod config;
pub mod error;
pub mod image2text;
pub mod image_utils;
pub mod logger;
pub mod process;

pub use auth::{AccessGate, Credentials};
pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use process::{BatchResults, ExtractionOptions, ExtractionRequest, ExtractionResult, ImageTextExtractor};
