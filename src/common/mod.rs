pub mod display;
pub mod utils;
