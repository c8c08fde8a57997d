use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::ExtractError;

pub fn load_image_from_path(path: &Path) -> Result<DynamicImage, ExtractError> {
    image::open(path).map_err(|source| ExtractError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Rectangle to extract text from, in pixels from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FromStr for Roi {
    type Err = anyhow::Error;

    /// Parses `x,y,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<u32>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid region '{}': {}", s, e))?;

        match parts.as_slice() {
            [x, y, width, height] if *width > 0 && *height > 0 => Ok(Roi {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            }),
            [_, _, _, _] => Err(anyhow::anyhow!("Region '{}' has zero area", s)),
            _ => Err(anyhow::anyhow!(
                "Region '{}' must have the form x,y,width,height",
                s
            )),
        }
    }
}
