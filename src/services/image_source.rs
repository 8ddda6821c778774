use std::path::Path;

use bead_core::{PixelGrid, Rgb};
use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::error::ImageError;
use crate::models::GridSpec;

/// Decode an image file and convert it to 8-bit RGB (alpha is dropped)
pub fn load_image(path: &Path) -> Result<RgbImage, ImageError> {
    let decoded = image::open(path).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(ImageError::Empty(path.to_path_buf()));
    }

    tracing::debug!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "Decoded input image"
    );
    Ok(rgb)
}

/// Resize to exactly one pixel per bead with bilinear filtering
pub fn resample_to_grid(image: &RgbImage, grid: GridSpec) -> Result<PixelGrid, ImageError> {
    let resized = if image.dimensions() == (grid.width, grid.height) {
        image.clone()
    } else {
        imageops::resize(image, grid.width, grid.height, FilterType::Triangle)
    };

    let cells: Vec<Rgb> = resized.pixels().map(|p| p.0).collect();
    PixelGrid::new(grid.width as usize, grid.height as usize, cells)
        .map_err(|e| ImageError::Resample(e.to_string()))
}
