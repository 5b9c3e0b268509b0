//! CLI command implementations

pub mod apply;
pub mod batch;
pub mod identity;
pub mod info;

use anyhow::{Context, Result};
use lutgrade_core::PixelBuffer;
use lutgrade_lut::{cube, CubeLut};
use lutgrade_ops::{FilterOptions, Quantize};
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    lutgrade_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &PixelBuffer) -> Result<()> {
    lutgrade_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parse a `.cube` file
pub fn load_lut(path: &Path) -> Result<CubeLut> {
    cube::read(path).with_context(|| format!("Failed to load LUT: {}", path.display()))
}

/// Filter options for the `--truncate` flag
pub fn filter_options(truncate: bool) -> FilterOptions {
    let quantize = if truncate { Quantize::Truncate } else { Quantize::Round };
    FilterOptions::default().with_quantize(quantize)
}
