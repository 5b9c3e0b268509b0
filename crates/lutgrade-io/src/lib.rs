//! # lutgrade-io
//!
//! Image decoding and encoding for the lutgrade filter.
//!
//! Files are decoded into a [`PixelBuffer`] at their native bit depth and
//! encoded back from one. Grayscale inputs are expanded to RGB so the
//! LUT always sees three color channels.
//!
//! | Format | Read | Write | Bit Depths |
//! |--------|------|-------|------------|
//! | PNG | Yes | Yes | 8, 16 |
//! | TIFF | Yes | Yes | 8, 16, 32f (LZW on write) |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lutgrade_io::{read, write};
//!
//! let image = read("input.tif")?;
//! write("output.png", &image)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `tiff` - TIFF support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "tiff")]
pub mod tiff;

pub use detect::Format;
pub use error::{IoError, IoResult};

use lutgrade_core::PixelBuffer;
use std::path::Path;
use tracing::trace;

/// Reads an image, detecting the format from magic bytes or extension.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    trace!(path = %path.display(), ?format, "lutgrade_io::read");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "tiff")]
        Format::Tiff => tiff::read(path),

        #[allow(unreachable_patterns)]
        _ => Err(unsupported(path)),
    }
}

/// Writes an image, choosing the format from the file extension.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    trace!(path = %path.display(), ?format, "lutgrade_io::write");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "tiff")]
        Format::Tiff => tiff::write(path, image),

        #[allow(unreachable_patterns)]
        _ => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

/// Expands 1- or 2-channel samples (gray, gray+alpha) to RGB or RGBA.
#[allow(dead_code)]
pub(crate) fn expand_gray<T: Copy>(samples: &[T], with_alpha: bool) -> Vec<T> {
    if with_alpha {
        samples
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect()
    } else {
        samples.iter().flat_map(|&g| [g, g, g]).collect()
    }
}
