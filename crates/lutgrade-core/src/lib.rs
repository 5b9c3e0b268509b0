//! # lutgrade-core
//!
//! Pixel buffer types shared by the lutgrade crates.
//!
//! The LUT filter never sees an image file. It works on a [`PixelBuffer`]:
//! width, height, 3 or 4 interleaved channels, and samples stored as
//! 8-bit, 16-bit or 32-bit float values. Codecs in `lutgrade-io` produce and
//! consume this type; `lutgrade-ops` filters it.
//!
//! ```text
//! lutgrade-core (this crate)
//!    ^
//!    |
//!    +-- lutgrade-io  (PNG / TIFF <-> PixelBuffer)
//!    +-- lutgrade-ops (PixelBuffer -> LUT -> PixelBuffer)
//! ```
//!
//! # Example
//!
//! ```rust
//! use lutgrade_core::{BitDepth, PixelBuffer};
//!
//! let buf = PixelBuffer::from_u8(2, 1, 3, vec![0, 128, 255, 10, 20, 30]).unwrap();
//! assert_eq!(buf.bit_depth(), BitDepth::U8);
//! assert_eq!(buf.pixel_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod format;

pub use buffer::{PixelBuffer, PixelData};
pub use error::{CoreError, CoreResult};
pub use format::BitDepth;
