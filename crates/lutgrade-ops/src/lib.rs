//! # lutgrade-ops
//!
//! Applies a [`CubeLut`](lutgrade_lut::CubeLut) to every pixel of a
//! [`PixelBuffer`](lutgrade_core::PixelBuffer).
//!
//! Per pixel: normalize the integer channels to [0, 1], sample the LUT
//! trilinearly, scale back to the bit depth and quantize. Alpha is copied
//! untouched. Rows are processed in parallel with Rayon when the
//! `parallel` feature is enabled (default).
//!
//! # Example
//!
//! ```rust
//! use lutgrade_core::PixelBuffer;
//! use lutgrade_lut::CubeLut;
//! use lutgrade_ops::{apply, FilterOptions};
//!
//! let lut = CubeLut::identity(17).unwrap();
//! let img = PixelBuffer::from_u8(2, 1, 3, vec![10, 20, 30, 200, 100, 0]).unwrap();
//! let out = apply(&img, &lut, &FilterOptions::default()).unwrap();
//! assert_eq!(out, img);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Row-parallel filtering with Rayon (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod filter;

pub use error::{OpsError, OpsResult};
pub use filter::{apply, apply_in_place, apply_rgb_f32, FilterOptions, Quantize};
