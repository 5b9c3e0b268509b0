//! # lutgrade-lut
//!
//! 3D color lookup tables in the `.cube` text format.
//!
//! - [`CubeLut`] - an immutable N×N×N grid of RGB samples
//! - [`cube`] - `.cube` parsing and writing
//! - [`TrilinearSampler`] / [`sample`] - trilinear interpolation
//!
//! # Usage
//!
//! ```rust
//! use lutgrade_lut::{cube, sample, Color};
//!
//! let text = "LUT_3D_SIZE 2
//! 0 0 0
//! 1 0 0
//! 0 1 0
//! 1 1 0
//! 0 0 1
//! 1 0 1
//! 0 1 1
//! 1 1 1
//! ";
//! let lut = cube::parse_str(text).unwrap();
//! let out = sample(&lut, Color::new(0.5, 0.5, 0.5)).unwrap();
//! assert!((out.r - 0.5).abs() < 1e-6);
//! ```
//!
//! # Grid order
//!
//! Samples are stored in file order: red varies fastest, then green,
//! then blue. The sample for grid point `(x, y, z)` lives at
//! `x + size * (y + size * z)`.
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Parser diagnostics
//!
//! # Used By
//!
//! - `lutgrade-ops` - Image filtering
//! - `lutgrade-cli` - Command line

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
mod lut3d;
mod sampler;
pub mod cube;

pub use color::Color;
pub use error::{ParseError, ParseResult, SampleResult, SamplerError};
pub use lut3d::{CubeLut, MAX_CUBE_SIZE, MIN_CUBE_SIZE};
pub use sampler::{sample, TrilinearSampler};
