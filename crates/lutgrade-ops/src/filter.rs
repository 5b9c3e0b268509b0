//! LUT filtering of pixel buffers.
//!
//! The LUT is validated once per call; after that every pixel goes through
//! the same [`TrilinearSampler`], shared by reference across worker
//! threads. Nothing is written back to the caller's buffer until the LUT
//! has been accepted.

use crate::{OpsError, OpsResult};
use lutgrade_core::{PixelBuffer, PixelData};
use lutgrade_lut::{Color, CubeLut, TrilinearSampler};
use std::time::Instant;
use tracing::{debug, trace};

/// How filtered values are converted back to integer samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantize {
    /// Round to the nearest integer.
    #[default]
    Round,
    /// Drop the fractional part.
    Truncate,
}

impl Quantize {
    /// Clamps `v` into `[0, max]` and converts to an integer-valued float.
    #[inline]
    fn apply(self, v: f32, max: f32) -> f32 {
        let v = v.clamp(0.0, max);
        match self {
            Self::Round => v.round(),
            Self::Truncate => v.trunc(),
        }
    }
}

/// Options for [`apply`] and [`apply_in_place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Integer quantization mode. Ignored for float buffers.
    pub quantize: Quantize,
    /// Process rows on the Rayon pool. No effect without the `parallel`
    /// feature.
    pub parallel: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            quantize: Quantize::Round,
            parallel: true,
        }
    }
}

impl FilterOptions {
    /// Sets the quantization mode.
    pub fn with_quantize(mut self, quantize: Quantize) -> Self {
        self.quantize = quantize;
        self
    }

    /// Enables or disables row parallelism.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Filters `buffer` through `lut` into a new buffer of the same shape and
/// bit depth.
pub fn apply(buffer: &PixelBuffer, lut: &CubeLut, options: &FilterOptions) -> OpsResult<PixelBuffer> {
    let sampler = TrilinearSampler::new(lut)?;
    let mut out = buffer.clone();
    filter_buffer(&mut out, &sampler, options);
    Ok(out)
}

/// Filters `buffer` through `lut` in place.
///
/// On error the buffer is left untouched.
pub fn apply_in_place(buffer: &mut PixelBuffer, lut: &CubeLut, options: &FilterOptions) -> OpsResult<()> {
    let sampler = TrilinearSampler::new(lut)?;
    filter_buffer(buffer, &sampler, options);
    Ok(())
}

/// Filters raw interleaved float samples in place.
///
/// `channels` must be 3 or 4 and `data` must hold whole pixels. Values
/// are treated as already normalized and are not clamped.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::CubeLut;
/// use lutgrade_ops::apply_rgb_f32;
///
/// let lut = CubeLut::identity(2).unwrap();
/// let mut px = vec![0.25, 0.5, 0.75, 1.0];
/// apply_rgb_f32(&mut px, 4, &lut).unwrap();
/// assert!((px[1] - 0.5).abs() < 1e-6);
/// ```
pub fn apply_rgb_f32(data: &mut [f32], channels: usize, lut: &CubeLut) -> OpsResult<()> {
    if channels != 3 && channels != 4 {
        return Err(OpsError::InvalidDimensions(format!(
            "expected 3 or 4 channels, got {}",
            channels
        )));
    }
    if data.len() % channels != 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "{} samples is not a whole number of {}-channel pixels",
            data.len(),
            channels
        )));
    }

    let sampler = TrilinearSampler::new(lut)?;
    // One "row" per 4096 pixels keeps parallel chunks reasonably sized.
    filter_rows(data, channels * 4096, channels, &sampler, Quantize::Round, true);
    Ok(())
}

fn filter_buffer(buffer: &mut PixelBuffer, sampler: &TrilinearSampler<'_>, options: &FilterOptions) {
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels(),
        depth = %buffer.bit_depth(),
        "filter_buffer"
    );
    let start = Instant::now();
    let row_len = buffer.row_len();
    let channels = buffer.channels() as usize;
    let pixels = buffer.pixel_count();

    match buffer.data_mut() {
        PixelData::U8(data) => filter_rows(data, row_len, channels, sampler, options.quantize, options.parallel),
        PixelData::U16(data) => filter_rows(data, row_len, channels, sampler, options.quantize, options.parallel),
        PixelData::F32(data) => filter_rows(data, row_len, channels, sampler, options.quantize, options.parallel),
    }

    debug!(pixels, elapsed_ms = start.elapsed().as_millis() as u64, "LUT applied");
}

/// Conversion between stored samples and normalized floats.
trait Channel: Copy + Send + Sync {
    fn normalize(self) -> f32;
    fn denormalize(v: f32, quantize: Quantize) -> Self;
}

impl Channel for u8 {
    #[inline]
    fn normalize(self) -> f32 {
        self as f32 / 255.0
    }

    #[inline]
    fn denormalize(v: f32, quantize: Quantize) -> Self {
        quantize.apply(v * 255.0, 255.0) as u8
    }
}

impl Channel for u16 {
    #[inline]
    fn normalize(self) -> f32 {
        self as f32 / 65535.0
    }

    #[inline]
    fn denormalize(v: f32, quantize: Quantize) -> Self {
        quantize.apply(v * 65535.0, 65535.0) as u16
    }
}

impl Channel for f32 {
    #[inline]
    fn normalize(self) -> f32 {
        self
    }

    #[inline]
    fn denormalize(v: f32, _quantize: Quantize) -> Self {
        v
    }
}

fn filter_rows<T: Channel>(
    data: &mut [T],
    row_len: usize,
    channels: usize,
    sampler: &TrilinearSampler<'_>,
    quantize: Quantize,
    parallel: bool,
) {
    let kernel = |row: &mut [T]| {
        for px in row.chunks_exact_mut(channels) {
            let input = Color::new(px[0].normalize(), px[1].normalize(), px[2].normalize());
            let out = sampler.sample(input);
            px[0] = T::denormalize(out.r, quantize);
            px[1] = T::denormalize(out.g, quantize);
            px[2] = T::denormalize(out.b, quantize);
        }
    };

    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            data.par_chunks_mut(row_len).for_each(kernel);
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    data.chunks_mut(row_len).for_each(kernel);
}
