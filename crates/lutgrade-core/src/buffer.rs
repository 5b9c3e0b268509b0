//! Interleaved RGB / RGBA pixel buffers.
//!
//! A [`PixelBuffer`] is the contract between image codecs and the LUT
//! filter: row-major, interleaved samples with 3 (RGB) or 4 (RGBA)
//! channels. Alpha, when present, is the fourth channel.

use crate::{BitDepth, CoreError, CoreResult};

/// Raw sample storage.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    /// 8-bit unsigned samples.
    U8(Vec<u8>),
    /// 16-bit unsigned samples.
    U16(Vec<u16>),
    /// 32-bit float samples.
    F32(Vec<f32>),
}

impl PixelData {
    /// Bit depth of the stored samples.
    #[inline]
    pub fn bit_depth(&self) -> BitDepth {
        match self {
            Self::U8(_) => BitDepth::U8,
            Self::U16(_) => BitDepth::U16,
            Self::F32(_) => BitDepth::F32,
        }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::F32(v) => v.len(),
        }
    }

    /// True if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An image in memory: dimensions plus interleaved samples.
///
/// Invariants, checked by [`PixelBuffer::new`]:
/// - `width > 0` and `height > 0`
/// - `channels` is 3 or 4
/// - `data.len() == width * height * channels`
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u32,
    data: PixelData,
}

impl PixelBuffer {
    /// Creates a buffer, validating dimensions and sample count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutgrade_core::{PixelBuffer, PixelData};
    ///
    /// let buf = PixelBuffer::new(1, 1, 4, PixelData::U16(vec![0, 0, 0, 65535])).unwrap();
    /// assert_eq!(buf.channels(), 4);
    /// ```
    pub fn new(width: u32, height: u32, channels: u32, data: PixelData) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions(format!(
                "{}x{} has no pixels",
                width, height
            )));
        }
        if channels != 3 && channels != 4 {
            return Err(CoreError::UnsupportedChannels(channels));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(channels as usize))
            .ok_or_else(|| {
                CoreError::InvalidDimensions(format!("{}x{}x{} overflows", width, height, channels))
            })?;

        if data.len() != expected {
            return Err(CoreError::DataLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Creates an 8-bit buffer.
    pub fn from_u8(width: u32, height: u32, channels: u32, data: Vec<u8>) -> CoreResult<Self> {
        Self::new(width, height, channels, PixelData::U8(data))
    }

    /// Creates a 16-bit buffer.
    pub fn from_u16(width: u32, height: u32, channels: u32, data: Vec<u16>) -> CoreResult<Self> {
        Self::new(width, height, channels, PixelData::U16(data))
    }

    /// Creates a float buffer.
    pub fn from_f32(width: u32, height: u32, channels: u32, data: Vec<f32>) -> CoreResult<Self> {
        Self::new(width, height, channels, PixelData::F32(data))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel (3 or 4).
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// True for RGBA buffers.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Sample bit depth.
    #[inline]
    pub fn bit_depth(&self) -> BitDepth {
        self.data.bit_depth()
    }

    /// Borrowed sample storage.
    #[inline]
    pub fn data(&self) -> &PixelData {
        &self.data
    }

    /// Mutable sample storage. Callers must keep the sample count and
    /// variant unchanged.
    #[inline]
    pub fn data_mut(&mut self) -> &mut PixelData {
        &mut self.data
    }

    /// Consumes the buffer and returns the sample storage.
    pub fn into_data(self) -> PixelData {
        self.data
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total number of samples (pixels * channels).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.pixel_count() * self.channels as usize
    }

    /// Samples per row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// All samples normalized to [0, 1] by the bit depth's maximum.
    /// Float samples are returned unchanged.
    pub fn to_f32(&self) -> Vec<f32> {
        match &self.data {
            PixelData::U8(v) => v.iter().map(|&s| s as f32 / 255.0).collect(),
            PixelData::U16(v) => v.iter().map(|&s| s as f32 / 65535.0).collect(),
            PixelData::F32(v) => v.clone(),
        }
    }

    /// All samples as 16-bit integers, clamping float data into [0, 1].
    pub fn to_u16(&self) -> Vec<u16> {
        match &self.data {
            PixelData::U8(v) => v.iter().map(|&s| u16::from(s) * 257).collect(),
            PixelData::U16(v) => v.clone(),
            PixelData::F32(v) => v
                .iter()
                .map(|&s| (s.clamp(0.0, 1.0) * 65535.0).round() as u16)
                .collect(),
        }
    }

    /// All samples as 8-bit integers, clamping float data into [0, 1].
    pub fn to_u8(&self) -> Vec<u8> {
        match &self.data {
            PixelData::U8(v) => v.clone(),
            PixelData::U16(v) => v.iter().map(|&s| (s >> 8) as u8).collect(),
            PixelData::F32(v) => v
                .iter()
                .map(|&s| (s.clamp(0.0, 1.0) * 255.0).round() as u8)
                .collect(),
        }
    }
}
