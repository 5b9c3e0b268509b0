//! Channel bit depths.
//!
//! # Usage
//!
//! ```rust
//! use lutgrade_core::BitDepth;
//!
//! assert_eq!(BitDepth::U8.max_value(), 255.0);
//! assert!(BitDepth::F32.is_float());
//! ```

use std::fmt;

/// Storage precision of one channel sample.
///
/// Integer depths are normalized to [0, 1] by dividing by
/// [`max_value`](BitDepth::max_value). Float samples are already
/// normalized and may legitimately lie outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 8-bit unsigned integer [0, 255].
    #[default]
    U8,
    /// 16-bit unsigned integer [0, 65535].
    U16,
    /// 32-bit single-precision float.
    F32,
}

impl BitDepth {
    /// Number of bits per channel.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::F32 => 32,
        }
    }

    /// Whether this is a floating-point depth.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32)
    }

    /// Normalization divisor: 255 for `U8`, 65535 for `U16`, 1 for `F32`.
    #[inline]
    pub fn max_value(&self) -> f32 {
        match self {
            Self::U8 => 255.0,
            Self::U16 => 65535.0,
            Self::F32 => 1.0,
        }
    }

    /// Bytes per channel sample.
    #[inline]
    pub const fn bytes_per_channel(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::F32 => 4,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8 => write!(f, "8-bit"),
            Self::U16 => write!(f, "16-bit"),
            Self::F32 => write!(f, "32-bit float"),
        }
    }
}
