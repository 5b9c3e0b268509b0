//! Normalized RGB triple.

use std::ops::{Add, Mul};

/// An RGB color with `f32` channels.
///
/// Channels are nominally in [0, 1] but nothing here enforces that:
/// interpolation overshoot, HDR input and extrapolation all produce
/// values outside the range and are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// True if every channel is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Channel-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.r.min(other.r), self.g.min(other.g), self.b.min(other.b))
    }

    /// Channel-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.r.max(other.r), self.g.max(other.g), self.b.max(other.b))
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [f32; 3] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let c = Color::new(0.2, 0.4, 0.6) * 0.5 + Color::new(0.1, 0.1, 0.1);
        assert!((c.r - 0.2).abs() < 1e-6);
        assert!((c.g - 0.3).abs() < 1e-6);
        assert!((c.b - 0.4).abs() < 1e-6);
    }

    #[test]
    fn min_max() {
        let a = Color::new(0.0, 1.0, 0.5);
        let b = Color::new(0.5, 0.5, 0.5);
        assert_eq!(a.min(b), Color::new(0.0, 0.5, 0.5));
        assert_eq!(a.max(b), Color::new(0.5, 1.0, 0.5));
    }

    #[test]
    fn finite() {
        assert!(Color::BLACK.is_finite());
        assert!(!Color::new(f32::NAN, 0.0, 0.0).is_finite());
    }
}
