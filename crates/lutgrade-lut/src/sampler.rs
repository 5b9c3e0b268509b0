//! Trilinear interpolation.
//!
//! The input color is mapped through the table's domain, scaled to grid
//! units and split into a base cell index and a fractional weight per
//! axis. The eight corners of that cell are blended with the weights
//! `(1-d, d)` on each axis.
//!
//! Inputs are never clamped. The base index is clamped to
//! `[0, size - 2]` so the eight corners always lie inside the grid; the
//! weight is not, so values beyond the domain extrapolate linearly from
//! the edge cell.

use crate::{Color, CubeLut, SampleResult};
use tracing::trace;

/// Samples `lut` at `input`.
///
/// Validates the table first; fails with
/// [`SamplerError::InvalidLut`](crate::SamplerError::InvalidLut) if it is
/// inconsistent. Use [`TrilinearSampler`] to validate once and sample many
/// times.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::{sample, Color, CubeLut};
///
/// let lut = CubeLut::identity(2).unwrap();
/// let out = sample(&lut, Color::new(0.25, 0.5, 0.75)).unwrap();
/// assert!((out.b - 0.75).abs() < 1e-6);
/// ```
pub fn sample(lut: &CubeLut, input: Color) -> SampleResult<Color> {
    Ok(TrilinearSampler::new(lut)?.sample(input))
}

/// A validated view of a [`CubeLut`] with the per-axis scale factors
/// precomputed.
///
/// `Copy` and `Sync`: hand one to every worker thread.
#[derive(Debug, Clone, Copy)]
pub struct TrilinearSampler<'a> {
    lut: &'a CubeLut,
    max_base: f32,
    offset: [f32; 3],
    scale: [f32; 3],
}

impl<'a> TrilinearSampler<'a> {
    /// Validates `lut` and prepares a sampler for it.
    pub fn new(lut: &'a CubeLut) -> SampleResult<Self> {
        lut.validate()?;
        trace!(size = lut.size(), "TrilinearSampler::new");
        Ok(Self::for_lut(lut))
    }

    /// Prepares a sampler without re-running validation. `CubeLut`
    /// constructors already guarantee the invariants.
    pub(crate) fn for_lut(lut: &'a CubeLut) -> Self {
        let n = (lut.size() - 1) as f32;
        let min = lut.domain_min();
        let max = lut.domain_max();
        Self {
            lut,
            max_base: (lut.size() - 2) as f32,
            offset: min,
            scale: [
                n / (max[0] - min[0]),
                n / (max[1] - min[1]),
                n / (max[2] - min[2]),
            ],
        }
    }

    /// The table being sampled.
    #[inline]
    pub fn lut(&self) -> &'a CubeLut {
        self.lut
    }

    /// Interpolates the table at `input`.
    #[inline]
    pub fn sample(&self, input: Color) -> Color {
        let (x0, dx) = self.axis(input.r, 0);
        let (y0, dy) = self.axis(input.g, 1);
        let (z0, dz) = self.axis(input.b, 2);

        let wx = [1.0 - dx, dx];
        let wy = [1.0 - dy, dy];
        let wz = [1.0 - dz, dz];

        let mut out = Color::BLACK;
        for (k, &fz) in wz.iter().enumerate() {
            for (j, &fy) in wy.iter().enumerate() {
                let fyz = fy * fz;
                let c0 = self.lut.get(x0, y0 + j, z0 + k);
                let c1 = self.lut.get(x0 + 1, y0 + j, z0 + k);
                out = out + c0 * (wx[0] * fyz) + c1 * (wx[1] * fyz);
            }
        }
        out
    }

    /// Grid-space base index and fractional weight for one channel.
    #[inline]
    fn axis(&self, v: f32, ch: usize) -> (usize, f32) {
        let t = (v - self.offset[ch]) * self.scale[ch];
        // NaN survives clamp and casts to 0; the weight stays NaN.
        let base = t.floor().clamp(0.0, self.max_base);
        (base as usize, t - base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_color(a: Color, b: Color, eps: f32) {
        assert_abs_diff_eq!(a.r, b.r, epsilon = eps);
        assert_abs_diff_eq!(a.g, b.g, epsilon = eps);
        assert_abs_diff_eq!(a.b, b.b, epsilon = eps);
    }

    /// A table whose sample at (x, y, z) is a distinct value per corner,
    /// so mixing up any two corners changes the result.
    fn ramp(size: usize) -> CubeLut {
        let mut samples = Vec::new();
        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    let v = (x + 3 * y + 9 * z) as f32;
                    samples.push(Color::new(v, v * 0.5, -v));
                }
            }
        }
        CubeLut::new(size, samples).unwrap()
    }

    #[test]
    fn identity_midpoint() {
        let lut = CubeLut::identity(2).unwrap();
        let out = sample(&lut, Color::new(0.5, 0.5, 0.5)).unwrap();
        assert_color(out, Color::new(0.5, 0.5, 0.5), 1e-6);
    }

    #[test]
    fn all_eight_corners_used() {
        // The weighted sum is linear in (x, y, z): at (0.5, 0.5, 0.5) on a
        // size-2 cube it is the average of all eight corners.
        let lut = ramp(2);
        let out = lut.sample(Color::new(0.5, 0.5, 0.5));
        let avg = (0.0 + 1.0 + 3.0 + 4.0 + 9.0 + 10.0 + 12.0 + 13.0) / 8.0;
        assert_color(out, Color::new(avg, avg * 0.5, -avg), 1e-5);

        // Pure x offset near the far y/z edge: only x1 corners differ.
        let out = lut.sample(Color::new(0.25, 1.0, 1.0));
        assert_abs_diff_eq!(out.r, 12.25, epsilon = 1e-5);
    }

    #[test]
    fn upper_boundary_stays_in_grid() {
        let lut = ramp(2);
        let out = lut.sample(Color::new(1.0, 1.0, 1.0));
        assert_color(out, lut.get(1, 1, 1), 1e-6);
    }

    #[test]
    fn out_of_range_extrapolates() {
        let lut = CubeLut::identity(5).unwrap();
        let out = lut.sample(Color::new(1.5, -0.25, 0.5));
        assert_color(out, Color::new(1.5, -0.25, 0.5), 1e-5);
    }

    #[test]
    fn nan_input_does_not_panic() {
        let lut = CubeLut::identity(3).unwrap();
        let out = lut.sample(Color::new(f32::NAN, 0.5, 0.5));
        assert!(out.r.is_nan());
    }

    #[test]
    fn domain_is_respected() {
        let lut = CubeLut::identity(3)
            .unwrap()
            .with_domain([0.0; 3], [2.0; 3])
            .unwrap();
        // Input 1.0 is the middle of a [0, 2] domain.
        let out = lut.sample(Color::new(1.0, 2.0, 0.0));
        assert_color(out, Color::new(0.5, 1.0, 0.0), 1e-6);
    }

    #[test]
    fn sampler_is_reusable() {
        let lut = ramp(4);
        let s = TrilinearSampler::new(&lut).unwrap();
        assert!(std::ptr::eq(s.lut(), &lut));
        for i in 0..4 {
            let t = i as f32 / 3.0;
            assert_color(s.sample(Color::new(t, 0.0, 0.0)), lut.get(i, 0, 0), 1e-4);
        }
    }
}
