//! The in-memory 3D lookup table.

use crate::{Color, SampleResult, SamplerError};

/// Smallest grid size that can be interpolated.
pub const MIN_CUBE_SIZE: usize = 2;

/// Largest grid size accepted (the `.cube` format caps `LUT_3D_SIZE` at 256).
pub const MAX_CUBE_SIZE: usize = 256;

/// A 3-dimensional lookup table.
///
/// Holds `size^3` RGB samples on a regular grid. Red varies fastest, then
/// green, then blue, exactly as the samples appear in a `.cube` file.
///
/// A `CubeLut` is immutable once built: every constructor checks
/// `size >= 2` and `samples.len() == size^3`, and no method mutates the
/// grid. Share it by reference across threads.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::{Color, CubeLut};
///
/// let lut = CubeLut::identity(17).unwrap();
/// let out = lut.sample(Color::new(0.5, 0.3, 0.2));
/// assert!((out.g - 0.3).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubeLut {
    size: usize,
    samples: Vec<Color>,
    title: Option<String>,
    domain_min: [f32; 3],
    domain_max: [f32; 3],
}

impl CubeLut {
    /// Creates a table from samples in file order.
    ///
    /// Fails with [`SamplerError::InvalidLut`] if `size` is outside
    /// [`MIN_CUBE_SIZE`]..=[`MAX_CUBE_SIZE`] or the sample count is not
    /// `size^3`.
    pub fn new(size: usize, samples: Vec<Color>) -> SampleResult<Self> {
        check_shape(size, samples.len())?;
        Ok(Self::from_parts(size, samples, None, [0.0; 3], [1.0; 3]))
    }

    /// Creates the identity table: every grid point maps to its own
    /// normalized coordinate.
    pub fn identity(size: usize) -> SampleResult<Self> {
        check_size(size)?;
        let n = (size - 1) as f32;
        let mut samples = Vec::with_capacity(size * size * size);
        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    samples.push(Color::new(x as f32 / n, y as f32 / n, z as f32 / n));
                }
            }
        }
        Ok(Self::from_parts(size, samples, None, [0.0; 3], [1.0; 3]))
    }

    /// Builds a table whose shape and domain the caller has already checked.
    pub(crate) fn from_parts(
        size: usize,
        samples: Vec<Color>,
        title: Option<String>,
        domain_min: [f32; 3],
        domain_max: [f32; 3],
    ) -> Self {
        Self {
            size,
            samples,
            title,
            domain_min,
            domain_max,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the input domain. Each `min` channel must be strictly below
    /// the matching `max` channel.
    pub fn with_domain(mut self, min: [f32; 3], max: [f32; 3]) -> SampleResult<Self> {
        check_domain(min, max).map_err(SamplerError::InvalidLut)?;
        self.domain_min = min;
        self.domain_max = max;
        Ok(self)
    }

    /// Per-axis sample count N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All samples in grid order.
    #[inline]
    pub fn samples(&self) -> &[Color] {
        &self.samples
    }

    /// `TITLE` from the source file, if any.
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Input domain minimum.
    #[inline]
    pub fn domain_min(&self) -> [f32; 3] {
        self.domain_min
    }

    /// Input domain maximum.
    #[inline]
    pub fn domain_max(&self) -> [f32; 3] {
        self.domain_max
    }

    /// True unless the domain differs from [0, 1] on some channel.
    pub fn has_default_domain(&self) -> bool {
        self.domain_min == [0.0; 3] && self.domain_max == [1.0; 3]
    }

    /// Flat index of grid point `(x, y, z)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size * (y + self.size * z)
    }

    /// Sample stored at grid point `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// If any coordinate is `>= size`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Color {
        self.samples[self.index(x, y, z)]
    }

    /// Re-checks the structural invariants.
    pub fn validate(&self) -> SampleResult<()> {
        check_shape(self.size, self.samples.len())?;
        check_domain(self.domain_min, self.domain_max).map_err(SamplerError::InvalidLut)
    }

    /// Channel-wise minimum and maximum over all samples.
    pub fn output_range(&self) -> (Color, Color) {
        let first = self.samples[0];
        self.samples
            .iter()
            .fold((first, first), |(lo, hi), &c| (lo.min(c), hi.max(c)))
    }

    /// Trilinearly interpolates `input`. See [`crate::TrilinearSampler`].
    #[inline]
    pub fn sample(&self, input: Color) -> Color {
        crate::TrilinearSampler::for_lut(self).sample(input)
    }
}

fn check_size(size: usize) -> SampleResult<()> {
    if !(MIN_CUBE_SIZE..=MAX_CUBE_SIZE).contains(&size) {
        return Err(SamplerError::InvalidLut(format!(
            "size {} outside {}..={}",
            size, MIN_CUBE_SIZE, MAX_CUBE_SIZE
        )));
    }
    Ok(())
}

fn check_shape(size: usize, len: usize) -> SampleResult<()> {
    check_size(size)?;
    let expected = size * size * size;
    if len != expected {
        return Err(SamplerError::InvalidLut(format!(
            "expected {} samples for size {}, got {}",
            expected, size, len
        )));
    }
    Ok(())
}

pub(crate) fn check_domain(min: [f32; 3], max: [f32; 3]) -> Result<(), String> {
    for ch in 0..3 {
        // Written as a negation so NaN bounds are rejected too.
        if !(min[ch] < max[ch]) || !min[ch].is_finite() || !max[ch].is_finite() {
            return Err(format!(
                "channel {}: min {} is not below max {}",
                ch, min[ch], max[ch]
            ));
        }
    }
    Ok(())
}
