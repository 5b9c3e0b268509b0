//! Behavioral tests for `.cube` parsing and trilinear sampling.

use approx::assert_abs_diff_eq;
use lutgrade_lut::{cube, sample, Color, CubeLut, ParseError, TrilinearSampler};

const IDENTITY_2: &str = "LUT_3D_SIZE 2\n0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";

/// A non-linear table: every grid point gets a distinct, unrelated color.
fn scrambled(size: usize) -> CubeLut {
    let mut samples = Vec::with_capacity(size * size * size);
    let mut state = 0x2545_f491_u32;
    for _ in 0..size * size * size {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % 10_000) as f32 / 10_000.0
        };
        samples.push(Color::new(next(), next(), next()));
    }
    CubeLut::new(size, samples).unwrap()
}

fn assert_color(a: Color, b: Color, eps: f32) {
    assert_abs_diff_eq!(a.r, b.r, epsilon = eps);
    assert_abs_diff_eq!(a.g, b.g, epsilon = eps);
    assert_abs_diff_eq!(a.b, b.b, epsilon = eps);
}

#[test]
fn concrete_identity_scenario() {
    let lut = cube::parse_str(IDENTITY_2).unwrap();
    let out = sample(&lut, Color::new(0.5, 0.5, 0.5)).unwrap();
    assert_color(out, Color::new(0.5, 0.5, 0.5), 1e-6);
}

#[test]
fn grid_points_are_exact() {
    for size in [2, 3, 5, 17] {
        let lut = scrambled(size);
        let n = (size - 1) as f32;
        for k in 0..size {
            for j in 0..size {
                for i in 0..size {
                    let input = Color::new(i as f32 / n, j as f32 / n, k as f32 / n);
                    let expected = lut.samples()[i + size * (j + size * k)];
                    assert_color(lut.sample(input), expected, 1e-5);
                }
            }
        }
    }
}

#[test]
fn identity_round_trip() {
    for size in [2, 3, 17, 33] {
        let lut = CubeLut::identity(size).unwrap();
        let sampler = TrilinearSampler::new(&lut).unwrap();
        for step in 0..=20 {
            let t = step as f32 / 20.0;
            let input = Color::new(t, 1.0 - t, (t * 7.0).fract());
            assert_color(sampler.sample(input), input, 1e-5);
        }
    }
}

#[test]
fn boundary_clamp_size_two() {
    let lut = scrambled(2);
    let out = sample(&lut, Color::new(1.0, 1.0, 1.0)).unwrap();
    assert_color(out, lut.get(1, 1, 1), 1e-6);

    // Far beyond the grid: still no out-of-bounds access.
    let out = sample(&lut, Color::new(10.0, 10.0, 10.0)).unwrap();
    assert!(out.is_finite());
    let out = sample(&lut, Color::new(-10.0, 0.5, 10.0)).unwrap();
    assert!(out.is_finite());
}

#[test]
fn monotonic_in_red() {
    // r strictly increases with x; g and b vary arbitrarily.
    let size = 9;
    let base = scrambled(size);
    let samples = (0..size * size * size)
        .map(|idx| {
            let x = idx % size;
            let c = base.samples()[idx];
            Color::new(x as f32 + c.r * 0.5, c.g, c.b)
        })
        .collect();
    let lut = CubeLut::new(size, samples).unwrap();

    for (g, b) in [(0.0, 0.0), (0.3, 0.8), (0.77, 0.12), (1.0, 1.0)] {
        let mut prev = f32::NEG_INFINITY;
        for step in 0..=200 {
            let r = step as f32 / 200.0;
            let out = lut.sample(Color::new(r, g, b));
            assert!(out.r >= prev, "r={r} g={g} b={b}: {} < {prev}", out.r);
            prev = out.r;
        }
    }
}

#[test]
fn parse_errors() {
    assert!(matches!(cube::parse_str(""), Err(ParseError::MissingSize)));
    assert!(matches!(
        cube::parse_str("0 0 0\n1 1 1\n"),
        Err(ParseError::MissingSize)
    ));

    let seven = "LUT_3D_SIZE 2\n0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n";
    assert!(matches!(
        cube::parse_str(seven),
        Err(ParseError::SampleCountMismatch {
            expected: 8,
            found: 7
        })
    ));
}

#[test]
fn unreadable_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = cube::read(dir.path().join("missing.cube")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scrambled.cube");

    let lut = scrambled(5).with_title("scrambled");
    cube::write(&path, &lut).unwrap();
    let loaded = cube::read(&path).unwrap();

    assert_eq!(loaded.size(), 5);
    assert_eq!(loaded.title(), Some("scrambled"));
    for (a, b) in lut.samples().iter().zip(loaded.samples()) {
        assert_color(*a, *b, 1e-6);
    }
}
