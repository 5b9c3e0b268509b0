//! Decode, filter through an identity LUT, encode, decode again.

use lutgrade_core::{BitDepth, PixelBuffer};
use lutgrade_lut::CubeLut;
use lutgrade_ops::{apply, FilterOptions};

fn gradient_u8(width: u32, height: u32, channels: u32) -> PixelBuffer {
    let mut data = Vec::new();
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / (width - 1)) as u8);
            data.push((y * 255 / (height - 1)) as u8);
            data.push(((x + y) % 256) as u8);
            if channels == 4 {
                data.push(200);
            }
        }
    }
    PixelBuffer::from_u8(width, height, channels, data).unwrap()
}

#[test]
fn png_identity_preserves_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src.png");
    let dst = dir.path().join("dst.png");

    let original = gradient_u8(64, 32, 4);
    lutgrade_io::write(&src, &original).unwrap();

    let decoded = lutgrade_io::read(&src).unwrap();
    let lut = CubeLut::identity(33).unwrap();
    let filtered = apply(&decoded, &lut, &FilterOptions::default()).unwrap();
    lutgrade_io::write(&dst, &filtered).unwrap();

    assert_eq!(lutgrade_io::read(&dst).unwrap(), original);
}

#[test]
fn tiff_identity_preserves_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src.tif");
    let dst = dir.path().join("dst.tif");

    let original = PixelBuffer::from_u16(
        8,
        8,
        3,
        (0..8 * 8 * 3).map(|i| (i * 1361 % 65536) as u16).collect(),
    )
    .unwrap();
    lutgrade_io::write(&src, &original).unwrap();

    let decoded = lutgrade_io::read(&src).unwrap();
    assert_eq!(decoded.bit_depth(), BitDepth::U16);
    let lut = CubeLut::identity(17).unwrap();
    let filtered = apply(&decoded, &lut, &FilterOptions::default()).unwrap();
    lutgrade_io::write(&dst, &filtered).unwrap();

    assert_eq!(lutgrade_io::read(&dst).unwrap(), original);
}

#[test]
fn format_follows_content_not_extension() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("image.png");
    let misnamed = dir.path().join("image.tif");

    let original = gradient_u8(4, 4, 3);
    lutgrade_io::write(&png, &original).unwrap();
    std::fs::copy(&png, &misnamed).unwrap();

    assert_eq!(lutgrade_io::read(&misnamed).unwrap(), original);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = lutgrade_io::read(dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, lutgrade_io::IoError::Io(_)));
}
