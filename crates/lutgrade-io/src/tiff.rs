//! TIFF format support.
//!
//! Reads 8/16-bit gray, RGB and RGBA strips plus 32-bit float RGB/RGBA.
//! The native sample type is kept, so a float TIFF stays float through
//! the filter. Writes with LZW compression at the buffer's bit depth.

use crate::{expand_gray, IoError, IoResult};
use lutgrade_core::{PixelBuffer, PixelData};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a TIFF file from the given path.
///
/// # Example
///
/// ```rust,ignore
/// use lutgrade_io::tiff;
///
/// let image = tiff::read("input.tiff")?;
/// println!("{}x{} {}", image.width(), image.height(), image.bit_depth());
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    use tiff::decoder::{Decoder, DecodingResult};
    use tiff::ColorType;

    let file = File::open(path.as_ref())?;
    let mut decoder = Decoder::new(BufReader::new(file)).map_err(decode_err)?;

    let (width, height) = decoder.dimensions().map_err(decode_err)?;
    let color_type = decoder.colortype().map_err(decode_err)?;
    let result = decoder.read_image().map_err(decode_err)?;

    let (channels, data) = match (color_type, result) {
        (ColorType::RGB(8), DecodingResult::U8(buf)) => (3, PixelData::U8(buf)),
        (ColorType::RGBA(8), DecodingResult::U8(buf)) => (4, PixelData::U8(buf)),
        (ColorType::Gray(8), DecodingResult::U8(buf)) => (3, PixelData::U8(expand_gray(&buf, false))),
        (ColorType::RGB(16), DecodingResult::U16(buf)) => (3, PixelData::U16(buf)),
        (ColorType::RGBA(16), DecodingResult::U16(buf)) => (4, PixelData::U16(buf)),
        (ColorType::Gray(16), DecodingResult::U16(buf)) => (3, PixelData::U16(expand_gray(&buf, false))),
        (ColorType::RGB(32), DecodingResult::F32(buf)) => (3, PixelData::F32(buf)),
        (ColorType::RGBA(32), DecodingResult::F32(buf)) => (4, PixelData::F32(buf)),
        (ct, _) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "unsupported TIFF color type: {:?}",
                ct
            )));
        }
    };

    Ok(PixelBuffer::new(width, height, channels, data)?)
}

/// Writes an image to a TIFF file with LZW compression.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    use tiff::encoder::{colortype, Compression, TiffEncoder};

    let file = File::create(path.as_ref())?;
    let mut encoder = TiffEncoder::new(file)
        .map_err(encode_err)?
        .with_compression(Compression::Lzw);
    let (width, height) = (image.width(), image.height());

    macro_rules! lzw {
        ($ct:ty, $data:expr) => {
            encoder
                .write_image::<$ct>(width, height, $data)
                .map_err(encode_err)?
        };
    }

    match (image.data(), image.channels()) {
        (PixelData::U8(v), 3) => lzw!(colortype::RGB8, v),
        (PixelData::U8(v), 4) => lzw!(colortype::RGBA8, v),
        (PixelData::U16(v), 3) => lzw!(colortype::RGB16, v),
        (PixelData::U16(v), 4) => lzw!(colortype::RGBA16, v),
        (PixelData::F32(v), 3) => lzw!(colortype::RGB32Float, v),
        (PixelData::F32(v), 4) => lzw!(colortype::RGBA32Float, v),
        (_, n) => {
            return Err(IoError::EncodeError(format!("unsupported channel count: {}", n)));
        }
    }

    Ok(())
}

fn decode_err(e: tiff::TiffError) -> IoError {
    IoError::DecodeError(e.to_string())
}

fn encode_err(e: tiff::TiffError) -> IoError {
    IoError::EncodeError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutgrade_core::BitDepth;

    fn roundtrip(image: &PixelBuffer, name: &str) -> PixelBuffer {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        write(&path, image).expect("Failed to write TIFF");
        read(&path).expect("Failed to read TIFF")
    }

    #[test]
    fn roundtrip_rgb8() {
        let data: Vec<u8> = (0..16 * 4 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let image = PixelBuffer::from_u8(16, 4, 3, data).unwrap();
        assert_eq!(roundtrip(&image, "rgb8.tif"), image);
    }

    #[test]
    fn roundtrip_rgba16() {
        let data: Vec<u16> = (0..4 * 4 * 4).map(|i| (i * 4099) as u16).collect();
        let image = PixelBuffer::from_u16(4, 4, 4, data).unwrap();
        let loaded = roundtrip(&image, "rgba16.tiff");
        assert_eq!(loaded.bit_depth(), BitDepth::U16);
        assert_eq!(loaded, image);
    }

    #[test]
    fn float_keeps_out_of_range_values() {
        let image = PixelBuffer::from_f32(2, 1, 3, vec![-0.5, 0.25, 1.0, 2.5, 0.0, 0.75]).unwrap();
        let loaded = roundtrip(&image, "float.tif");
        assert_eq!(loaded.bit_depth(), BitDepth::F32);
        assert_eq!(loaded, image);
    }

    #[test]
    fn gray_is_expanded() {
        use tiff::encoder::{colortype, TiffEncoder};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.tif");
        let file = File::create(&path).unwrap();
        TiffEncoder::new(file)
            .unwrap()
            .write_image::<colortype::Gray8>(2, 1, &[10, 200])
            .unwrap();

        let loaded = read(&path).unwrap();
        assert_eq!(loaded.channels(), 3);
        assert_eq!(loaded.to_u8(), vec![10, 10, 10, 200, 200, 200]);
    }
}
