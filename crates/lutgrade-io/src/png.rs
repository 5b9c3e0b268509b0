//! PNG format support.
//!
//! Reads 8- and 16-bit gray, gray+alpha, RGB and RGBA images (palette and
//! low bit depth images are expanded to 8-bit by the decoder). Writes RGB
//! or RGBA at 8 bits for 8-bit buffers and 16 bits otherwise.
//!
//! # Example
//!
//! ```rust,ignore
//! use lutgrade_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{expand_gray, IoError, IoResult};
use lutgrade_core::{PixelBuffer, PixelData};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let file = File::open(path.as_ref())?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];

    let (channels, data) = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => (3, PixelData::U8(bytes.to_vec())),
        (png::ColorType::Rgba, png::BitDepth::Eight) => (4, PixelData::U8(bytes.to_vec())),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            (3, PixelData::U8(expand_gray(bytes, false)))
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            (4, PixelData::U8(expand_gray(bytes, true)))
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => (3, PixelData::U16(bytes_to_u16(bytes))),
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => (4, PixelData::U16(bytes_to_u16(bytes))),
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            (3, PixelData::U16(expand_gray(&bytes_to_u16(bytes), false)))
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => {
            (4, PixelData::U16(expand_gray(&bytes_to_u16(bytes), true)))
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Ok(PixelBuffer::new(info.width, info.height, channels, data)?)
}

/// Writes an image to a PNG file.
///
/// 8-bit buffers are written at 8 bits; 16-bit and float buffers at 16
/// bits (float samples clamped to [0, 1]).
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let color_type = match image.channels() {
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => return Err(IoError::EncodeError(format!("unsupported channel count: {}", n))),
    };

    let (depth, bytes) = match image.data() {
        PixelData::U8(v) => (png::BitDepth::Eight, v.clone()),
        _ => (png::BitDepth::Sixteen, u16_to_bytes(&image.to_u16())),
    };

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(depth);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

/// Converts u16 samples to big-endian bytes.
fn u16_to_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|v| v.to_be_bytes()).collect()
}
