//! Adobe/Resolve `.cube` 3D LUT format.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Data rows follow the size directive with red varying fastest. They are
//! stored in the order read; nothing is re-sorted.
//!
//! # Example
//!
//! ```rust,ignore
//! use lutgrade_lut::cube;
//!
//! let lut = cube::read("grade.cube")?;
//! cube::write("copy.cube", &lut)?;
//! ```

use crate::lut3d::{check_domain, MAX_CUBE_SIZE, MIN_CUBE_SIZE};
use crate::{Color, CubeLut, ParseError, ParseResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Reads a 3D LUT from a `.cube` file.
pub fn read<P: AsRef<Path>>(path: P) -> ParseResult<CubeLut> {
    let path = path.as_ref();
    trace!(path = %path.display(), "cube::read");
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

/// Parses a 3D LUT from an in-memory string.
pub fn parse_str(text: &str) -> ParseResult<CubeLut> {
    parse(Cursor::new(text))
}

/// Parses a 3D LUT from a reader.
///
/// Recognized directives: `LUT_3D_SIZE` (last occurrence wins), `TITLE`,
/// `DOMAIN_MIN`, `DOMAIN_MAX`. Blank lines and `#` comments are skipped,
/// as is any other line starting with a keyword. Everything else must be
/// a row of exactly three finite numbers and must come after
/// `LUT_3D_SIZE`.
pub fn parse<R: BufRead>(reader: R) -> ParseResult<CubeLut> {
    let mut size: Option<usize> = None;
    let mut title: Option<String> = None;
    let mut domain_min = [0.0_f32; 3];
    let mut domain_max = [1.0_f32; 3];
    let mut samples: Vec<Color> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(keyword) = trimmed.split_whitespace().next() else {
            continue;
        };

        if keyword == "TITLE" {
            title = Some(parse_title(trimmed));
            continue;
        }

        let content = strip_comment(trimmed);

        if is_keyword(keyword) {
            match keyword {
                "LUT_3D_SIZE" => {
                    let n = parse_size(content, line_no)?;
                    if let Some(prev) = size {
                        warn!(line = line_no, prev, new = n, "LUT_3D_SIZE redefined");
                    }
                    samples.reserve((n * n * n).saturating_sub(samples.len()));
                    size = Some(n);
                }
                "LUT_1D_SIZE" => {
                    return Err(ParseError::Unsupported(
                        "1D LUT (LUT_1D_SIZE); only 3D tables are supported".into(),
                    ));
                }
                "DOMAIN_MIN" => domain_min = parse_triplet(rest(content), line_no, content)?,
                "DOMAIN_MAX" => domain_max = parse_triplet(rest(content), line_no, content)?,
                other => debug!(line = line_no, directive = other, "skipping directive"),
            }
            continue;
        }

        if size.is_none() {
            return Err(ParseError::MissingSize);
        }
        let rgb = parse_triplet(content, line_no, content)?;
        samples.push(Color::from(rgb));
    }

    let size = size.ok_or(ParseError::MissingSize)?;
    let expected = size * size * size;
    if samples.len() != expected {
        return Err(ParseError::SampleCountMismatch {
            expected,
            found: samples.len(),
        });
    }
    check_domain(domain_min, domain_max).map_err(ParseError::InvalidDomain)?;

    debug!(size, title = title.as_deref().unwrap_or(""), "parsed cube LUT");
    Ok(CubeLut::from_parts(size, samples, title, domain_min, domain_max))
}

/// Writes a 3D LUT to a `.cube` file.
///
/// # Example
///
/// ```rust,ignore
/// let lut = CubeLut::identity(33)?;
/// cube::write("identity.cube", &lut)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, lut: &CubeLut) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, lut)?;
    writer.flush()
}

/// Writes a 3D LUT in `.cube` syntax to any writer.
///
/// `DOMAIN_*` lines are emitted only for a non-default domain. Samples
/// are written in stored order with six decimals.
pub fn write_to<W: Write>(mut writer: W, lut: &CubeLut) -> io::Result<()> {
    writeln!(writer, "# Generated by lutgrade")?;
    if let Some(title) = lut.title() {
        writeln!(writer, "TITLE \"{}\"", title)?;
    }
    writeln!(writer, "LUT_3D_SIZE {}", lut.size())?;

    if !lut.has_default_domain() {
        let min = lut.domain_min();
        let max = lut.domain_max();
        writeln!(writer, "DOMAIN_MIN {} {} {}", min[0], min[1], min[2])?;
        writeln!(writer, "DOMAIN_MAX {} {} {}", max[0], max[1], max[2])?;
    }
    writeln!(writer)?;

    for c in lut.samples() {
        writeln!(writer, "{:.6} {:.6} {:.6}", c.r, c.g, c.b)?;
    }
    Ok(())
}

// Helper functions

/// A keyword starts with a letter or underscore and is not itself a
/// number (`nan` and `inf` parse as floats).
fn is_keyword(token: &str) -> bool {
    let starts_alpha = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_alpha && token.parse::<f32>().is_err()
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}

/// Everything after the first token.
fn rest(line: &str) -> &str {
    line.split_once(char::is_whitespace)
        .map(|(_, tail)| tail)
        .unwrap_or("")
}

fn parse_title(line: &str) -> String {
    rest(line).trim().trim_matches('"').to_string()
}

fn parse_size(line: &str, line_no: usize) -> ParseResult<usize> {
    let value = rest(line).split_whitespace().next().unwrap_or("");
    let invalid = || ParseError::InvalidSize {
        line: line_no,
        value: value.to_string(),
    };
    let n: usize = value.parse().map_err(|_| invalid())?;
    if !(MIN_CUBE_SIZE..=MAX_CUBE_SIZE).contains(&n) {
        return Err(invalid());
    }
    Ok(n)
}

fn parse_triplet(fields: &str, line_no: usize, content: &str) -> ParseResult<[f32; 3]> {
    let malformed = || ParseError::MalformedRow {
        line: line_no,
        content: content.to_string(),
    };

    let mut out = [0.0_f32; 3];
    let mut parts = fields.split_whitespace();
    for slot in out.iter_mut() {
        let v: f32 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(malformed)?;
        if !v.is_finite() {
            return Err(malformed());
        }
        *slot = v;
    }
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok(out)
}
