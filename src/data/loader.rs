//! Readers for the sphere CSV and the single-column position files.
//!
//! Both readers write into containers sized exactly to the configured count.
//! Lines past that count are checked but not stored, and slots the input never
//! reaches keep their zero default.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use super::{PlanarPosition, SphereRecord};
use crate::config::ValidationMode;
use crate::error::{Result, SceneError};

/// Number of comma-separated fields in a sphere line: x, y, z, radius
const SPHERE_FIELDS: usize = 4;

/// Records produced by a reader together with the number of lines it saw
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecords<T> {
    pub records: Vec<T>,
    pub lines_read: usize,
}

/// Which coordinate a position file supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Parses the longest numeric prefix of `text`, or returns 0.0
///
/// Leading whitespace is skipped and anything after the number is ignored, so
/// `"1.5abc"` reads as 1.5 and `"abc"` as 0.0. `inf`, `infinity` and `nan` are
/// accepted in any case, and `0x` introduces a hexadecimal float such as
/// `0x1.8p1`.
pub fn parse_lenient_f32(text: &str) -> f32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if let Some(value) = parse_hex_prefix(&bytes[end..]) {
        return if bytes.first() == Some(&b'-') {
            -value
        } else {
            value
        };
    }

    let rest = &text[end..];
    for word in ["infinity", "inf", "nan"] {
        if rest
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
        {
            return text[..end + word.len()].parse().unwrap_or(0.0);
        }
    }

    let mantissa_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - mantissa_start;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let fraction_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digits += end - fraction_start;
    }
    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

/// Reads `0x<hex>[.<hex>][p[+-]<dec>]`; `None` unless a hex digit follows `0x`
fn parse_hex_prefix(bytes: &[u8]) -> Option<f32> {
    let digits = match bytes {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        _ => return None,
    };
    let hex = |b: u8| (b as char).to_digit(16);

    let mut pos = 0;
    let mut mantissa = 0.0f64;
    let mut seen = 0;
    while let Some(d) = digits.get(pos).copied().and_then(hex) {
        mantissa = mantissa * 16.0 + d as f64;
        pos += 1;
        seen += 1;
    }
    if digits.get(pos) == Some(&b'.') {
        pos += 1;
        let mut scale = 1.0 / 16.0;
        while let Some(d) = digits.get(pos).copied().and_then(hex) {
            mantissa += d as f64 * scale;
            scale /= 16.0;
            pos += 1;
            seen += 1;
        }
    }
    if seen == 0 {
        return None;
    }

    let mut exponent = 0i32;
    if matches!(digits.get(pos), Some(b'p' | b'P')) {
        let mut exp_pos = pos + 1;
        let negative = digits.get(exp_pos) == Some(&b'-');
        if matches!(digits.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits_start = exp_pos;
        let mut value = 0i32;
        while let Some(d) = digits.get(exp_pos).filter(|b| b.is_ascii_digit()) {
            value = value.saturating_mul(10).saturating_add((d - b'0') as i32);
            exp_pos += 1;
        }
        if exp_pos > exp_digits_start {
            exponent = if negative { -value } else { value };
        }
    }

    Some((mantissa * 2f64.powi(exponent)) as f32)
}

/// Lines of `reader` with invalid UTF-8 replaced rather than rejected
///
/// Strips the `\n` and a preceding `\r` the same way [`BufRead::lines`] does.
fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    })
}

/// Splits a CSV line into fields
///
/// A trailing comma does not open an empty final field and a blank line has no
/// fields at all.
fn split_fields(line: &str) -> Vec<&str> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    let mut fields: Vec<&str> = line.split(',').collect();
    if fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Opens `path` for line reading
///
/// In lenient mode a file that cannot be opened is reported and treated as
/// empty.
fn open_lines(path: &Path, validation: ValidationMode) -> Result<Option<BufReader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(err) if validation == ValidationMode::Lenient => {
            warn!("Could not open {}: {}; using zeros", path.display(), err);
            Ok(None)
        }
        Err(err) => Err(SceneError::io(path, err)),
    }
}

fn check_length(
    path: &Path,
    validation: ValidationMode,
    expected: usize,
    found: usize,
) -> Result<()> {
    if found >= expected {
        return Ok(());
    }
    match validation {
        ValidationMode::Strict => Err(SceneError::ShortInput {
            path: path.to_path_buf(),
            expected,
            found,
        }),
        ValidationMode::Lenient => {
            warn!(
                "{} has {} lines, {} records left at zero",
                path.display(),
                found,
                expected - found
            );
            Ok(())
        }
    }
}

/// Reads `count` sphere records from a `x,y,z,radius` CSV
///
/// Every line must have exactly four fields; the first line that does not
/// fails the whole read. Blank lines have no fields and leave their record at
/// zero.
pub fn read_sphere_records(
    path: &Path,
    count: usize,
    validation: ValidationMode,
) -> Result<LoadedRecords<SphereRecord>> {
    let mut records = vec![SphereRecord::default(); count];
    let Some(reader) = open_lines(path, validation)? else {
        return Ok(LoadedRecords {
            records,
            lines_read: 0,
        });
    };

    let mut lines_read = 0;
    for (index, line) in lossy_lines(reader).enumerate() {
        let line = line.map_err(|err| SceneError::io(path, err))?;
        lines_read += 1;

        let fields = split_fields(&line);
        if fields.is_empty() {
            debug!("{}:{} is blank", path.display(), index + 1);
            continue;
        }
        if fields.len() != SPHERE_FIELDS {
            return Err(SceneError::ColumnCount {
                path: path.to_path_buf(),
                line: index + 1,
                found: fields.len(),
            });
        }

        if let Some(record) = records.get_mut(index) {
            *record = SphereRecord::new(
                parse_lenient_f32(fields[0]),
                parse_lenient_f32(fields[1]),
                parse_lenient_f32(fields[2]),
                parse_lenient_f32(fields[3]),
            );
        }
    }

    if lines_read > count {
        warn!(
            "{} has {} lines, ignoring the last {}",
            path.display(),
            lines_read,
            lines_read - count
        );
    }
    check_length(path, validation, count, lines_read)?;

    Ok(LoadedRecords {
        records,
        lines_read,
    })
}

/// Fills one coordinate of `positions` from a one-value-per-line file
///
/// Line `i` sets `positions[i]`; returns the number of lines in the file.
pub fn fill_positions(
    positions: &mut [PlanarPosition],
    path: &Path,
    axis: Axis,
    validation: ValidationMode,
) -> Result<usize> {
    let Some(reader) = open_lines(path, validation)? else {
        return Ok(0);
    };

    let mut lines_read = 0;
    for (index, line) in lossy_lines(reader).enumerate() {
        let line = line.map_err(|err| SceneError::io(path, err))?;
        lines_read += 1;

        let Some(position) = positions.get_mut(index) else {
            continue;
        };
        let value = parse_lenient_f32(&line);
        match axis {
            Axis::X => position.x = value,
            Axis::Y => position.y = value,
        }
    }

    if lines_read > positions.len() {
        warn!(
            "{} has {} lines, ignoring the last {}",
            path.display(),
            lines_read,
            lines_read - positions.len()
        );
    }
    check_length(path, validation, positions.len(), lines_read)?;

    Ok(lines_read)
}
