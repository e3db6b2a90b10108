//! Validated grayscale samples.
//!
//! A [`Sample`] owns a contiguous row-major buffer of 4-bit intensities
//! (`0..=15`) stored as `u8`. Grids never change after construction; every
//! constructor either returns a fully validated sample or an error naming the
//! first check that failed.

use crate::util::hex::{nibble_char, parse_rows};
use crate::util::{MicroDetectError, MicroDetectResult};
use std::fmt;

#[cfg(feature = "image-io")]
pub mod io;

/// Darkest admitted intensity.
pub const MIN_INTENSITY: u8 = 0;
/// Brightest admitted intensity.
pub const MAX_INTENSITY: u8 = 15;

/// Returns true when `value` is a valid 4-bit intensity.
#[inline]
pub fn is_intensity(value: i32) -> bool {
    (i32::from(MIN_INTENSITY)..=i32::from(MAX_INTENSITY)).contains(&value)
}

pub(crate) fn check_identifier(id: &str, what: &'static str) -> MicroDetectResult<()> {
    if id.is_empty() {
        return Err(MicroDetectError::InvalidIdentifier { what });
    }
    Ok(())
}

/// Checks shape and cell values of a row-based grid and returns `(width, height)`.
///
/// Order: non-empty, rectangular, then every value accepted by `accept`.
/// Rectangularity is checked for all rows before any value is inspected.
pub(crate) fn check_grid<R, F>(rows: &[R], accept: F) -> MicroDetectResult<(usize, usize)>
where
    R: AsRef<[i32]>,
    F: Fn(i32) -> bool,
{
    let height = rows.len();
    let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
    if height == 0 || width == 0 {
        return Err(MicroDetectError::InvalidDimensions { width, height });
    }

    for (row, values) in rows.iter().enumerate() {
        let got = values.as_ref().len();
        if got != width {
            return Err(MicroDetectError::NonRectangular {
                row,
                expected: width,
                got,
            });
        }
    }

    for (row, values) in rows.iter().enumerate() {
        for (col, &value) in values.as_ref().iter().enumerate() {
            if !accept(value) {
                return Err(MicroDetectError::OutOfRangePixel { row, col, value });
            }
        }
    }

    Ok((width, height))
}

/// An identified rectangular grid of intensities in `[0, 15]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    id: String,
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Sample {
    /// Builds a sample from rows of integer intensities.
    ///
    /// ```
    /// use microdetect::Sample;
    ///
    /// let sample = Sample::new("Ejemplo 3x3", &[[0, 1, 2], [2, 3, 4], [4, 5, 6]]).unwrap();
    /// assert_eq!(sample.pixel(2, 1).unwrap(), 5);
    /// ```
    pub fn new<R: AsRef<[i32]>>(id: impl Into<String>, rows: &[R]) -> MicroDetectResult<Self> {
        let id = id.into();
        check_identifier(&id, "sample")?;
        let (width, height) = check_grid(rows, is_intensity)?;

        // Values are already range-checked, so the narrowing is lossless.
        let data = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().map(|&v| v as u8))
            .collect();
        Ok(Self {
            id,
            data,
            width,
            height,
        })
    }

    /// Builds a sample from a contiguous row-major buffer.
    pub fn from_raw(
        id: impl Into<String>,
        data: Vec<u8>,
        width: usize,
        height: usize,
    ) -> MicroDetectResult<Self> {
        let id = id.into();
        check_identifier(&id, "sample")?;
        if width == 0 || height == 0 {
            return Err(MicroDetectError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(MicroDetectError::InvalidDimensions { width, height })?;
        if data.len() != needed {
            return Err(MicroDetectError::InvalidDimensions { width, height });
        }
        if let Some(idx) = data.iter().position(|&v| v > MAX_INTENSITY) {
            return Err(MicroDetectError::OutOfRangePixel {
                row: idx / width,
                col: idx % width,
                value: i32::from(data[idx]),
            });
        }
        Ok(Self {
            id,
            data,
            width,
            height,
        })
    }

    /// Parses the debug textual form: one hex nibble per pixel, one string per row.
    pub fn from_hex_rows<S: AsRef<str>>(
        id: impl Into<String>,
        rows: &[S],
    ) -> MicroDetectResult<Self> {
        let id = id.into();
        check_identifier(&id, "sample")?;
        let rows = parse_rows(rows, false)?;
        Self::new(id, &rows)
    }

    /// Returns the sample identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the grid width (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at `(row, col)` or an error outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> MicroDetectResult<u8> {
        self.get(row, col).ok_or(MicroDetectError::IndexOutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        })
    }

    /// Returns the pixel at `(row, col)` if it is within bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Returns row `row` as a slice of length `width`.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    /// Returns the row-major pixel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<{}>", self.id)?;
        for row in self.data.chunks(self.width) {
            let line: String = row.iter().map(|&v| nibble_char(v)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{check_grid, is_intensity, Sample};
    use crate::util::MicroDetectError;

    #[test]
    fn check_grid_reports_rectangularity_before_range() {
        let rows = vec![vec![99, 0], vec![0]];
        let err = check_grid(&rows, is_intensity).unwrap_err();
        assert_eq!(
            err,
            MicroDetectError::NonRectangular {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn from_raw_rejects_size_mismatch_and_range() {
        let err = Sample::from_raw("s", vec![0; 5], 2, 2).unwrap_err();
        assert_eq!(
            err,
            MicroDetectError::InvalidDimensions {
                width: 2,
                height: 2
            }
        );

        let err = Sample::from_raw("s", vec![0, 1, 2, 16], 2, 2).unwrap_err();
        assert_eq!(
            err,
            MicroDetectError::OutOfRangePixel {
                row: 1,
                col: 1,
                value: 16
            }
        );
    }

    #[test]
    fn display_renders_hex_rows() {
        let sample = Sample::new("hex", &[[0, 10], [15, 3]]).unwrap();
        assert_eq!(sample.to_string(), "<hex>\n0A\nF3\n");
    }
}
