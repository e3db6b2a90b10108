//! Error types for microdetect.

use thiserror::Error;

/// Result alias for microdetect operations.
pub type Result<T> = std::result::Result<T, MicroDetectError>;

/// Errors that can occur when building grids or running detectors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MicroDetectError {
    /// The identifier or name is empty.
    #[error("{what} identifier must not be empty")]
    InvalidIdentifier { what: &'static str },
    /// The grid has no rows, an empty first row, or a buffer size mismatch.
    #[error("invalid grid dimensions {width}x{height}: at least 1x1 is required")]
    InvalidDimensions { width: usize, height: usize },
    /// A row length differs from the first row.
    #[error("grid must be rectangular: row {row} has {got} columns, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A cell value lies outside the admitted intensity range.
    #[error("pixel value {value} at ({row}, {col}) is outside the valid range [0, 15]")]
    OutOfRangePixel { row: usize, col: usize, value: i32 },
    /// A character in a textual grid is not a hex nibble (or `*` for patterns).
    #[error("invalid character {ch:?} at ({row}, {col}) in textual grid")]
    InvalidHexDigit { row: usize, col: usize, ch: char },
    /// Fibril parameters violate their constraints.
    #[error("invalid fibril spec: {reason}")]
    InvalidFibrilSpec { reason: &'static str },
    /// The pattern does not fit inside the sample.
    #[error(
        "pattern {pattern_width}x{pattern_height} exceeds sample {sample_width}x{sample_height}"
    )]
    PatternTooLarge {
        pattern_width: usize,
        pattern_height: usize,
        sample_width: usize,
        sample_height: usize,
    },
    /// A pixel access falls outside the grid.
    #[error("pixel ({row}, {col}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    /// A study already contains a sample with this identifier.
    #[error("study already contains sample {id:?}")]
    DuplicateSample { id: String },
    /// Image decoding or file access failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
