//! Pattern templates with wildcard cells.
//!
//! A [`Pattern`] is a rectangular grid where each cell either pins an exact
//! intensity or is a wildcard that matches anything. Lookups outside the
//! declared extent also yield [`Cell::Wildcard`], so a template behaves as if
//! it were surrounded by an unbounded wildcard margin.

use crate::image::{check_grid, check_identifier, is_intensity};
use crate::util::hex::{nibble_char, parse_rows, wildcard_char};
use crate::util::MicroDetectResult;
use std::fmt;

mod plan;

pub use plan::PatternPlan;

/// Integer sentinel for a wildcard cell in the row-based API.
pub const WILDCARD: i32 = -1;

/// A single template cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// The sample pixel must equal this intensity.
    Defined(u8),
    /// Any sample intensity matches.
    Wildcard,
}

impl Cell {
    fn from_value(value: i32) -> Self {
        if value == WILDCARD {
            Cell::Wildcard
        } else {
            Cell::Defined(value as u8)
        }
    }

    /// Returns the intensity, or [`WILDCARD`] for wildcard cells.
    pub fn value_or_wildcard(self) -> i32 {
        match self {
            Cell::Defined(v) => i32::from(v),
            Cell::Wildcard => WILDCARD,
        }
    }

    /// Returns true for wildcard cells.
    pub fn is_wildcard(self) -> bool {
        matches!(self, Cell::Wildcard)
    }
}

/// A named template of intensities and wildcards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Pattern {
    /// Builds a pattern from integer rows where [`WILDCARD`] marks unconstrained cells.
    pub fn new<R: AsRef<[i32]>>(name: impl Into<String>, rows: &[R]) -> MicroDetectResult<Self> {
        let name = name.into();
        check_identifier(&name, "pattern")?;
        let (width, height) = check_grid(rows, |v| v == WILDCARD || is_intensity(v))?;
        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().map(|&v| Cell::from_value(v)))
            .collect();
        Ok(Self {
            name,
            cells,
            width,
            height,
        })
    }

    /// Parses hex rows, with `*` standing for a wildcard cell.
    pub fn from_hex_rows<S: AsRef<str>>(
        name: impl Into<String>,
        rows: &[S],
    ) -> MicroDetectResult<Self> {
        let name = name.into();
        check_identifier(&name, "pattern")?;
        let rows = parse_rows(rows, true)?;
        Self::new(name, &rows)
    }

    /// Returns the pattern name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the template width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the template height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(row, col)`; anything outside the template is a wildcard.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.height || col >= self.width {
            return Cell::Wildcard;
        }
        self.cells[row * self.width + col]
    }

    /// Returns the intensity at `(row, col)` or [`WILDCARD`].
    pub fn pixel(&self, row: usize, col: usize) -> i32 {
        self.cell(row, col).value_or_wildcard()
    }

    /// Returns true when `(row, col)` is unconstrained, including outside the template.
    pub fn is_wildcard(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_wildcard()
    }

    /// Number of non-wildcard cells.
    pub fn defined_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_wildcard()).count()
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "!{}!", self.name)?;
        for row in self.cells.chunks(self.width) {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Defined(v) => nibble_char(*v),
                    Cell::Wildcard => wildcard_char(),
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
