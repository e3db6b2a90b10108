//! Boolean detection masks.

/// Boolean grid with the same shape as the sample it was produced from.
///
/// `true` marks a pixel implicated by at least one detection. Masks are
/// allocated fresh per `detect` call and are read-only outside this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectionMask {
    data: Vec<bool>,
    width: usize,
    height: usize,
}

impl DetectionMask {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![false; width * height],
            width,
            height,
        }
    }

    /// Returns the mask width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the mask height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the flag at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Returns true when `(row, col)` is in bounds and marked.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    /// Returns the row-major flag buffer.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Number of marked pixels.
    pub fn count_positive(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    #[inline]
    pub(crate) fn mark(&mut self, row: usize, col: usize) {
        if row < self.height && col < self.width {
            self.data[row * self.width + col] = true;
        }
    }
}
