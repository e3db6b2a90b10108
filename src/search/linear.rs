//! Run-length scanning for linear structures.
//!
//! A run is a maximal block of consecutive in-band pixels along one scan line.
//! Runs at least `min_length` long are marked. Three families of lines are
//! scanned independently and OR-ed into one mask:
//!
//! - horizontal, one line per row, left to right;
//! - vertical, one line per column, top to bottom;
//! - diagonal `(+1, +1)`, seeded from every cell of row 0 and from column 0
//!   below the corner.
//!
//! Only the top-left to bottom-right diagonal is scanned; anti-diagonal streaks
//! are found only through their horizontal or vertical extent.

use crate::fibril::FibrilSpec;
use crate::image::Sample;
use crate::mask::DetectionMask;
use crate::trace::{trace_event, trace_span};
use crate::util::MicroDetectResult;
use std::sync::Arc;

/// Direction of a scan line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanDirection {
    Horizontal,
    Vertical,
    Diagonal,
}

impl ScanDirection {
    /// All scanned families, in evaluation order.
    pub const ALL: [ScanDirection; 3] = [
        ScanDirection::Horizontal,
        ScanDirection::Vertical,
        ScanDirection::Diagonal,
    ];

    /// Short lowercase label.
    pub fn name(self) -> &'static str {
        match self {
            ScanDirection::Horizontal => "horizontal",
            ScanDirection::Vertical => "vertical",
            ScanDirection::Diagonal => "diagonal",
        }
    }

    /// `(row, col)` step between consecutive cells.
    pub fn step(self) -> (usize, usize) {
        match self {
            ScanDirection::Horizontal => (0, 1),
            ScanDirection::Vertical => (1, 0),
            ScanDirection::Diagonal => (1, 1),
        }
    }

    /// Start cells of every line of this family on a `width` x `height` grid.
    pub fn seeds(self, width: usize, height: usize) -> Vec<(usize, usize)> {
        match self {
            ScanDirection::Horizontal => (0..height).map(|row| (row, 0)).collect(),
            ScanDirection::Vertical => (0..width).map(|col| (0, col)).collect(),
            ScanDirection::Diagonal => (0..width)
                .map(|col| (0, col))
                .chain((1..height).map(|row| (row, 0)))
                .collect(),
        }
    }
}

/// Detector bound to one [`FibrilSpec`].
#[derive(Clone, Debug)]
pub struct LinearRecognizer {
    spec: Arc<FibrilSpec>,
}

impl LinearRecognizer {
    /// Creates a recognizer for `spec`.
    pub fn new(spec: impl Into<Arc<FibrilSpec>>) -> Self {
        Self { spec: spec.into() }
    }

    /// Returns the bound fibril descriptor.
    pub fn spec(&self) -> &Arc<FibrilSpec> {
        &self.spec
    }

    /// Returns the fibril name.
    pub fn element_name(&self) -> &str {
        self.spec.name()
    }

    /// Computes the detection mask for `sample`. Never fails for a valid sample.
    pub fn detect(&self, sample: &Sample) -> MicroDetectResult<DetectionMask> {
        let _span = trace_span!(
            debug,
            "detect_linear",
            fibril = self.spec.name(),
            sample = sample.id()
        )
        .entered();

        let mut mask = DetectionMask::new(sample.width(), sample.height());
        for dir in ScanDirection::ALL {
            let runs = self.scan_family(sample, &mut mask, dir);
            trace_event!(debug, "linear_runs", direction = dir.name(), runs = runs);
        }
        Ok(mask)
    }

    /// Scans every line of one family and returns the number of marked runs.
    pub(crate) fn scan_family(
        &self,
        sample: &Sample,
        mask: &mut DetectionMask,
        dir: ScanDirection,
    ) -> usize {
        dir.seeds(sample.width(), sample.height())
            .into_iter()
            .map(|start| self.scan_line(sample, mask, start, dir))
            .sum()
    }

    fn scan_line(
        &self,
        sample: &Sample,
        mask: &mut DetectionMask,
        start: (usize, usize),
        dir: ScanDirection,
    ) -> usize {
        let (dr, dc) = dir.step();
        let (mut row, mut col) = start;
        let mut run_start = start;
        let mut run_len = 0usize;
        let mut marked = 0usize;

        while let Some(value) = sample.get(row, col) {
            if self.spec.contains(value) {
                if run_len == 0 {
                    run_start = (row, col);
                }
                run_len += 1;
            } else {
                marked += self.close_run(mask, run_start, run_len, dir);
                run_len = 0;
            }
            row += dr;
            col += dc;
        }
        marked + self.close_run(mask, run_start, run_len, dir)
    }

    fn close_run(
        &self,
        mask: &mut DetectionMask,
        (row, col): (usize, usize),
        len: usize,
        dir: ScanDirection,
    ) -> usize {
        if len < self.spec.min_length() {
            return 0;
        }
        let (dr, dc) = dir.step();
        for i in 0..len {
            mask.mark(row + i * dr, col + i * dc);
        }
        1
    }
}
