//! Canned demonstration data: patterns, fibrils, and synthetic samples.
//!
//! Everything is built on demand by [`Catalog::predefined`]; there is no
//! global instance. Samples are synthesized by filling a background and
//! stamping patterns and streaks into it, so expected detections are known.

use crate::analyzer::Study;
use crate::fibril::FibrilSpec;
use crate::image::Sample;
use crate::search::{LinearRecognizer, PatternRecognizer, Recognizer};
use crate::template::{Cell, Pattern, WILDCARD};
use crate::util::MicroDetectResult;
use std::sync::Arc;

pub const CROSS: &str = "Cross 5x5";
pub const CORONA: &str = "Corona 9x9";
pub const SPIKED_CORONA: &str = "Spiked corona 32x32";

pub const DARK_FIBRIL: &str = "Dark fibril (len>=5)";
pub const BRIGHT_FIBRIL: &str = "Bright fibril (len>=8)";
pub const MODERATE_FIBRIL: &str = "Moderate fibril (len>=6)";

pub const SCATTERED_CROSSES: &str = "Scattered crosses";
pub const MIXED_SAMPLE: &str = "Mixed sample";
pub const SPIKED_CORONA_SAMPLE: &str = "Spiked corona";
pub const LINES_SAMPLE: &str = "Sample with lines";

/// A set of ready-made patterns, fibrils, and samples.
#[derive(Clone, Debug)]
pub struct Catalog {
    patterns: Vec<Arc<Pattern>>,
    fibrils: Vec<Arc<FibrilSpec>>,
    samples: Vec<Sample>,
}

impl Catalog {
    /// Builds the predefined catalog.
    pub fn predefined() -> MicroDetectResult<Self> {
        let cross = Pattern::new(CROSS, &cross_rows())?;
        let corona = Pattern::new(CORONA, &corona_rows())?;
        let spiked = Pattern::new(SPIKED_CORONA, &spiked_corona_rows())?;

        let fibrils = vec![
            Arc::new(FibrilSpec::new(DARK_FIBRIL, 5, 0, 4)?),
            Arc::new(FibrilSpec::new(BRIGHT_FIBRIL, 8, 11, 15)?),
            Arc::new(FibrilSpec::new(MODERATE_FIBRIL, 6, 5, 10)?),
        ];

        let samples = vec![
            scattered_crosses(&cross)?,
            mixed_sample(&corona, &cross)?,
            spiked_corona_sample(&spiked)?,
            lines_sample()?,
        ];

        Ok(Self {
            patterns: vec![Arc::new(cross), Arc::new(corona), Arc::new(spiked)],
            fibrils,
            samples,
        })
    }

    pub fn patterns(&self) -> &[Arc<Pattern>] {
        &self.patterns
    }

    pub fn fibrils(&self) -> &[Arc<FibrilSpec>] {
        &self.fibrils
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn pattern(&self, name: &str) -> Option<&Arc<Pattern>> {
        self.patterns.iter().find(|p| p.name() == name)
    }

    pub fn fibril(&self, name: &str) -> Option<&Arc<FibrilSpec>> {
        self.fibrils.iter().find(|f| f.name() == name)
    }

    pub fn sample(&self, id: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.id() == id)
    }

    /// One recognizer per pattern, then one per fibril.
    pub fn recognizers(&self) -> Vec<Arc<Recognizer>> {
        let patterns = self
            .patterns
            .iter()
            .map(|p| Recognizer::Pattern(PatternRecognizer::new(Arc::clone(p))));
        let fibrils = self
            .fibrils
            .iter()
            .map(|f| Recognizer::Linear(LinearRecognizer::new(Arc::clone(f))));
        patterns.chain(fibrils).map(Arc::new).collect()
    }

    /// A study holding every catalog sample.
    pub fn study(&self, id: impl Into<String>) -> MicroDetectResult<Study> {
        Study::with_samples(id, self.samples.iter().cloned())
    }
}

/// Writes the defined cells of `pattern` into `grid` with its top-left at `(row, col)`.
///
/// Cells falling outside the grid are skipped.
pub fn stamp(grid: &mut [Vec<i32>], pattern: &Pattern, row: usize, col: usize) {
    for pr in 0..pattern.height() {
        for pc in 0..pattern.width() {
            if let Cell::Defined(v) = pattern.cell(pr, pc) {
                if let Some(slot) = grid.get_mut(row + pr).and_then(|r| r.get_mut(col + pc)) {
                    *slot = i32::from(v);
                }
            }
        }
    }
}

fn filled(side: usize, value: i32) -> Vec<Vec<i32>> {
    vec![vec![value; side]; side]
}

fn cross_rows() -> Vec<Vec<i32>> {
    let w = WILDCARD;
    vec![
        vec![w, w, 15, w, w],
        vec![w, w, 15, w, w],
        vec![15, 15, 15, 15, 15],
        vec![w, w, 15, w, w],
        vec![w, w, 15, w, w],
    ]
}

/// Concentric rings: core F, inner E, outer C, halo B; wildcard beyond the halo.
fn corona_rows() -> Vec<Vec<i32>> {
    let size = 9;
    let center = (size as f64 - 1.0) / 2.0;
    let mut rows = filled(size, WILDCARD);
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            let dist = (c as f64 - center).hypot(r as f64 - center);
            *cell = if dist <= 1.6 {
                0xF
            } else if dist <= 2.6 {
                0xE
            } else if dist <= 3.6 {
                0xC
            } else if dist <= 4.2 {
                0xB
            } else {
                WILDCARD
            };
        }
    }
    rows
}

/// Large corona with eight spikes along the axes and diagonals.
fn spiked_corona_rows() -> Vec<Vec<i32>> {
    let size = 32;
    let center = (size as f64 - 1.0) / 2.0;
    let outer = 13.0;
    let mut rows = filled(size, WILDCARD);
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            let dist = (c as f64 - center).hypot(r as f64 - center);
            if dist <= 7.5 {
                *cell = 0xF;
            } else if dist <= 10.5 {
                *cell = 0xE;
            } else if dist <= outer {
                *cell = if dist < outer - 0.5 { 0xD } else { 0xC };
            }
        }
    }

    let d = 0.5f64.sqrt();
    let directions = [
        (1.0, 0.0),
        (-1.0, 0.0),
        (0.0, 1.0),
        (0.0, -1.0),
        (d, d),
        (d, -d),
        (-d, d),
        (-d, -d),
    ];
    let spike_len = 4.0;
    for (dx, dy) in directions {
        let mut step = -0.8f64;
        while step <= spike_len {
            let dist = outer + step;
            let r = (center + dy * dist).round();
            let c = (center + dx * dist).round();
            if (0.0..size as f64).contains(&r) && (0.0..size as f64).contains(&c) {
                let intensity = if step < 0.0 {
                    0xE
                } else if step < 1.5 {
                    0xD
                } else {
                    0xB
                };
                let cell = &mut rows[r as usize][c as usize];
                *cell = (*cell).max(intensity);
            }
            step += 0.5;
        }
    }
    rows
}

fn scattered_crosses(cross: &Pattern) -> MicroDetectResult<Sample> {
    let mut grid = filled(32, 3);
    stamp(&mut grid, cross, 4, 4);
    stamp(&mut grid, cross, 20, 6);
    stamp(&mut grid, cross, 10, 20);
    Sample::new(SCATTERED_CROSSES, &grid)
}

fn mixed_sample(corona: &Pattern, cross: &Pattern) -> MicroDetectResult<Sample> {
    let mut grid = filled(32, 1);
    texture(&mut grid, 9, 2);
    stamp(&mut grid, corona, 5, 8);
    stamp(&mut grid, corona, 16, 18);
    stamp(&mut grid, cross, 22, 4);
    stamp(&mut grid, cross, 8, 22);
    Sample::new(MIXED_SAMPLE, &grid)
}

fn spiked_corona_sample(spiked: &Pattern) -> MicroDetectResult<Sample> {
    let mut grid = filled(48, 2);
    texture(&mut grid, 7, 1);
    stamp(&mut grid, spiked, 8, 8);
    Sample::new(SPIKED_CORONA_SAMPLE, &grid)
}

fn lines_sample() -> MicroDetectResult<Sample> {
    let side = 32;
    let mut grid = filled(side, 2);
    // bright horizontal streak, 20 px
    grid[8][5..25].fill(14);
    // dark vertical streak, 18 px
    for row in grid.iter_mut().take(28).skip(10) {
        row[15] = 1;
    }
    // moderate diagonal streak, clipped at the bottom edge
    for i in 0..15 {
        if 18 + i < side && 5 + i < side {
            grid[18 + i][5 + i] = 7;
        }
    }
    // short bright decoy below every minimum length
    grid[4][28..31].fill(13);
    Sample::new(LINES_SAMPLE, &grid)
}

/// Raises every cell on anti-diagonals `(row + col) % period == 0` by `boost`.
fn texture(grid: &mut [Vec<i32>], period: usize, boost: i32) {
    for (r, row) in grid.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if (r + c) % period == 0 {
                *cell = (*cell + boost).min(15);
            }
        }
    }
}
