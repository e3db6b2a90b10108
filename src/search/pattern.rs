//! Sliding-window template matching with wildcard cells.

use crate::image::Sample;
use crate::mask::DetectionMask;
use crate::template::{Pattern, PatternPlan};
use crate::trace::{trace_event, trace_span};
use crate::util::{MicroDetectError, MicroDetectResult};
use std::sync::Arc;

/// Detector bound to one [`Pattern`].
///
/// Every anchor where the pattern fits inside the sample is tested; on a full
/// match the defined (non-wildcard) cells are OR-ed into the mask.
#[derive(Clone, Debug)]
pub struct PatternRecognizer {
    pattern: Arc<Pattern>,
    plan: PatternPlan,
}

impl PatternRecognizer {
    /// Creates a recognizer for `pattern`.
    pub fn new(pattern: impl Into<Arc<Pattern>>) -> Self {
        let pattern = pattern.into();
        let plan = PatternPlan::from_pattern(&pattern);
        Self { pattern, plan }
    }

    /// Returns the bound pattern.
    pub fn pattern(&self) -> &Arc<Pattern> {
        &self.pattern
    }

    /// Returns the pattern name.
    pub fn element_name(&self) -> &str {
        self.pattern.name()
    }

    /// Computes the detection mask for `sample`.
    pub fn detect(&self, sample: &Sample) -> MicroDetectResult<DetectionMask> {
        let tpl_width = self.plan.width();
        let tpl_height = self.plan.height();
        if tpl_height > sample.height() || tpl_width > sample.width() {
            return Err(MicroDetectError::PatternTooLarge {
                pattern_width: tpl_width,
                pattern_height: tpl_height,
                sample_width: sample.width(),
                sample_height: sample.height(),
            });
        }

        let _span = trace_span!(
            debug,
            "detect_pattern",
            pattern = self.pattern.name(),
            sample = sample.id()
        )
        .entered();

        let mut mask = DetectionMask::new(sample.width(), sample.height());
        let max_row = sample.height() - tpl_height;
        let max_col = sample.width() - tpl_width;
        let mut matches = 0usize;
        for row in 0..=max_row {
            for col in 0..=max_col {
                if self.matches_at(sample, row, col) {
                    self.mark_match(&mut mask, row, col);
                    matches += 1;
                }
            }
        }

        trace_event!(debug, "pattern_matches", matches = matches);
        Ok(mask)
    }

    /// Tests the anchor `(row, col)`; stops at the first mismatching cell.
    fn matches_at(&self, sample: &Sample, row: usize, col: usize) -> bool {
        self.plan
            .footprint()
            .iter()
            .all(|&(dr, dc, value)| sample.get(row + dr, col + dc) == Some(value))
    }

    fn mark_match(&self, mask: &mut DetectionMask, row: usize, col: usize) {
        for &(dr, dc, _) in self.plan.footprint() {
            mask.mark(row + dr, col + dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PatternRecognizer;
    use crate::template::{Pattern, WILDCARD};
    use crate::Sample;

    #[test]
    fn overlapping_matches_share_marks() {
        let sample = Sample::new("row", &[[5, 5, 5]]).unwrap();
        let pattern = Pattern::new("pair", &[[5, 5]]).unwrap();
        let mask = PatternRecognizer::new(pattern).detect(&sample).unwrap();
        assert_eq!(mask.as_slice(), &[true, true, true]);
        assert_eq!(mask.count_positive(), 3);
    }

    #[test]
    fn all_wildcard_pattern_marks_nothing() {
        let sample = Sample::new("s", &[[1, 2], [3, 4]]).unwrap();
        let pattern = Pattern::new("any", &[[WILDCARD]]).unwrap();
        let mask = PatternRecognizer::new(pattern).detect(&sample).unwrap();
        assert_eq!(mask.count_positive(), 0);
    }
}
