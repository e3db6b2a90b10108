//! Precomputed footprint for wildcard template matching.

use crate::template::{Cell, Pattern};

/// Non-wildcard offsets of a pattern in row-major order.
///
/// Matching and marking only ever visit these offsets, so wildcard cells cost
/// nothing per anchor and can never be marked.
#[derive(Clone, Debug)]
pub struct PatternPlan {
    width: usize,
    height: usize,
    footprint: Vec<(usize, usize, u8)>,
}

impl PatternPlan {
    /// Builds a plan from a pattern.
    pub fn from_pattern(pattern: &Pattern) -> Self {
        let width = pattern.width();
        let footprint = pattern
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| match *cell {
                Cell::Defined(v) => Some((idx / width, idx % width, v)),
                Cell::Wildcard => None,
            })
            .collect();
        Self {
            width,
            height: pattern.height(),
            footprint,
        }
    }

    /// Returns the template width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the template height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(row, col, value)` for every defined cell.
    pub fn footprint(&self) -> &[(usize, usize, u8)] {
        &self.footprint
    }
}

#[cfg(test)]
mod tests {
    use super::PatternPlan;
    use crate::template::{Pattern, WILDCARD};

    #[test]
    fn footprint_skips_wildcards() {
        let pattern = Pattern::new("p", &[[WILDCARD, 7], [3, WILDCARD]]).unwrap();
        let plan = PatternPlan::from_pattern(&pattern);
        assert_eq!(plan.footprint(), &[(0, 1, 7), (1, 0, 3)]);
        assert_eq!((plan.width(), plan.height()), (2, 2));
    }
}
