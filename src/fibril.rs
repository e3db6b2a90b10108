//! Linear structure descriptors.

use crate::image::is_intensity;
use crate::util::{MicroDetectError, MicroDetectResult};
use std::fmt;

/// Minimum run length accepted for a fibril.
pub const MIN_FIBRIL_LENGTH: usize = 2;

/// A named streak descriptor: minimum run length and inclusive intensity band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FibrilSpec {
    name: String,
    min_length: usize,
    color_min: u8,
    color_max: u8,
}

impl FibrilSpec {
    /// Validates and builds a fibril descriptor.
    ///
    /// Checks run in order: name, length, lower bound, upper bound, bound ordering.
    /// A name made only of whitespace counts as empty.
    pub fn new(
        name: impl Into<String>,
        min_length: usize,
        color_min: i32,
        color_max: i32,
    ) -> MicroDetectResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MicroDetectError::InvalidIdentifier { what: "fibril" });
        }
        if min_length < MIN_FIBRIL_LENGTH {
            return Err(MicroDetectError::InvalidFibrilSpec {
                reason: "min_length must be at least 2",
            });
        }
        if !is_intensity(color_min) {
            return Err(MicroDetectError::InvalidFibrilSpec {
                reason: "color_min must be within [0, 15]",
            });
        }
        if !is_intensity(color_max) {
            return Err(MicroDetectError::InvalidFibrilSpec {
                reason: "color_max must be within [0, 15]",
            });
        }
        if color_min > color_max {
            return Err(MicroDetectError::InvalidFibrilSpec {
                reason: "color_min must not exceed color_max",
            });
        }
        Ok(Self {
            name,
            min_length,
            color_min: color_min as u8,
            color_max: color_max as u8,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn color_min(&self) -> u8 {
        self.color_min
    }

    pub fn color_max(&self) -> u8 {
        self.color_max
    }

    /// Returns true when `value` lies in `[color_min, color_max]`.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        (self.color_min..=self.color_max).contains(&value)
    }
}

impl fmt::Display for FibrilSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fibril[{}, len>={}, color={}-{}]",
            self.name, self.min_length, self.color_min, self.color_max
        )
    }
}
