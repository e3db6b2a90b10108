//! Detection algorithms.
//!
//! `pattern` holds wildcard template matching and `linear` holds run-length
//! scanning. [`Recognizer`] is the closed set of detectors the analyzer runs.

pub(crate) mod linear;
pub(crate) mod pattern;

pub use linear::{LinearRecognizer, ScanDirection};
pub use pattern::PatternRecognizer;

use crate::fibril::FibrilSpec;
use crate::image::Sample;
use crate::mask::DetectionMask;
use crate::template::Pattern;
use crate::util::MicroDetectResult;

/// A detector bound to one named element.
pub trait Detector {
    /// Name of the pattern or fibril being detected; reports are keyed by it.
    fn element_name(&self) -> &str;

    /// Produces a fresh mask with the sample's shape.
    fn detect(&self, sample: &Sample) -> MicroDetectResult<DetectionMask>;
}

impl Detector for PatternRecognizer {
    fn element_name(&self) -> &str {
        PatternRecognizer::element_name(self)
    }

    fn detect(&self, sample: &Sample) -> MicroDetectResult<DetectionMask> {
        PatternRecognizer::detect(self, sample)
    }
}

impl Detector for LinearRecognizer {
    fn element_name(&self) -> &str {
        LinearRecognizer::element_name(self)
    }

    fn detect(&self, sample: &Sample) -> MicroDetectResult<DetectionMask> {
        LinearRecognizer::detect(self, sample)
    }
}

/// Either kind of recognizer.
#[derive(Clone, Debug)]
pub enum Recognizer {
    Pattern(PatternRecognizer),
    Linear(LinearRecognizer),
}

impl Recognizer {
    /// Wraps a template recognizer for `pattern`.
    pub fn pattern(pattern: Pattern) -> Self {
        Recognizer::Pattern(PatternRecognizer::new(pattern))
    }

    /// Wraps a run-length recognizer for `spec`.
    pub fn linear(spec: FibrilSpec) -> Self {
        Recognizer::Linear(LinearRecognizer::new(spec))
    }
}

impl Detector for Recognizer {
    fn element_name(&self) -> &str {
        match self {
            Recognizer::Pattern(r) => r.element_name(),
            Recognizer::Linear(r) => r.element_name(),
        }
    }

    fn detect(&self, sample: &Sample) -> MicroDetectResult<DetectionMask> {
        match self {
            Recognizer::Pattern(r) => r.detect(sample),
            Recognizer::Linear(r) => r.detect(sample),
        }
    }
}

impl From<PatternRecognizer> for Recognizer {
    fn from(value: PatternRecognizer) -> Self {
        Recognizer::Pattern(value)
    }
}

impl From<LinearRecognizer> for Recognizer {
    fn from(value: LinearRecognizer) -> Self {
        Recognizer::Linear(value)
    }
}
