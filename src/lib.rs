//! MicroDetect finds synthetic microscopic structures in 4-bit grayscale grids.
//!
//! Two detectors are provided: wildcard template matching for fixed shapes
//! ([`PatternRecognizer`]) and run-length scanning for linear streaks
//! ([`LinearRecognizer`]). A [`DiagnosticAnalyzer`] runs a set of them over a
//! [`Study`] and tallies positive pixels per element name. Parallel analysis is
//! available via the `rayon` feature and image loading via `image-io`.

pub mod analyzer;
pub mod catalog;
pub mod fibril;
pub mod image;
pub mod lowlevel;
pub mod mask;
pub mod search;
pub mod template;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use analyzer::{AnalyzerConfig, DiagnosticAnalyzer, Report, Study};
pub use catalog::Catalog;
pub use fibril::FibrilSpec;
pub use crate::image::Sample;
pub use mask::DetectionMask;
pub use search::{Detector, LinearRecognizer, PatternRecognizer, Recognizer};
pub use template::{Cell, Pattern, WILDCARD};
pub use util::{MicroDetectError, MicroDetectResult};
