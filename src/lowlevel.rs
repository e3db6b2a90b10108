//! Low-level building blocks for custom detection pipelines.
//!
//! These expose the precomputed template footprint, the scan-line families
//! used by linear detection, and the grid stamping helper used to synthesize
//! test samples. Most users only need the top-level recognizers.

pub use crate::catalog::stamp;
pub use crate::image::{is_intensity, MAX_INTENSITY, MIN_INTENSITY};
pub use crate::search::ScanDirection;
pub use crate::template::PatternPlan;
