//! Study-level aggregation of detector results.
//!
//! The analyzer keeps an ordered registry of shared recognizers. Registration
//! de-duplicates by identity (`Arc::ptr_eq`) rather than by configuration: two
//! separately built recognizers for identical patterns are both kept, both run,
//! and both add into the same element total.

mod report;
mod study;

pub use report::Report;
pub use study::Study;

use crate::image::Sample;
use crate::search::{Detector, Recognizer};
use crate::trace::{trace_event, trace_span};
use crate::util::MicroDetectResult;
use std::sync::Arc;

/// Analyzer configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyzerConfig {
    /// Run samples in parallel per recognizer; requires the `rayon` feature and
    /// is ignored otherwise.
    pub parallel: bool,
}

/// Runs every registered recognizer over every sample and sums positives.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticAnalyzer {
    recognizers: Vec<Arc<Recognizer>>,
    cfg: AnalyzerConfig,
}

impl DiagnosticAnalyzer {
    /// Creates an analyzer with no recognizers and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: AnalyzerConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.cfg
    }

    /// Registers `recognizer`; returns false if this exact instance is already registered.
    pub fn add_recognizer(&mut self, recognizer: Arc<Recognizer>) -> bool {
        if self
            .recognizers
            .iter()
            .any(|r| Arc::ptr_eq(r, &recognizer))
        {
            return false;
        }
        self.recognizers.push(recognizer);
        true
    }

    /// Registered recognizers in registration order.
    pub fn recognizers(&self) -> &[Arc<Recognizer>] {
        &self.recognizers
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// Analyzes every sample of `study` in order.
    pub fn analyze(&self, study: &Study) -> MicroDetectResult<Report> {
        let _span =
            trace_span!(info, "analyze", study = study.id(), samples = study.len()).entered();
        self.analyze_samples(study.samples())
    }

    /// Analyzes a slice of samples.
    ///
    /// Every registered element appears in the report, even with no samples.
    /// The first detection error aborts the analysis and is returned unchanged.
    pub fn analyze_samples(&self, samples: &[Sample]) -> MicroDetectResult<Report> {
        let mut report = Report::default();
        for recognizer in &self.recognizers {
            let name = recognizer.element_name();
            report.register(name);
            let count = self.count_positives(recognizer, samples)?;
            trace_event!(info, "element_total", element = name, count = count);
            report.add(name, count);
        }
        Ok(report)
    }

    fn count_positives(
        &self,
        recognizer: &Recognizer,
        samples: &[Sample],
    ) -> MicroDetectResult<usize> {
        #[cfg(feature = "rayon")]
        {
            if self.cfg.parallel {
                use rayon::prelude::*;
                return samples
                    .par_iter()
                    .map(|sample| recognizer.detect(sample).map(|m| m.count_positive()))
                    .try_reduce(|| 0, |a, b| Ok(a + b));
            }
        }

        samples
            .iter()
            .try_fold(0usize, |acc, sample| -> MicroDetectResult<usize> {
                Ok(acc + recognizer.detect(sample)?.count_positive())
            })
    }
}
