//! Studies: ordered, identified collections of samples.

use crate::image::{check_identifier, Sample};
use crate::util::{MicroDetectError, MicroDetectResult};

/// A diagnostic study holding samples in insertion order.
///
/// Sample identifiers are unique within a study.
#[derive(Clone, Debug)]
pub struct Study {
    id: String,
    samples: Vec<Sample>,
}

impl Study {
    /// Creates an empty study.
    pub fn new(id: impl Into<String>) -> MicroDetectResult<Self> {
        let id = id.into();
        check_identifier(&id, "study")?;
        Ok(Self {
            id,
            samples: Vec::new(),
        })
    }

    /// Creates a study from `samples`, rejecting duplicate identifiers.
    pub fn with_samples(
        id: impl Into<String>,
        samples: impl IntoIterator<Item = Sample>,
    ) -> MicroDetectResult<Self> {
        let mut study = Self::new(id)?;
        for sample in samples {
            study.add_sample(sample)?;
        }
        Ok(study)
    }

    /// Appends a sample.
    pub fn add_sample(&mut self, sample: Sample) -> MicroDetectResult<()> {
        if self.sample(sample.id()).is_some() {
            return Err(MicroDetectError::DuplicateSample {
                id: sample.id().to_owned(),
            });
        }
        self.samples.push(sample);
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Looks up a sample by identifier.
    pub fn sample(&self, id: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
