use crate::models::FuelObservation;
use crate::utils::identifiers::infer_jurisdiction;
use std::collections::BTreeMap;
use tracing::trace;

/// An observation paired with the identifier it was keyed under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub identifier: &'a str,
    pub observation: &'a FuelObservation,
}

impl<'a> Candidate<'a> {
    pub fn new(identifier: &'a str, observation: &'a FuelObservation) -> Self {
        Self {
            identifier,
            observation,
        }
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        self.observation.position()
    }
}

/// Priced observations grouped by inferred jurisdiction code.
pub type Buckets<'a> = BTreeMap<&'static str, Vec<Candidate<'a>>>;

/// Groups a snapshot by jurisdiction, keeping only priced observations
/// whose identifier resolves.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObservationBucketer;

impl ObservationBucketer {
    pub fn new() -> Self {
        Self
    }

    /// Bucket observations in iteration order.
    ///
    /// Within a bucket, candidates keep the order they were yielded in, which
    /// decides extremal tie-breaks downstream.
    pub fn bucket<'a, I>(&self, observations: I) -> Buckets<'a>
    where
        I: IntoIterator<Item = (&'a String, &'a FuelObservation)>,
    {
        let mut buckets: Buckets<'a> = BTreeMap::new();

        for (identifier, observation) in observations {
            if !observation.has_price() {
                continue;
            }

            let Some(code) = infer_jurisdiction(identifier) else {
                trace!(identifier = %identifier, "no jurisdiction for identifier, dropping");
                continue;
            };

            buckets
                .entry(code)
                .or_default()
                .push(Candidate::new(identifier.as_str(), observation));
        }

        buckets
    }
}
