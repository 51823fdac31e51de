use crate::models::{FuelObservation, JurisdictionBounds, StateAverage};
use crate::processors::bucketing::{Candidate, ObservationBucketer};
use crate::processors::median::{median, round_to_cents};
use crate::processors::selection::{ExtremalSelector, StateSelection};
use crate::utils::us_states::JURISDICTIONS;
use std::collections::BTreeMap;
use tracing::debug;

/// A state's result together with the observations that produced it.
#[derive(Debug, Clone)]
pub struct StateBreakdown<'a> {
    pub average: StateAverage,
    pub selection: StateSelection<'a>,
}

/// Turns a snapshot of airport fuel observations into one representative
/// 100LL price per jurisdiction.
///
/// Stateless: the only data it holds is a borrowed bounds table.
#[derive(Debug, Clone, Copy)]
pub struct StateFuelAggregator<'r> {
    jurisdictions: &'r [JurisdictionBounds],
    bucketer: ObservationBucketer,
    selector: ExtremalSelector,
}

impl StateFuelAggregator<'static> {
    pub fn new() -> Self {
        Self::with_jurisdictions(&JURISDICTIONS)
    }
}

impl Default for StateFuelAggregator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> StateFuelAggregator<'r> {
    pub fn with_jurisdictions(jurisdictions: &'r [JurisdictionBounds]) -> Self {
        Self {
            jurisdictions,
            bucketer: ObservationBucketer::new(),
            selector: ExtremalSelector::new(),
        }
    }

    fn bounds(&self, code: &str) -> Option<&'r JurisdictionBounds> {
        self.jurisdictions.iter().find(|j| j.code == code)
    }

    /// Compute per-jurisdiction median prices.
    ///
    /// Jurisdictions without a usable sample are absent from the result.
    pub fn aggregate<'a, I>(&self, observations: I) -> BTreeMap<String, StateAverage>
    where
        I: IntoIterator<Item = (&'a String, &'a FuelObservation)>,
    {
        self.aggregate_detailed(observations)
            .into_iter()
            .map(|breakdown| {
                (
                    breakdown.average.jurisdiction_code.clone(),
                    breakdown.average,
                )
            })
            .collect()
    }

    /// Like [`aggregate`](Self::aggregate), keeping the selected observations.
    pub fn aggregate_detailed<'a, I>(&self, observations: I) -> Vec<StateBreakdown<'a>>
    where
        I: IntoIterator<Item = (&'a String, &'a FuelObservation)>,
    {
        let buckets = self.bucketer.bucket(observations);

        buckets
            .iter()
            .filter_map(|(code, candidates)| self.summarize(code, candidates))
            .collect()
    }

    /// Select representatives for one jurisdiction and take their median.
    pub fn summarize<'a>(
        &self,
        code: &str,
        candidates: &[Candidate<'a>],
    ) -> Option<StateBreakdown<'a>> {
        let Some(bounds) = self.bounds(code) else {
            debug!(jurisdiction = code, "no bounds for jurisdiction, skipping");
            return None;
        };

        let selection = self.selector.select(bounds, candidates)?;
        let prices = selection.sample_prices();
        let median_price = median(&prices)?;

        debug!(
            jurisdiction = code,
            candidates = candidates.len(),
            samples = prices.len(),
            median = median_price,
            "summarized jurisdiction"
        );

        Some(StateBreakdown {
            average: StateAverage::new(
                bounds.code,
                bounds.name,
                Some(round_to_cents(median_price)),
                prices.len(),
            ),
            selection,
        })
    }

    /// Quick lookup of one jurisdiction in a computed result.
    pub fn state_price<'m>(
        code: &str,
        averages: &'m BTreeMap<String, StateAverage>,
    ) -> Option<&'m StateAverage> {
        averages.get(&code.trim().to_ascii_uppercase())
    }
}
