use crate::models::StateAverage;
use crate::processors::median::{median, round_to_cents};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub state_count: usize,
    pub total_samples: usize,
    pub national_median: Option<f64>,
    pub cheapest: Option<StateAverage>,
    pub most_expensive: Option<StateAverage>,
}

impl PriceSummary {
    /// Summarize a state-average map. States without a median are ignored
    /// for price statistics but still counted.
    pub fn from_averages(averages: &BTreeMap<String, StateAverage>) -> Self {
        let priced: Vec<&StateAverage> = averages
            .values()
            .filter(|a| a.median_price.is_some())
            .collect();
        let prices: Vec<f64> = priced.iter().filter_map(|a| a.median_price).collect();

        let by_price = |a: &&&StateAverage, b: &&&StateAverage| {
            a.median_price
                .unwrap_or_default()
                .total_cmp(&b.median_price.unwrap_or_default())
        };

        Self {
            state_count: averages.len(),
            total_samples: averages.values().map(|a| a.sample_count).sum(),
            national_median: median(&prices).map(round_to_cents),
            cheapest: priced.iter().min_by(by_price).map(|a| (*a).clone()),
            most_expensive: priced.iter().max_by(by_price).map(|a| (*a).clone()),
        }
    }

    pub fn detailed_summary(&self) -> String {
        let mut summary = format!(
            "State Fuel Price Summary\n========================\nStates reported: {}\nSamples used: {}\n",
            self.state_count, self.total_samples
        );

        if let Some(median) = self.national_median {
            summary.push_str(&format!("National median (100LL): ${:.2}\n", median));
        }
        if let Some(ref cheapest) = self.cheapest {
            summary.push_str(&format!("Cheapest: {}\n", cheapest.summary()));
        }
        if let Some(ref expensive) = self.most_expensive {
            summary.push_str(&format!("Most expensive: {}\n", expensive.summary()));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages() -> BTreeMap<String, StateAverage> {
        [
            StateAverage::new("CO", "Colorado", Some(5.25), 5),
            StateAverage::new("NY", "New York", Some(7.10), 5),
            StateAverage::new("TX", "Texas", Some(5.05), 4),
            StateAverage::new("WY", "Wyoming", None, 0),
        ]
        .into_iter()
        .map(|a| (a.jurisdiction_code.clone(), a))
        .collect()
    }

    #[test]
    fn test_summary_statistics() {
        let summary = PriceSummary::from_averages(&averages());

        assert_eq!(summary.state_count, 4);
        assert_eq!(summary.total_samples, 14);
        assert_eq!(summary.national_median, Some(5.25));
        assert_eq!(summary.cheapest.unwrap().jurisdiction_code, "TX");
        assert_eq!(summary.most_expensive.unwrap().jurisdiction_code, "NY");
    }

    #[test]
    fn test_empty() {
        let summary = PriceSummary::from_averages(&BTreeMap::new());

        assert_eq!(summary.national_median, None);
        assert!(summary.cheapest.is_none());
        assert!(summary.detailed_summary().contains("States reported: 0"));
    }

    #[test]
    fn test_detailed_summary() {
        let text = PriceSummary::from_averages(&averages()).detailed_summary();
        assert!(text.contains("National median (100LL): $5.25"));
        assert!(text.contains("Cheapest: Texas (TX)"));
    }
}
