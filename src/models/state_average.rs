use serde::{Deserialize, Serialize};

/// Representative 100LL price for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateAverage {
    pub jurisdiction_code: String,
    pub jurisdiction_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_price: Option<f64>,
    pub sample_count: usize,
}

impl StateAverage {
    pub fn new(
        jurisdiction_code: impl Into<String>,
        jurisdiction_name: impl Into<String>,
        median_price: Option<f64>,
        sample_count: usize,
    ) -> Self {
        Self {
            jurisdiction_code: jurisdiction_code.into(),
            jurisdiction_name: jurisdiction_name.into(),
            median_price,
            sample_count,
        }
    }

    pub fn summary(&self) -> String {
        match self.median_price {
            Some(price) => format!(
                "{} ({}): ${:.2}/gal from {} sample(s)",
                self.jurisdiction_name, self.jurisdiction_code, price, self.sample_count
            ),
            None => format!(
                "{} ({}): no data",
                self.jurisdiction_name, self.jurisdiction_code
            ),
        }
    }
}
