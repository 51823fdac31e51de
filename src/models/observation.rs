use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// A snapshot of fuel observations keyed by airport identifier.
///
/// Ordered so that iteration (and therefore extremal tie-breaking) is
/// reproducible for a given set of identifiers.
pub type FuelSnapshot = BTreeMap<String, FuelObservation>;

/// One airport's most recent fuel price sample.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FuelObservation {
    #[serde(default)]
    #[validate(length(min = 3, max = 4))]
    pub identifier: String,

    #[serde(rename = "price100LL", alias = "price100ll", default)]
    pub price_100ll: Option<f64>,

    #[serde(default)]
    pub price_jet_a: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl FuelObservation {
    pub fn new(identifier: impl Into<String>, price_100ll: Option<f64>) -> Self {
        Self {
            identifier: identifier.into(),
            price_100ll,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Coordinates, only when both halves are present.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Whether this observation carries a 100LL sample at all.
    ///
    /// Zero and NaN are treated as missing data rather than a real price.
    pub fn has_price(&self) -> bool {
        matches!(self.price_100ll, Some(p) if p != 0.0 && !p.is_nan())
    }

    /// The 100LL price when it can feed a median (strictly positive).
    pub fn sample_price(&self) -> Option<f64> {
        self.price_100ll.filter(|p| *p > 0.0)
    }
}
