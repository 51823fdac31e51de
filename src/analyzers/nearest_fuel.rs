use crate::error::{ProcessingError, Result};
use crate::models::FuelObservation;
use crate::utils::constants::{DEFAULT_MAX_RESULTS, DEFAULT_RADIUS_NM, MAX_RADIUS_NM, MIN_RADIUS_NM};
use crate::utils::coordinates::{
    compass_direction, distance_nm, initial_bearing, validate_coordinates,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// A priced airport near the search center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyFuel {
    pub identifier: String,
    pub price_100ll: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_nm: f64,
    pub direction: &'static str,
}

impl NearbyFuel {
    pub fn summary(&self) -> String {
        format!(
            "{:<5} ${:.2}/gal  {:>6.1} nm {}",
            self.identifier, self.price_100ll, self.distance_nm, self.direction
        )
    }
}

/// Cheapest 100LL within a radius of an airport in the snapshot.
pub struct NearestFuelFinder {
    radius_nm: u32,
    max_results: usize,
}

impl NearestFuelFinder {
    pub fn new() -> Self {
        Self {
            radius_nm: DEFAULT_RADIUS_NM,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_radius(mut self, radius_nm: u32) -> Result<Self> {
        if !(MIN_RADIUS_NM..=MAX_RADIUS_NM).contains(&radius_nm) {
            return Err(ProcessingError::InvalidRadius(radius_nm));
        }
        self.radius_nm = radius_nm;
        Ok(self)
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Results are ordered by price, then distance. The center airport
    /// itself is included when it has a price.
    pub fn find(
        &self,
        center_identifier: &str,
        observations: &BTreeMap<String, FuelObservation>,
    ) -> Result<Vec<NearbyFuel>> {
        let center_identifier = center_identifier.trim().to_ascii_uppercase();
        let (center_lat, center_lon) = observations
            .get(&center_identifier)
            .and_then(|o| o.position())
            .ok_or_else(|| ProcessingError::AirportNotFound {
                identifier: center_identifier.clone(),
            })?;
        validate_coordinates(center_lat, center_lon)?;

        let radius = f64::from(self.radius_nm);
        let mut results: Vec<NearbyFuel> = observations
            .iter()
            .filter_map(|(identifier, observation)| {
                let price = observation.sample_price()?;
                let (lat, lon) = observation.position()?;
                let distance = distance_nm(center_lat, center_lon, lat, lon);
                (distance <= radius).then(|| NearbyFuel {
                    identifier: identifier.clone(),
                    price_100ll: price,
                    latitude: lat,
                    longitude: lon,
                    distance_nm: distance,
                    direction: compass_direction(initial_bearing(center_lat, center_lon, lat, lon)),
                })
            })
            .collect();

        results.sort_by(|a, b| {
            a.price_100ll
                .total_cmp(&b.price_100ll)
                .then(a.distance_nm.total_cmp(&b.distance_nm))
        });
        results.truncate(self.max_results);

        for result in &mut results {
            result.distance_nm = (result.distance_nm * 10.0).round() / 10.0;
        }

        debug!(
            center = %center_identifier,
            radius_nm = self.radius_nm,
            found = results.len(),
            "nearest fuel search"
        );
        Ok(results)
    }
}

impl Default for NearestFuelFinder {
    fn default() -> Self {
        Self::new()
    }
}
