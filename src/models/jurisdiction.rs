use serde::Serialize;

/// Approximate rectangular extent of a US state or DC.
///
/// Deliberately coarse: neighbouring rectangles may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionBounds {
    pub code: &'static str,
    pub name: &'static str,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl JurisdictionBounds {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Self {
        Self {
            code,
            name,
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Midpoint of the bounding rectangle as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let co = JurisdictionBounds::new("CO", "Colorado", 37.0, 41.0, -109.1, -102.0);
        let (lat, lon) = co.center();
        assert!((lat - 39.0).abs() < 1e-9);
        assert!((lon - -105.55).abs() < 1e-9);
    }
}
