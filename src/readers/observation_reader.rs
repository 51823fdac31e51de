use crate::error::{ProcessingError, Result};
use crate::models::{FuelObservation, FuelSnapshot};
use crate::utils::coordinates::parse_coordinate;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};
use validator::Validate;

/// Supported snapshot file layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Csv,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("csv") => Ok(SnapshotFormat::Csv),
            _ => Err(ProcessingError::InvalidFormat(format!(
                "Cannot infer snapshot format from '{}' (expected .json or .csv)",
                path.display()
            ))),
        }
    }
}

/// One CSV row: identifier,price_100ll,price_jet_a,latitude,longitude[,last_updated,source]
#[derive(Debug, Deserialize)]
struct CsvRow {
    identifier: String,
    #[serde(default)]
    price_100ll: Option<f64>,
    #[serde(default)]
    price_jet_a: Option<f64>,
    #[serde(default)]
    latitude: Option<String>,
    #[serde(default)]
    longitude: Option<String>,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    source: Option<String>,
}

/// Loads fuel observation snapshots from JSON or CSV.
///
/// Identifiers are upper-cased, and a later entry for the same identifier
/// replaces the earlier one.
pub struct ObservationReader {
    validate: bool,
}

impl ObservationReader {
    pub fn new() -> Self {
        Self { validate: true }
    }

    pub fn with_validation(validate: bool) -> Self {
        Self { validate }
    }

    /// Read a snapshot file, choosing the parser from its extension
    pub fn read_snapshot(&self, path: &Path) -> Result<FuelSnapshot> {
        let format = SnapshotFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        self.parse(&content, format)
    }

    /// Same as [`read_snapshot`](Self::read_snapshot) without blocking the runtime on file I/O
    pub async fn read_snapshot_async(&self, path: &Path) -> Result<FuelSnapshot> {
        let format = SnapshotFormat::from_path(path)?;
        let content = tokio::fs::read_to_string(path).await?;
        self.parse(&content, format)
    }

    pub fn parse(&self, content: &str, format: SnapshotFormat) -> Result<FuelSnapshot> {
        match format {
            SnapshotFormat::Json => self.parse_json(content),
            SnapshotFormat::Csv => self.parse_csv(content),
        }
    }

    /// Parse a JSON object keyed by airport identifier
    pub fn parse_json(&self, content: &str) -> Result<FuelSnapshot> {
        let raw: BTreeMap<String, FuelObservation> = serde_json::from_str(content)?;
        let mut snapshot = FuelSnapshot::new();

        for (identifier, mut observation) in raw {
            observation.identifier = identifier;
            self.accept(&mut snapshot, observation);
        }

        debug!(observations = snapshot.len(), "parsed JSON snapshot");
        Ok(snapshot)
    }

    /// Parse a CSV file with a header row
    pub fn parse_csv(&self, content: &str) -> Result<FuelSnapshot> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());
        let mut snapshot = FuelSnapshot::new();

        for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
            let observation = match row {
                Ok(row) => Self::row_to_observation(row),
                Err(e) => Err(e.into()),
            };
            match observation {
                Ok(observation) => self.accept(&mut snapshot, observation),
                Err(e) => warn!(row = index + 1, error = %e, "skipping CSV row"),
            }
        }

        debug!(observations = snapshot.len(), "parsed CSV snapshot");
        Ok(snapshot)
    }

    fn row_to_observation(row: CsvRow) -> Result<FuelObservation> {
        let coordinate = |value: Option<String>| -> Result<Option<f64>> {
            match value {
                Some(v) if !v.trim().is_empty() => parse_coordinate(&v).map(Some),
                _ => Ok(None),
            }
        };

        Ok(FuelObservation {
            identifier: row.identifier,
            price_100ll: row.price_100ll,
            price_jet_a: row.price_jet_a,
            latitude: coordinate(row.latitude)?,
            longitude: coordinate(row.longitude)?,
            last_updated: row.last_updated,
            source: row.source.filter(|s| !s.is_empty()),
        })
    }

    fn accept(&self, snapshot: &mut FuelSnapshot, mut observation: FuelObservation) {
        observation.identifier = observation.identifier.trim().to_ascii_uppercase();

        if self.validate {
            if let Err(e) = observation.validate() {
                warn!(identifier = %observation.identifier, error = %e, "skipping invalid observation");
                return;
            }
        }

        snapshot.insert(observation.identifier.clone(), observation);
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SnapshotFormat::from_path(Path::new("prices.JSON")).unwrap(),
            SnapshotFormat::Json
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("data/prices.csv")).unwrap(),
            SnapshotFormat::Csv
        );
        assert!(SnapshotFormat::from_path(Path::new("prices.parquet")).is_err());
        assert!(SnapshotFormat::from_path(Path::new("prices")).is_err());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "kjfk": {"price100LL": 7.10, "priceJetA": 6.50, "latitude": 40.64, "longitude": -73.78},
            "KDEN": {"price100LL": null, "priceJetA": null, "latitude": null, "longitude": null}
        }"#;

        let snapshot = ObservationReader::new().parse_json(json).unwrap();

        assert_eq!(snapshot.len(), 2);
        let jfk = &snapshot["KJFK"];
        assert_eq!(jfk.identifier, "KJFK");
        assert_eq!(jfk.price_100ll, Some(7.10));
        assert_eq!(jfk.price_jet_a, Some(6.50));
        assert_eq!(snapshot["KDEN"].price_100ll, None);
    }

    #[test]
    fn test_parse_json_skips_invalid_coordinates() {
        let json = r#"{
            "KJFK": {"price100LL": 7.10, "latitude": 140.64, "longitude": -73.78},
            "KLGA": {"price100LL": 7.30, "latitude": 40.78, "longitude": -73.87}
        }"#;

        let snapshot = ObservationReader::new().parse_json(json).unwrap();
        assert_eq!(snapshot.keys().collect::<Vec<_>>(), vec!["KLGA"]);

        let unchecked = ObservationReader::with_validation(false).parse_json(json).unwrap();
        assert_eq!(unchecked.len(), 2);
    }

    #[test]
    fn test_parse_csv() {
        let csv = "\
identifier,price_100ll,price_jet_a,latitude,longitude,last_updated,source
KJFK,7.10,6.50,40.6398,-73.7789,2024-05-01T12:00:00Z,airnav
KDEN,,5.90,39:51:42,104-40-23W,,
kapa,6.25,,,,,
";
        let snapshot = ObservationReader::new().parse_csv(csv).unwrap();

        assert_eq!(snapshot.len(), 3);

        let jfk = &snapshot["KJFK"];
        assert_eq!(jfk.source.as_deref(), Some("airnav"));
        assert!(jfk.last_updated.is_some());

        let den = &snapshot["KDEN"];
        assert_eq!(den.price_100ll, None);
        let (lat, lon) = den.position().unwrap();
        assert!((lat - 39.861667).abs() < 1e-5);
        assert!((lon - -104.673056).abs() < 1e-5);

        let apa = &snapshot["KAPA"];
        assert_eq!(apa.price_100ll, Some(6.25));
        assert_eq!(apa.position(), None);
    }

    #[test]
    fn test_parse_csv_later_rows_supersede() {
        let csv = "\
identifier,price_100ll,price_jet_a,latitude,longitude
KJFK,7.10,,40.64,-73.78
KJFK,7.45,,40.64,-73.78
";
        let snapshot = ObservationReader::new().parse_csv(csv).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot["KJFK"].price_100ll, Some(7.45));
    }

    #[test]
    fn test_parse_csv_skips_unparseable_price() {
        let csv = "\
identifier,price_100ll,price_jet_a,latitude,longitude
KJFK,n/a,,40.64,-73.78
KLGA,7.30,,40.78,-73.87
";
        let snapshot = ObservationReader::new().parse_csv(csv).unwrap();

        assert_eq!(snapshot.keys().collect::<Vec<_>>(), vec!["KLGA"]);
        assert_eq!(snapshot["KLGA"].price_100ll, Some(7.30));
    }

    #[test]
    fn test_parse_csv_skips_bad_coordinates() {
        let csv = "\
identifier,price_100ll,price_jet_a,latitude,longitude
KJFK,7.10,,north,-73.78
KLGA,7.30,,40.78,-73.87
";
        let snapshot = ObservationReader::new().parse_csv(csv).unwrap();
        assert_eq!(snapshot.keys().collect::<Vec<_>>(), vec!["KLGA"]);
    }

    #[test]
    fn test_read_snapshot_file() -> Result<()> {
        let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        writeln!(temp_file, "identifier,price_100ll,price_jet_a,latitude,longitude")?;
        writeln!(temp_file, "KDEN,6.20,,39.86,-104.67")?;

        let snapshot = ObservationReader::new().read_snapshot(temp_file.path())?;
        assert_eq!(snapshot["KDEN"].price_100ll, Some(6.20));

        Ok(())
    }

    #[test]
    fn test_unknown_extension_is_rejected() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let result = ObservationReader::new().read_snapshot(temp_file.path());
        assert!(matches!(result, Err(ProcessingError::InvalidFormat(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_read_snapshot_async() -> Result<()> {
        let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile()?;
        write!(temp_file, r#"{{"PHNL": {{"price100LL": 8.05, "latitude": 21.32, "longitude": -157.92}}}}"#)?;

        let snapshot = ObservationReader::new()
            .read_snapshot_async(temp_file.path())
            .await?;
        assert_eq!(snapshot["PHNL"].price_100ll, Some(8.05));

        Ok(())
    }
}
