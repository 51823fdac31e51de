use crate::error::{ProcessingError, Result};
use crate::utils::constants::{EARTH_RADIUS_KM, KM_PER_NM};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Convert a DMS coordinate to decimal degrees.
///
/// Accepts `DD:MM:SS` or `DD-MM-SS.ss` with an optional leading minus sign
/// or trailing hemisphere letter (`N`, `S`, `E`, `W`).
///
/// # Examples
/// ```
/// use fuel_price_processor::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal("39-51-42.00N").unwrap();
/// assert!((decimal - 39.861667).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(dms: &str) -> Result<f64> {
    let trimmed = dms.trim();

    let (body, hemisphere_negative) = match trimmed.chars().last() {
        Some('N' | 'n' | 'E' | 'e') => (&trimmed[..trimmed.len() - 1], false),
        Some('S' | 's' | 'W' | 'w') => (&trimmed[..trimmed.len() - 1], true),
        _ => (trimmed, false),
    };
    let is_negative = hemisphere_negative || body.starts_with('-');
    let body = body.trim_start_matches('-');

    let parts: Vec<&str> = body.split([':', '-']).collect();
    if parts.len() != 3 {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Invalid DMS format: '{}'. Expected 'DD:MM:SS' or 'DD-MM-SS'",
            dms
        )));
    }

    let parse = |label: &str, value: &str| {
        value.parse::<f64>().map_err(|_| {
            ProcessingError::InvalidCoordinate(format!("Invalid {} value: '{}'", label, value))
        })
    };
    let degrees = parse("degrees", parts[0])?;
    let minutes = parse("minutes", parts[1])?;
    let seconds = parse("seconds", parts[2])?;

    if !(0.0..60.0).contains(&minutes) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Minutes must be between 0 and 60, got: {}",
            minutes
        )));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Seconds must be between 0 and 60, got: {}",
            seconds
        )));
    }

    let decimal_value = degrees + minutes / 60.0 + seconds / 3600.0;
    Ok(if is_negative {
        -decimal_value
    } else {
        decimal_value
    })
}

/// Parse coordinate that might be in DMS or decimal format
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();

    match trimmed.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) if trimmed.contains([':', '-']) => dms_to_decimal(trimmed),
        Err(_) => Err(ProcessingError::InvalidCoordinate(format!(
            "Invalid coordinate value: '{}'",
            coord_str
        ))),
    }
}

/// Validate that a position lies on the globe
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Latitude {} is outside [-90, 90]",
            latitude
        )));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "Longitude {} is outside [-180, 180]",
            longitude
        )));
    }

    Ok(())
}

/// Calculate the distance between two points using the Haversine formula
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in nautical miles
pub fn distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_distance(lat1, lon1, lat2, lon2) / KM_PER_NM
}

/// Taxicab distance in degrees, used to rank points against a box center
pub fn manhattan_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    (lat1 - lat2).abs() + (lon1 - lon2).abs()
}

/// Initial bearing from the first point to the second, in [0, 360)
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let y = delta_lon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// 16-point compass label for a bearing in degrees
pub fn compass_direction(bearing: f64) -> &'static str {
    let index = (bearing.rem_euclid(360.0) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}
