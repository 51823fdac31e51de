use crate::models::JurisdictionBounds;

/// Bounding boxes for the 50 states and DC, ordered by code as they are
/// conventionally listed.
pub static JURISDICTIONS: [JurisdictionBounds; 51] = [
    JurisdictionBounds::new("AL", "Alabama", 30.2, 35.0, -88.5, -84.9),
    JurisdictionBounds::new("AK", "Alaska", 51.8, 71.4, -180.0, -130.0),
    JurisdictionBounds::new("AZ", "Arizona", 31.3, 37.0, -114.7, -109.0),
    JurisdictionBounds::new("AR", "Arkansas", 33.0, 36.5, -94.6, -89.6),
    JurisdictionBounds::new("CA", "California", 32.5, 42.0, -124.4, -114.6),
    JurisdictionBounds::new("CO", "Colorado", 37.0, 41.0, -109.1, -102.0),
    JurisdictionBounds::new("CT", "Connecticut", 41.0, 42.1, -73.7, -71.8),
    JurisdictionBounds::new("DE", "Delaware", 38.5, 39.8, -75.8, -75.0),
    JurisdictionBounds::new("DC", "Washington DC", 38.791, 38.995, -77.119, -76.909),
    JurisdictionBounds::new("FL", "Florida", 24.5, 31.0, -87.6, -80.0),
    JurisdictionBounds::new("GA", "Georgia", 30.4, 35.0, -85.6, -80.8),
    JurisdictionBounds::new("HI", "Hawaii", 18.9, 22.5, -160.2, -154.7),
    JurisdictionBounds::new("ID", "Idaho", 42.0, 49.0, -117.2, -111.0),
    JurisdictionBounds::new("IL", "Illinois", 37.0, 42.5, -91.5, -87.0),
    JurisdictionBounds::new("IN", "Indiana", 38.0, 41.8, -88.1, -84.8),
    JurisdictionBounds::new("IA", "Iowa", 40.4, 43.5, -96.6, -90.1),
    JurisdictionBounds::new("KS", "Kansas", 37.0, 40.0, -102.1, -94.6),
    JurisdictionBounds::new("KY", "Kentucky", 36.5, 39.2, -89.6, -81.9),
    JurisdictionBounds::new("LA", "Louisiana", 29.0, 33.0, -94.1, -88.8),
    JurisdictionBounds::new("ME", "Maine", 43.1, 47.5, -71.1, -66.9),
    JurisdictionBounds::new("MD", "Maryland", 37.9, 39.7, -79.5, -75.0),
    JurisdictionBounds::new("MA", "Massachusetts", 41.2, 42.9, -73.5, -69.9),
    JurisdictionBounds::new("MI", "Michigan", 41.7, 48.2, -90.4, -82.1),
    JurisdictionBounds::new("MN", "Minnesota", 43.5, 49.4, -97.2, -89.5),
    JurisdictionBounds::new("MS", "Mississippi", 30.2, 35.0, -91.7, -88.1),
    JurisdictionBounds::new("MO", "Missouri", 36.0, 40.6, -95.8, -89.1),
    JurisdictionBounds::new("MT", "Montana", 44.4, 49.0, -116.0, -104.0),
    JurisdictionBounds::new("NE", "Nebraska", 40.0, 43.0, -104.1, -95.3),
    JurisdictionBounds::new("NV", "Nevada", 35.0, 42.0, -120.0, -114.0),
    JurisdictionBounds::new("NH", "New Hampshire", 42.7, 45.3, -72.6, -70.7),
    JurisdictionBounds::new("NJ", "New Jersey", 38.9, 41.4, -75.6, -73.9),
    JurisdictionBounds::new("NM", "New Mexico", 31.3, 37.0, -109.1, -103.0),
    JurisdictionBounds::new("NY", "New York", 40.5, 45.0, -79.8, -71.8),
    JurisdictionBounds::new("NC", "North Carolina", 33.8, 36.5, -84.3, -75.4),
    JurisdictionBounds::new("ND", "North Dakota", 45.9, 49.0, -104.1, -96.6),
    JurisdictionBounds::new("OH", "Ohio", 38.4, 41.7, -84.8, -80.5),
    JurisdictionBounds::new("OK", "Oklahoma", 33.6, 37.0, -103.0, -94.4),
    JurisdictionBounds::new("OR", "Oregon", 42.0, 46.3, -124.6, -116.5),
    JurisdictionBounds::new("PA", "Pennsylvania", 39.7, 42.3, -80.5, -74.7),
    JurisdictionBounds::new("RI", "Rhode Island", 41.1, 42.0, -71.9, -71.1),
    JurisdictionBounds::new("SC", "South Carolina", 32.0, 35.2, -83.4, -78.5),
    JurisdictionBounds::new("SD", "South Dakota", 42.5, 45.9, -104.1, -96.4),
    JurisdictionBounds::new("TN", "Tennessee", 35.0, 36.5, -90.3, -81.6),
    JurisdictionBounds::new("TX", "Texas", 25.8, 36.5, -106.7, -93.5),
    JurisdictionBounds::new("UT", "Utah", 37.0, 42.0, -114.1, -109.0),
    JurisdictionBounds::new("VT", "Vermont", 42.7, 45.0, -73.5, -71.5),
    JurisdictionBounds::new("VA", "Virginia", 36.5, 39.5, -83.7, -75.2),
    JurisdictionBounds::new("WA", "Washington", 45.5, 49.0, -124.8, -116.9),
    JurisdictionBounds::new("WV", "West Virginia", 37.2, 40.6, -82.6, -77.7),
    JurisdictionBounds::new("WI", "Wisconsin", 42.5, 47.1, -92.9, -86.8),
    JurisdictionBounds::new("WY", "Wyoming", 41.0, 45.0, -111.1, -104.1),
];

/// Look up a jurisdiction by its two-letter code (case-insensitive).
pub fn jurisdiction(code: &str) -> Option<&'static JurisdictionBounds> {
    JURISDICTIONS
        .iter()
        .find(|j| j.code.eq_ignore_ascii_case(code.trim()))
}

/// Full name for a code, falling back to the code itself.
pub fn jurisdiction_name(code: &str) -> String {
    jurisdiction(code)
        .map(|j| j.name.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Reverse lookup from a full jurisdiction name.
pub fn code_for_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("District of Columbia")
        || name.eq_ignore_ascii_case("Washington D.C.")
    {
        return Some("DC");
    }

    JURISDICTIONS
        .iter()
        .find(|j| j.name.eq_ignore_ascii_case(name))
        .map(|j| j.code)
}

/// Resolve either a code ("CO") or a full name ("Colorado").
pub fn resolve(code_or_name: &str) -> Option<&'static JurisdictionBounds> {
    jurisdiction(code_or_name).or_else(|| code_for_name(code_or_name).and_then(jurisdiction))
}
