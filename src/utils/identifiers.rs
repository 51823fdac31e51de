use crate::utils::constants::{DEFAULT_FEDERAL_JURISDICTION, FEDERAL_PREFIX, MIN_IDENTIFIER_LEN};

/// Well-known federal-prefix airports and the jurisdiction they sit in.
fn federal_airport_jurisdiction(identifier: &str) -> Option<&'static str> {
    let code = match identifier {
        "KJFK" | "KLGA" => "NY",
        "KEWR" => "NJ",
        "KJNB" | "KATL" => "GA",
        "KORD" | "KMDW" => "IL",
        "KDCA" => "DC",
        "KIAD" => "VA",
        "KMCO" | "KTPA" | "KMIA" => "FL",
        "KDFW" | "KIAH" | "KDAL" | "KHOU" => "TX",
        "KLAS" => "NV",
        "KPHX" | "KTUS" => "AZ",
        "KLAX" | "KSFO" | "KSAN" | "KSJC" => "CA",
        "KSEA" | "KGEG" => "WA",
        "KPDX" => "OR",
        "KDEN" => "CO",
        "KMSP" => "MN",
        "KMEM" | "KBNA" => "TN",
        "KSTL" => "MO",
        "KCLE" => "OH",
        "KPIT" | "KPHL" => "PA",
        "KBWI" => "MD",
        "KOKC" | "KTUL" => "OK",
        "KLIT" => "AR",
        "KABQ" => "NM",
        "KSLC" => "UT",
        "KBOI" => "ID",
        _ => return None,
    };
    Some(code)
}

/// Two-character identifier prefixes that map straight to a jurisdiction.
fn prefix_jurisdiction(prefix: &str) -> Option<&'static str> {
    let code = match prefix {
        // Pacific
        "PA" => "PA",
        "PC" | "PH" | "PM" | "PW" => "HI",
        // New York, non-federal
        "NK" => "NY",
        "AK" => "AK",
        "AL" => "AL",
        "AR" => "AR",
        "AZ" => "AZ",
        "CA" => "CA",
        "CO" => "CO",
        "CT" => "CT",
        "DC" => "DC",
        "DE" => "DE",
        "FL" => "FL",
        "GA" => "GA",
        "IA" => "IA",
        "ID" => "ID",
        "IL" => "IL",
        "IN" => "IN",
        "KS" => "KS",
        "KY" => "KY",
        "LA" => "LA",
        "MA" => "MA",
        "MD" => "MD",
        "ME" => "ME",
        "MI" => "MI",
        "MN" => "MN",
        "MO" => "MO",
        "MS" => "MS",
        "MT" => "MT",
        "NC" => "NC",
        "ND" => "ND",
        "NE" => "NE",
        "NH" => "NH",
        "NJ" => "NJ",
        "NM" => "NM",
        "NV" => "NV",
        "NY" => "NY",
        "OH" => "OH",
        "OK" => "OK",
        "OR" => "OR",
        "RI" => "RI",
        "SC" => "SC",
        "SD" => "SD",
        "TN" => "TN",
        "TX" => "TX",
        "UT" => "UT",
        "VA" => "VA",
        "VT" => "VT",
        "WA" => "WA",
        "WI" => "WI",
        "WV" => "WV",
        "WY" => "WY",
        _ => return None,
    };
    Some(code)
}

/// Infer the jurisdiction an airport identifier belongs to.
///
/// Federal-prefix (`K...`) identifiers are looked up in a fixed table of
/// well-known airports and otherwise fall back to
/// [`DEFAULT_FEDERAL_JURISDICTION`]; they never return `None`. All other
/// identifiers are matched on their first two characters.
///
/// # Examples
/// ```
/// use fuel_price_processor::utils::infer_jurisdiction;
///
/// assert_eq!(infer_jurisdiction("KJFK"), Some("NY"));
/// assert_eq!(infer_jurisdiction("PHNL"), Some("HI"));
/// assert_eq!(infer_jurisdiction("EGLL"), None);
/// ```
pub fn infer_jurisdiction(identifier: &str) -> Option<&'static str> {
    let identifier = identifier.trim().to_ascii_uppercase();
    if identifier.chars().count() < MIN_IDENTIFIER_LEN {
        return None;
    }

    if identifier.starts_with(FEDERAL_PREFIX) {
        return Some(
            federal_airport_jurisdiction(&identifier).unwrap_or(DEFAULT_FEDERAL_JURISDICTION),
        );
    }

    identifier.get(..2).and_then(prefix_jurisdiction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_federal_airports() {
        assert_eq!(infer_jurisdiction("KJFK"), Some("NY"));
        assert_eq!(infer_jurisdiction("KEWR"), Some("NJ"));
        assert_eq!(infer_jurisdiction("KDCA"), Some("DC"));
        assert_eq!(infer_jurisdiction("KDEN"), Some("CO"));
    }

    #[test]
    fn test_unknown_federal_airport_falls_back() {
        assert_eq!(infer_jurisdiction("KZZZ"), Some(DEFAULT_FEDERAL_JURISDICTION));
        assert_eq!(infer_jurisdiction("KAPA"), Some("CA"));
        // Reserved prefix wins over the KS/KY state prefixes
        assert_eq!(infer_jurisdiction("KSXX"), Some("CA"));
    }

    #[test]
    fn test_prefix_table() {
        assert_eq!(infer_jurisdiction("PHNL"), Some("HI"));
        assert_eq!(infer_jurisdiction("PANC"), Some("PA"));
        assert_eq!(infer_jurisdiction("NK39"), Some("NY"));
        assert_eq!(infer_jurisdiction("CO12"), Some("CO"));
        assert_eq!(infer_jurisdiction("TX1"), Some("TX"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(infer_jurisdiction("ZZZZ"), None);
        assert_eq!(infer_jurisdiction("EGLL"), None);
        assert_eq!(infer_jurisdiction("KJ"), None);
        assert_eq!(infer_jurisdiction(""), None);
    }

    #[test]
    fn test_normalises_case_and_whitespace() {
        assert_eq!(infer_jurisdiction(" kjfk "), Some("NY"));
        assert_eq!(infer_jurisdiction("phnl"), Some("HI"));
    }
}
