/// Identifier prefix reserved for the continental-US (federal) airports
pub const FEDERAL_PREFIX: char = 'K';

/// Jurisdiction assigned to federal-prefix airports missing from the lookup table
pub const DEFAULT_FEDERAL_JURISDICTION: &str = "CA";

/// Shortest identifier worth a prefix lookup
pub const MIN_IDENTIFIER_LEN: usize = 3;

/// Number of representative airports per jurisdiction (N, S, E, W, center)
pub const SLOTS_PER_JURISDICTION: usize = 5;

/// Nearest-fuel search defaults
pub const DEFAULT_RADIUS_NM: u32 = 50;
pub const MIN_RADIUS_NM: u32 = 1;
pub const MAX_RADIUS_NM: u32 = 500;
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Distance conversions
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const KM_PER_NM: f64 = 1.852;

/// Configuration
pub const DEFAULT_CONFIG_FILE: &str = "fuel-prices.toml";
pub const ENV_PREFIX: &str = "FUEL_PRICES";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Output formats
pub const FORMAT_JSON: &str = "json";
pub const FORMAT_CSV: &str = "csv";
pub const FORMAT_TABLE: &str = "table";
