pub mod nearest_fuel;
pub mod price_summary;

pub use nearest_fuel::{NearbyFuel, NearestFuelFinder};
pub use price_summary::PriceSummary;
