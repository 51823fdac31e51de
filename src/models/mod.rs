pub mod jurisdiction;
pub mod observation;
pub mod state_average;

pub use jurisdiction::JurisdictionBounds;
pub use observation::{FuelObservation, FuelSnapshot};
pub use state_average::StateAverage;
