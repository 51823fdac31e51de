pub mod bucketing;
pub mod median;
pub mod selection;
pub mod state_aggregator;

pub use bucketing::{Buckets, Candidate, ObservationBucketer};
pub use median::{median, round_to_cents};
pub use selection::{ExtremalSelector, Slot, StateSelection};
pub use state_aggregator::{StateBreakdown, StateFuelAggregator};
