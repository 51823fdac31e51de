pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod identifiers;
pub mod progress;
pub mod us_states;

pub use constants::*;
pub use coordinates::{dms_to_decimal, distance_nm, manhattan_distance};
pub use filename::generate_default_report_filename;
pub use identifiers::infer_jurisdiction;
pub use progress::ProgressReporter;
pub use us_states::{code_for_name, jurisdiction, jurisdiction_name, JURISDICTIONS};
