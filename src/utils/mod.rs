pub mod constants;
pub mod coordinates;
pub mod progress;

pub use constants::*;
pub use coordinates::{
    format_degrees, format_distance, format_travel_time, haversine_distance,
    is_within_jerusalem, parse_optional_coordinate,
};
pub use progress::ProgressReporter;
