pub mod coordinate;
pub mod report;
pub mod shelter;
pub mod table;

pub use coordinate::{Coordinate, CoordinateSource};
pub use report::ConversionReport;
pub use shelter::{destination_label, feature_coordinate, property_text, Shelter};
pub use table::ShelterTable;
