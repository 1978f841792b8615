pub mod csv_processor;
pub mod format_copier;
pub mod geojson_processor;
pub mod nearest;

pub use csv_processor::{CsvLinkProcessor, SampleConversion};
pub use format_copier::copy_geojson_to_json;
pub use geojson_processor::GeoJsonLinkProcessor;
pub use nearest::{NearestShelterFinder, RankedShelter};
