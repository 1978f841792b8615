pub mod csv_reader;
pub mod geojson_reader;

pub use csv_reader::ShelterCsvReader;
pub use geojson_reader::{features, features_mut, read_document};
