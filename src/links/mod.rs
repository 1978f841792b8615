pub mod google_maps;
pub mod waze;

pub use google_maps::create_google_maps_url;
pub use waze::extract_coordinates;
