/// File names
pub const DEFAULT_DATA_DIR: &str = "data";
pub const CSV_INPUT_FILE: &str = "shelters.csv";
pub const CSV_OUTPUT_FILE: &str = "shelters_with_gmaps.csv";
pub const GEOJSON_INPUT_FILE: &str = "shelters.geojson";
pub const GEOJSON_OUTPUT_FILE: &str = "shelters_with_gmaps.geojson";
pub const JSON_OUTPUT_FILE: &str = "shelters_with_gmaps.json";
pub const CONFIG_FILE: &str = "shelter-links.toml";

/// UTF-8 byte order mark, as written by spreadsheet exports
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column and property names
pub const WAZE_LINK_FIELD: &str = "waze_link";
pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longiude"; // sic, matches the published data
pub const LONGITUDE_FIELD_CORRECTED: &str = "longitude";
pub const ADDRESS_LABEL_FIELD: &str = "address_label";
pub const SHELTER_NO_FIELD: &str = "shelter_no";
pub const GOOGLE_MAPS_LINK_FIELD: &str = "google_maps_link";

/// URL formats
pub const GOOGLE_MAPS_DIR_URL: &str = "https://www.google.com/maps/dir//";

/// Jerusalem bounding box
pub const JERUSALEM_MIN_LAT: f64 = 31.70;
pub const JERUSALEM_MAX_LAT: f64 = 31.85;
pub const JERUSALEM_MIN_LON: f64 = 35.15;
pub const JERUSALEM_MAX_LON: f64 = 35.30;

/// Travel speeds in km/h
pub const WALKING_SPEED_KMH: f64 = 5.0;
pub const RUNNING_SPEED_KMH: f64 = 10.0;

/// Processing defaults
pub const DEFAULT_SAMPLE_COUNT: usize = 3;
pub const DEFAULT_NEAREST_LIMIT: usize = 10;
