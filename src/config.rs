//! Runtime settings.
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `shelter-links.toml`, then `SHELTER_LINKS__*` environment variables.
//! CLI flags are applied on top by the caller.

use crate::error::Result;
use crate::utils::constants::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names of the CSV columns and GeoJSON properties the converter reads and writes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnNames {
    pub waze_link: String,
    pub latitude: String,
    pub longitude: String,
    pub address_label: String,
    pub shelter_no: String,
    pub google_maps_link: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            waze_link: WAZE_LINK_FIELD.to_string(),
            latitude: LATITUDE_FIELD.to_string(),
            longitude: LONGITUDE_FIELD.to_string(),
            address_label: ADDRESS_LABEL_FIELD.to_string(),
            shelter_no: SHELTER_NO_FIELD.to_string(),
            google_maps_link: GOOGLE_MAPS_LINK_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub csv_input: String,
    pub csv_output: String,
    pub geojson_input: String,
    pub geojson_output: String,
    pub json_output: String,
    pub sample_count: usize,
    pub columns: ColumnNames,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            csv_input: CSV_INPUT_FILE.to_string(),
            csv_output: CSV_OUTPUT_FILE.to_string(),
            geojson_input: GEOJSON_INPUT_FILE.to_string(),
            geojson_output: GEOJSON_OUTPUT_FILE.to_string(),
            json_output: JSON_OUTPUT_FILE.to_string(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            columns: ColumnNames::default(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default `shelter-links.toml`
    /// is only read when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let columns = &defaults.columns;

        let file_source = match config_file {
            Some(path) => ::config::File::from(path.to_path_buf()).required(true),
            None => ::config::File::with_name(CONFIG_FILE).required(false),
        };

        let settings = ::config::Config::builder()
            .set_default("data_dir", defaults.data_dir.to_string_lossy().to_string())?
            .set_default("csv_input", defaults.csv_input.clone())?
            .set_default("csv_output", defaults.csv_output.clone())?
            .set_default("geojson_input", defaults.geojson_input.clone())?
            .set_default("geojson_output", defaults.geojson_output.clone())?
            .set_default("json_output", defaults.json_output.clone())?
            .set_default("sample_count", defaults.sample_count as i64)?
            .set_default("columns.waze_link", columns.waze_link.clone())?
            .set_default("columns.latitude", columns.latitude.clone())?
            .set_default("columns.longitude", columns.longitude.clone())?
            .set_default("columns.address_label", columns.address_label.clone())?
            .set_default("columns.shelter_no", columns.shelter_no.clone())?
            .set_default("columns.google_maps_link", columns.google_maps_link.clone())?
            .add_source(file_source)
            .add_source(
                ::config::Environment::with_prefix("SHELTER_LINKS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    pub fn csv_input_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_input)
    }

    pub fn csv_output_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_output)
    }

    pub fn geojson_input_path(&self) -> PathBuf {
        self.data_dir.join(&self.geojson_input)
    }

    pub fn geojson_output_path(&self) -> PathBuf {
        self.data_dir.join(&self.geojson_output)
    }

    pub fn json_output_path(&self) -> PathBuf {
        self.data_dir.join(&self.json_output)
    }
}
