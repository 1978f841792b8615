use crate::config::ColumnNames;
use crate::error::{ProcessingError, Result};
use crate::links::create_google_maps_url;
use crate::models::{destination_label, feature_coordinate, property_text, ConversionReport, CoordinateSource};
use crate::readers::{features_mut, read_document};
use crate::utils::progress::ProgressReporter;
use crate::writers::write_document;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{info, warn};

pub struct GeoJsonLinkProcessor {
    columns: ColumnNames,
}

impl GeoJsonLinkProcessor {
    pub fn new() -> Self {
        Self {
            columns: ColumnNames::default(),
        }
    }

    pub fn with_columns(columns: ColumnNames) -> Self {
        Self { columns }
    }

    /// Read `input`, add a Google Maps link property to every feature and
    /// write `output`
    pub fn process_file(
        &self,
        input: &Path,
        output: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<ConversionReport> {
        info!("Reading features from {}", input.display());
        let mut document = read_document(input)?;

        let mut report = ConversionReport::new(output.to_path_buf());
        self.add_links(&mut document, &mut report, progress)?;

        write_document(&document, output)?;
        info!(
            "Wrote {} features to {}",
            report.total_records,
            output.display()
        );

        Ok(report)
    }

    /// Set the link property on every feature. Geometry and all other
    /// members of the document are left as they are.
    pub fn add_links(
        &self,
        document: &mut Value,
        report: &mut ConversionReport,
        progress: Option<&ProgressReporter>,
    ) -> Result<()> {
        let features = features_mut(document)?;

        if let Some(p) = progress {
            p.set_length(features.len() as u64);
            p.set_message("Converting GeoJSON features");
        }

        for (index, feature) in features.iter_mut().enumerate() {
            let coordinate = feature_coordinate(feature);
            let source = if coordinate.is_some() {
                CoordinateSource::Geometry
            } else {
                warn!("Feature {} has no point coordinates", index + 1);
                CoordinateSource::Missing
            };

            if let Some(Err(e)) = coordinate.map(|coord| coord.check_bounds()) {
                warn!("Feature {} is outside world bounds: {}", index + 1, e);
                report.out_of_bounds += 1;
            }

            let properties = properties_mut(feature, index)?;
            let label = destination_label(
                property_text(properties, &self.columns.address_label).as_deref(),
                &property_text(properties, &self.columns.shelter_no).unwrap_or_default(),
            );
            let link = create_google_maps_url(coordinate, Some(&label));
            report.record(source, !link.is_empty());

            properties.insert(self.columns.google_maps_link.clone(), Value::String(link));

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!(
                "Converted {} GeoJSON features",
                report.total_records
            ));
        }

        Ok(())
    }
}

impl Default for GeoJsonLinkProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// The feature's properties object, created when missing or null
fn properties_mut(feature: &mut Value, index: usize) -> Result<&mut Map<String, Value>> {
    let feature = feature.as_object_mut().ok_or_else(|| {
        ProcessingError::InvalidFormat(format!("Feature {} is not a JSON object", index + 1))
    })?;

    let properties = feature
        .entry("properties")
        .or_insert_with(|| Value::Object(Map::new()));
    if properties.is_null() {
        *properties = Value::Object(Map::new());
    }

    properties.as_object_mut().ok_or_else(|| {
        ProcessingError::InvalidFormat(format!(
            "Feature {} has non-object properties",
            index + 1
        ))
    })
}
