use crate::config::ColumnNames;
use crate::error::{ProcessingError, Result};
use crate::links::{create_google_maps_url, extract_coordinates};
use crate::models::{destination_label, ConversionReport, Coordinate, CoordinateSource, ShelterTable};
use crate::readers::ShelterCsvReader;
use crate::utils::constants::LONGITUDE_FIELD_CORRECTED;
use crate::utils::parse_optional_coordinate;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvTableWriter;
use csv::StringRecord;
use std::path::Path;
use tracing::{debug, info, warn};

/// Column positions looked up once per table
struct ColumnIndices {
    waze_link: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
    address_label: Option<usize>,
    shelter_no: Option<usize>,
}

/// A shelter whose Waze link was converted, for display after a run
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConversion {
    pub label: String,
    pub waze_link: String,
    pub google_maps_link: String,
}

pub struct CsvLinkProcessor {
    columns: ColumnNames,
}

impl CsvLinkProcessor {
    pub fn new() -> Self {
        Self {
            columns: ColumnNames::default(),
        }
    }

    pub fn with_columns(columns: ColumnNames) -> Self {
        Self { columns }
    }

    /// Read `input`, add a Google Maps link to every row and write `output`
    pub fn process_file(
        &self,
        input: &Path,
        output: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<ConversionReport> {
        info!("Reading shelters from {}", input.display());
        let mut table = ShelterCsvReader::new().read_table(input)?;

        let mut report = ConversionReport::new(output.to_path_buf());
        self.add_links(&mut table, &mut report, progress)?;

        CsvTableWriter::new().write_table(&table, output)?;
        info!("Wrote {} rows to {}", table.len(), output.display());

        Ok(report)
    }

    /// Fill the link column for every row, appending the column when the
    /// table does not have it yet
    pub fn add_links(
        &self,
        table: &mut ShelterTable,
        report: &mut ConversionReport,
        progress: Option<&ProgressReporter>,
    ) -> Result<()> {
        if let Some(p) = progress {
            p.set_length(table.len() as u64);
            p.set_message("Converting CSV rows");
        }

        let indices = self.column_indices(table);
        let link_column = table.ensure_column(&self.columns.google_maps_link);

        for row_index in 0..table.len() {
            let row = &table.rows[row_index];
            let (coordinate, source) = self
                .resolve_coordinate(table, row, &indices)
                .map_err(|e| match e {
                    ProcessingError::InvalidCoordinate(msg) => ProcessingError::InvalidCoordinate(
                        format!("row {}: {}", row_index + 1, msg),
                    ),
                    other => other,
                })?;

            if let Some(Err(e)) = coordinate.map(|coord| coord.check_bounds()) {
                warn!("Row {} is outside world bounds: {}", row_index + 1, e);
                report.out_of_bounds += 1;
            }

            let label = self.label(table, row, &indices);
            let link = create_google_maps_url(coordinate, Some(&label));
            report.record(source, !link.is_empty());

            table.set_field(row_index, link_column, &link);

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!("Converted {} CSV rows", table.len()));
        }

        Ok(())
    }

    /// Up to `count` of the leading rows whose Waze link yields a coordinate
    pub fn sample_conversions(&self, table: &ShelterTable, count: usize) -> Vec<SampleConversion> {
        let indices = self.column_indices(table);

        table
            .rows
            .iter()
            .take(count)
            .filter_map(|row| {
                let waze_link = table.field(row, indices.waze_link);
                let coordinate = extract_coordinates(waze_link)?;
                let label = self.label(table, row, &indices);
                let google_maps_link = create_google_maps_url(Some(coordinate), Some(&label));

                Some(SampleConversion {
                    label,
                    waze_link: waze_link.to_string(),
                    google_maps_link,
                })
            })
            .collect()
    }

    fn column_indices(&self, table: &ShelterTable) -> ColumnIndices {
        let longitude = table.column_index(&self.columns.longitude).or_else(|| {
            let corrected = table.column_index(LONGITUDE_FIELD_CORRECTED);
            if corrected.is_some() {
                debug!(
                    "Column '{}' not found, using '{}'",
                    self.columns.longitude, LONGITUDE_FIELD_CORRECTED
                );
            }
            corrected
        });

        ColumnIndices {
            waze_link: table.column_index(&self.columns.waze_link),
            latitude: table.column_index(&self.columns.latitude),
            longitude,
            address_label: table.column_index(&self.columns.address_label),
            shelter_no: table.column_index(&self.columns.shelter_no),
        }
    }

    /// Waze link first, the explicit latitude/longitude columns otherwise
    fn resolve_coordinate(
        &self,
        table: &ShelterTable,
        row: &StringRecord,
        indices: &ColumnIndices,
    ) -> Result<(Option<Coordinate>, CoordinateSource)> {
        if let Some(coord) = extract_coordinates(table.field(row, indices.waze_link)) {
            return Ok((Some(coord), CoordinateSource::Waze));
        }

        let latitude = parse_optional_coordinate(table.field(row, indices.latitude))?;
        let longitude = parse_optional_coordinate(table.field(row, indices.longitude))?;

        match Coordinate::from_parts(latitude, longitude) {
            Some(coord) => Ok((Some(coord), CoordinateSource::Fallback)),
            None => Ok((None, CoordinateSource::Missing)),
        }
    }

    fn label(&self, table: &ShelterTable, row: &StringRecord, indices: &ColumnIndices) -> String {
        destination_label(
            Some(table.field(row, indices.address_label)),
            table.field(row, indices.shelter_no),
        )
    }
}

impl Default for CsvLinkProcessor {
    fn default() -> Self {
        Self::new()
    }
}
