use crate::models::CoordinateSource;
use std::collections::HashMap;
use std::path::PathBuf;

/// Outcome of converting one input file
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub total_records: usize,
    pub links_created: usize,
    pub out_of_bounds: usize,
    pub sources: HashMap<CoordinateSource, usize>,
}

impl ConversionReport {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            total_records: 0,
            links_created: 0,
            out_of_bounds: 0,
            sources: HashMap::new(),
        }
    }

    pub fn record(&mut self, source: CoordinateSource, link_created: bool) {
        self.total_records += 1;
        *self.sources.entry(source).or_default() += 1;
        if link_created {
            self.links_created += 1;
        }
    }

    pub fn count(&self, source: CoordinateSource) -> usize {
        self.sources.get(&source).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Output: {}", self.output_path.display()),
            format!(
                "Records: {} ({} with Google Maps links)",
                self.total_records, self.links_created
            ),
        ];

        for source in [
            CoordinateSource::Waze,
            CoordinateSource::Fallback,
            CoordinateSource::Geometry,
            CoordinateSource::Missing,
        ] {
            let count = self.count(source);
            if count > 0 {
                lines.push(format!("  coordinates from {}: {}", source, count));
            }
        }

        if self.out_of_bounds > 0 {
            lines.push(format!(
                "  coordinates outside world bounds: {}",
                self.out_of_bounds
            ));
        }

        lines.join("\n")
    }
}
