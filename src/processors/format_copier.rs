use crate::error::Result;
use crate::readers::{features, read_document};
use crate::writers::write_document;
use std::path::Path;
use tracing::info;

/// Re-serialize a GeoJSON document as pretty-printed JSON with no
/// structural change. Returns the number of features copied.
pub fn copy_geojson_to_json(input: &Path, output: &Path) -> Result<usize> {
    let document = read_document(input)?;
    let feature_count = features(&document)?.len();

    write_document(&document, output)?;
    info!(
        "Copied {} features from {} to {}",
        feature_count,
        input.display(),
        output.display()
    );

    Ok(feature_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn test_copy_preserves_structure() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let input = temp_dir.path().join("shelters.geojson");
        let output = temp_dir.path().join("shelters.json");

        let source = r#"{"type":"FeatureCollection","name":"shelters","features":[{"type":"Feature","properties":{"shelter_no":"1","address_label":"רחוב יפו 1"},"geometry":{"type":"Point","coordinates":[35.2,31.7]}}]}"#;
        std::fs::write(&input, source)?;

        let count = copy_geojson_to_json(&input, &output)?;
        assert_eq!(count, 1);

        let written = std::fs::read_to_string(&output)?;
        assert!(written.contains("\n  \"type\": \"FeatureCollection\""));
        assert!(written.contains("רחוב יפו 1"));

        let original: Value = serde_json::from_str(source)?;
        let copied: Value = serde_json::from_str(&written)?;
        assert_eq!(copied, original);
        Ok(())
    }

    #[test]
    fn test_missing_input() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let output = temp_dir.path().join("shelters.json");

        let result = copy_geojson_to_json(&temp_dir.path().join("absent.geojson"), &output);
        assert!(matches!(result, Err(ProcessingError::MissingFile { .. })));
        assert!(!output.exists());
        Ok(())
    }
}
