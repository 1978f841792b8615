use crate::error::{ProcessingError, Result};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a GeoJSON (or plain JSON) document as an untyped tree so that every
/// member, known or not, survives a rewrite.
pub fn read_document(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| ProcessingError::from_io(e, path))?;
    let document = serde_json::from_reader(BufReader::new(file))?;
    Ok(document)
}

/// Mutable access to the `features` array of a FeatureCollection
pub fn features_mut(document: &mut Value) -> Result<&mut Vec<Value>> {
    document
        .get_mut("features")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| {
            ProcessingError::InvalidFormat("GeoJSON document has no 'features' array".to_string())
        })
}

/// The `features` array of a FeatureCollection
pub fn features(document: &Value) -> Result<&Vec<Value>> {
    document
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ProcessingError::InvalidFormat("GeoJSON document has no 'features' array".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_document() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(
            temp_file,
            r#"{{"type": "FeatureCollection", "name": "shelters", "features": []}}"#
        )?;

        let document = read_document(temp_file.path())?;
        assert_eq!(document["name"], "shelters");
        assert!(features(&document)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_json() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "{{ not json")?;

        let result = read_document(temp_file.path());
        assert!(matches!(result, Err(ProcessingError::Json(_))));
        Ok(())
    }

    #[test]
    fn test_missing_features() {
        let mut document = json!({"type": "Feature"});
        assert!(features(&document).is_err());
        assert!(features_mut(&mut document).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = read_document(Path::new("no/such/shelters.geojson"));
        assert!(matches!(result, Err(ProcessingError::MissingFile { .. })));
    }
}
