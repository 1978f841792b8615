use crate::error::Result;
use crate::writers::atomic::write_atomically;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Write `document` pretty-printed with two-space indentation. Non-ASCII
/// text is written as-is rather than escaped.
pub fn write_document(document: &Value, path: &Path) -> Result<()> {
    write_atomically(path, |out| write_document_to(document, out))
}

pub fn write_document_to<W: Write>(document: &Value, out: W) -> Result<()> {
    serde_json::to_writer_pretty(out, document)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_pretty_output_keeps_order_and_unicode() -> Result<()> {
        let document = json!({"type": "FeatureCollection", "name": "מקלטים", "features": []});

        let mut out = Vec::new();
        write_document_to(&document, &mut out)?;

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"type\": \"FeatureCollection\",\n  \"name\": \"מקלטים\",\n  \"features\": []\n}"
        );
        Ok(())
    }
}
