use crate::error::{ProcessingError, Result};
use crate::models::ShelterTable;
use crate::utils::constants::UTF8_BOM;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub struct ShelterCsvReader {
    delimiter: u8,
}

impl ShelterCsvReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Read the whole shelters table from a CSV file with a header row
    pub fn read_table(&self, path: &Path) -> Result<ShelterTable> {
        let file = File::open(path).map_err(|e| ProcessingError::from_io(e, path))?;
        let table = self.read_table_from(file)?;

        debug!("Read {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Read a table from any reader.
    ///
    /// A leading byte order mark is stripped so the first header matches its
    /// plain name, and remembered so the writer can put it back.
    pub fn read_table_from<R: Read>(&self, mut input: R) -> Result<ShelterTable> {
        let mut buffer = Vec::new();
        input.read_to_end(&mut buffer)?;

        let (has_bom, body) = match buffer.strip_prefix(UTF8_BOM) {
            Some(rest) => (true, rest),
            None => (false, buffer.as_slice()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(body);

        let mut table = ShelterTable::new(reader.headers()?.clone());
        table.has_bom = has_bom;

        for record in reader.records() {
            table.push_row(record?)?;
        }

        Ok(table)
    }
}

impl Default for ShelterCsvReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_table_from_str() -> Result<()> {
        let data = "shelter_no,address_label,waze_link\n1,Jaffa St 1,\n2,\"King George, 5\",\"https://waze.com/ul?ll=1,2\"\n";
        let table = ShelterCsvReader::new().read_table_from(data.as_bytes())?;

        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(&table.rows[1][1], "King George, 5");
        Ok(())
    }

    #[test]
    fn test_read_table_remembers_bom() -> Result<()> {
        let data = "\u{feff}shelter_no,address_label\n1,Jaffa St 1\n";
        let table = ShelterCsvReader::new().read_table_from(data.as_bytes())?;

        assert!(table.has_bom);
        assert_eq!(table.column_index("shelter_no"), Some(0));
        Ok(())
    }

    #[test]
    fn test_read_table_without_bom() -> Result<()> {
        let data = "shelter_no,address_label\n1,Jaffa St 1\n";
        let table = ShelterCsvReader::new().read_table_from(data.as_bytes())?;

        assert!(!table.has_bom);
        assert_eq!(&table.headers[0], "shelter_no");
        Ok(())
    }

    #[test]
    fn test_read_table_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "shelter_no,latitude,longiude")?;
        writeln!(temp_file, "1,31.77,35.21")?;

        let table = ShelterCsvReader::new().read_table(temp_file.path())?;
        assert_eq!(table.len(), 1);
        assert_eq!(&table.rows[0][2], "35.21");
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = ShelterCsvReader::new().read_table(Path::new("no/such/shelters.csv"));
        assert!(matches!(result, Err(ProcessingError::MissingFile { .. })));
    }
}
