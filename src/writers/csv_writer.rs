use crate::error::Result;
use crate::models::ShelterTable;
use crate::utils::constants::UTF8_BOM;
use crate::writers::atomic::write_atomically;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub struct CsvTableWriter {
    delimiter: u8,
}

impl CsvTableWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Write header and rows to `path`, replacing any existing file
    pub fn write_table(&self, table: &ShelterTable, path: &Path) -> Result<()> {
        write_atomically(path, |out| self.write_table_to(table, out))?;
        debug!("Wrote {} rows to {}", table.len(), path.display());
        Ok(())
    }

    /// Write the table, restoring the byte order mark the input started with
    pub fn write_table_to<W: Write>(&self, table: &ShelterTable, mut out: W) -> Result<()> {
        if table.has_bom {
            out.write_all(UTF8_BOM)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(out);

        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_table_quotes_fields() -> Result<()> {
        let mut table = ShelterTable::new(StringRecord::from(vec!["shelter_no", "address_label"]));
        table.push_row(StringRecord::from(vec!["1", "King George, 5"]))?;
        table.push_row(StringRecord::from(vec!["2", ""]))?;

        let mut out = Vec::new();
        CsvTableWriter::new().write_table_to(&table, &mut out)?;

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "shelter_no,address_label\n1,\"King George, 5\"\n2,\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_table_restores_bom() -> Result<()> {
        let mut table = ShelterTable::new(StringRecord::from(vec!["neighborhood", "shelter_no"]));
        table.has_bom = true;
        table.push_row(StringRecord::from(vec!["Rehavia", "7"]))?;

        let mut out = Vec::new();
        CsvTableWriter::new().write_table_to(&table, &mut out)?;

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\u{feff}neighborhood,shelter_no\nRehavia,7\n"
        );
        Ok(())
    }
}
