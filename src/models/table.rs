use crate::error::{ProcessingError, Result};
use csv::StringRecord;

/// A CSV table held fully in memory, header first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShelterTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
    /// The source file started with a UTF-8 byte order mark
    pub has_bom: bool,
}

impl ShelterTable {
    pub fn new(headers: StringRecord) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            has_bom: false,
        }
    }

    /// Add a row, padding short rows with empty fields. Rows wider than
    /// the header cannot be mapped to a column and are rejected.
    pub fn push_row(&mut self, row: StringRecord) -> Result<()> {
        let width = self.headers.len();

        if row.len() > width {
            return Err(ProcessingError::InvalidFormat(format!(
                "Row {} has {} fields but the header has {}",
                self.rows.len() + 1,
                row.len(),
                width
            )));
        }

        let mut row = row;
        while row.len() < width {
            row.push_field("");
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Field value by column index, empty when the column is absent
    pub fn field<'a>(&self, row: &'a StringRecord, column: Option<usize>) -> &'a str {
        column.and_then(|i| row.get(i)).unwrap_or("")
    }

    /// Index of `name`, appending it as a new empty column when missing
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }

        self.headers.push_field(name);
        for row in &mut self.rows {
            row.push_field("");
        }
        self.headers.len() - 1
    }

    /// Replace one field of a row
    pub fn set_field(&mut self, row_index: usize, column: usize, value: &str) {
        if let Some(row) = self.rows.get_mut(row_index) {
            *row = row
                .iter()
                .enumerate()
                .map(|(i, field)| if i == column { value } else { field })
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ShelterTable {
        let mut table = ShelterTable::new(StringRecord::from(vec!["shelter_no", "address_label"]));
        table.push_row(StringRecord::from(vec!["1", "Jaffa St 1"])).unwrap();
        table.push_row(StringRecord::from(vec!["2"])).unwrap();
        table
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].len(), 2);
        assert_eq!(table.field(&table.rows[1], table.column_index("address_label")), "");
    }

    #[test]
    fn test_wide_rows_are_rejected() {
        let mut table = table();
        let result = table.push_row(StringRecord::from(vec!["3", "a", "b"]));
        assert!(result.is_err());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_ensure_column_appends_once() {
        let mut table = table();
        let index = table.ensure_column("google_maps_link");
        assert_eq!(index, 2);
        assert_eq!(table.ensure_column("google_maps_link"), 2);
        assert_eq!(table.headers.len(), 3);
        assert!(table.rows.iter().all(|r| r.len() == 3));

        table.set_field(0, index, "https://example");
        assert_eq!(&table.rows[0][2], "https://example");
        assert_eq!(&table.rows[0][0], "1");
    }

    #[test]
    fn test_missing_column_reads_empty() {
        let table = table();
        assert_eq!(table.field(&table.rows[0], table.column_index("waze_link")), "");
    }
}
