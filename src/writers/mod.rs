pub mod atomic;
pub mod csv_writer;
pub mod json_writer;

pub use atomic::write_atomically;
pub use csv_writer::CsvTableWriter;
pub use json_writer::{write_document, write_document_to};
