pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{convert_links, export_json, report_error, run};
