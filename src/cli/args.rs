use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelter-links")]
#[command(about = "Add Google Maps navigation links to shelter data and export it as JSON")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(
        short,
        long,
        global = true,
        help = "Directory holding the shelter data files [default: data]"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Settings file [default: shelter-links.toml if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only log errors and hide progress bars")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Convert links and export JSON (the default when no command is given)
    All,

    /// Add Google Maps links to the CSV and GeoJSON shelter files
    Convert,

    /// Copy the GeoJSON shelter file to pretty-printed JSON
    ToJson,

    /// List the shelters closest to a location
    Nearest {
        #[arg(long, allow_hyphen_values = true, help = "Latitude in decimal degrees")]
        lat: f64,

        #[arg(long, allow_hyphen_values = true, help = "Longitude in decimal degrees")]
        lon: f64,

        #[arg(short, long, default_value = "10")]
        limit: usize,

        #[arg(
            short,
            long,
            help = "Shelter JSON/GeoJSON file [default: <data-dir>/shelters_with_gmaps.json]"
        )]
        input: Option<PathBuf>,
    },
}

impl Cli {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
