use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::{ProcessingError, Result};
use crate::models::Coordinate;
use crate::processors::{
    copy_geojson_to_json, CsvLinkProcessor, GeoJsonLinkProcessor, NearestShelterFinder,
};
use crate::readers::ShelterCsvReader;
use crate::utils::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    setup_logging(&cli);

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir.clone() {
        settings = settings.with_data_dir(data_dir);
    }
    let silent = !cli.show_progress();

    match cli.command.clone().unwrap_or(Commands::All) {
        Commands::All => {
            convert_links(&settings, silent)?;
            println!();
            export_json(&settings)?;
        }

        Commands::Convert => convert_links(&settings, silent)?,

        Commands::ToJson => export_json(&settings)?,

        Commands::Nearest {
            lat,
            lon,
            limit,
            input,
        } => {
            let input = input.unwrap_or_else(|| settings.json_output_path());
            find_nearest(input, Coordinate::new(lat, lon), limit)?;
        }
    }

    Ok(())
}

/// Add Google Maps links to the CSV and GeoJSON files, then show a few examples
pub fn convert_links(settings: &Settings, silent: bool) -> Result<()> {
    println!("Converting Waze links to Google Maps links...");

    let csv_progress = ProgressReporter::new(0, "CSV", silent);
    let csv_report = CsvLinkProcessor::with_columns(settings.columns.clone()).process_file(
        &settings.csv_input_path(),
        &settings.csv_output_path(),
        Some(&csv_progress),
    )?;
    println!(
        "Processed CSV file. Output saved to: {}",
        settings.csv_output_path().display()
    );

    let geojson_progress = ProgressReporter::new(0, "GeoJSON", silent);
    let geojson_report = GeoJsonLinkProcessor::with_columns(settings.columns.clone())
        .process_file(
            &settings.geojson_input_path(),
            &settings.geojson_output_path(),
            Some(&geojson_progress),
        )?;
    println!(
        "Processed GeoJSON file. Output saved to: {}",
        settings.geojson_output_path().display()
    );

    println!("Conversion completed successfully!");
    println!("\n{}", csv_report.summary());
    println!("\n{}", geojson_report.summary());

    print_samples(settings)
}

fn print_samples(settings: &Settings) -> Result<()> {
    if settings.sample_count == 0 {
        return Ok(());
    }

    let table = ShelterCsvReader::new().read_table(&settings.csv_input_path())?;
    let samples = CsvLinkProcessor::with_columns(settings.columns.clone())
        .sample_conversions(&table, settings.sample_count);

    println!("\nExample conversions:");
    for sample in samples {
        println!("\nShelter: {}", sample.label);
        println!("Waze: {}", sample.waze_link);
        println!("Google Maps: {}", sample.google_maps_link);
    }

    Ok(())
}

/// Copy the GeoJSON input to the JSON file the web front-end loads
pub fn export_json(settings: &Settings) -> Result<()> {
    let feature_count =
        copy_geojson_to_json(&settings.geojson_input_path(), &settings.json_output_path())?;

    println!("Converted GeoJSON to JSON format successfully!");
    println!("Features count: {}", feature_count);
    Ok(())
}

fn find_nearest(input: PathBuf, origin: Coordinate, limit: usize) -> Result<()> {
    let finder = NearestShelterFinder::from_file(&input)?.with_limit(limit);
    if finder.is_empty() {
        return Err(ProcessingError::InvalidFormat(format!(
            "No shelters with coordinates in {}",
            input.display()
        )));
    }

    println!(
        "Nearest shelters to {}, {} ({} loaded):",
        origin.latitude,
        origin.longitude,
        finder.len()
    );

    for (i, ranked) in finder.find_nearest(&origin).iter().enumerate() {
        println!("\n{}. {}", i + 1, ranked.summary());
        if !ranked.shelter.google_maps_link.is_empty() {
            println!("   Google Maps: {}", ranked.shelter.google_maps_link);
        }
        if !ranked.shelter.waze_link.is_empty() {
            println!("   Waze: {}", ranked.shelter.waze_link);
        }
    }

    Ok(())
}

/// Print a failure the way a user running the tool by hand expects to see it
pub fn report_error(err: &ProcessingError) {
    match missing_file_hint(err) {
        Some(hint) => {
            println!("Error: {}", err);
            println!("{}", hint);
        }
        None => println!("Error processing files: {}", err),
    }
}

/// Name the directory a missing input was looked up in
fn missing_file_hint(err: &ProcessingError) -> Option<String> {
    let ProcessingError::MissingFile { path } = err else {
        return None;
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(format!(
        "Make sure the data files exist in the '{}' directory.",
        dir.display()
    ))
}

/// Set up structured logging on stderr so stdout stays readable
fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = cli.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shelter_links={}", log_level)));

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}
