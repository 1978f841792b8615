use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csv::StringRecord;
use serde_json::{json, Value};
use shelter_links::links::{create_google_maps_url, extract_coordinates};
use shelter_links::models::{ConversionReport, ShelterTable};
use shelter_links::processors::{CsvLinkProcessor, GeoJsonLinkProcessor};
use std::path::PathBuf;

// Create test data for benchmarking
fn create_test_table(rows: usize) -> ShelterTable {
    let mut table = ShelterTable::new(StringRecord::from(vec![
        "shelter_no",
        "address_label",
        "latitude",
        "longiude",
        "waze_link",
    ]));

    for i in 0..rows {
        let lat = 31.70 + (i as f64) * 0.0001;
        let lon = 35.15 + (i as f64) * 0.0001;
        let waze = if i % 4 == 0 {
            String::new()
        } else {
            format!("https://waze.com/ul?ll={:.6},{:.6}&amp;navigate=yes", lat, lon)
        };

        table
            .push_row(StringRecord::from(vec![
                i.to_string(),
                format!("Test Street {}", i),
                format!("{:.6}", lat),
                format!("{:.6}", lon),
                waze,
            ]))
            .expect("row width matches header");
    }

    table
}

fn create_test_collection(features: usize) -> Value {
    let features: Vec<Value> = (0..features)
        .map(|i| {
            json!({
                "type": "Feature",
                "properties": {"shelter_no": i, "address_label": format!("Test Street {}", i)},
                "geometry": {"type": "Point", "coordinates": [35.15 + i as f64 * 0.0001, 31.70 + i as f64 * 0.0001]}
            })
        })
        .collect();

    json!({"type": "FeatureCollection", "features": features})
}

fn benchmark_link_functions(c: &mut Criterion) {
    let link = "https://waze.com/ul?ll=31.771959,35.217018&amp;navigate=yes";

    c.bench_function("extract_coordinates", |b| {
        b.iter(|| extract_coordinates(black_box(link)))
    });

    let coordinate = extract_coordinates(link);
    c.bench_function("create_google_maps_url", |b| {
        b.iter(|| create_google_maps_url(black_box(coordinate), black_box(Some("Test Shelter"))))
    });
}

fn benchmark_csv_processor(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_add_links");
    let processor = CsvLinkProcessor::new();

    for rows in [100, 1000, 10000] {
        let table = create_test_table(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| {
                let mut table = table.clone();
                let mut report = ConversionReport::new(PathBuf::from("bench.csv"));
                processor.add_links(&mut table, &mut report, None).unwrap();
                black_box(report)
            })
        });
    }

    group.finish();
}

fn benchmark_geojson_processor(c: &mut Criterion) {
    let mut group = c.benchmark_group("geojson_add_links");
    let processor = GeoJsonLinkProcessor::new();

    for features in [100, 1000, 10000] {
        let document = create_test_collection(features);
        group.bench_with_input(
            BenchmarkId::from_parameter(features),
            &document,
            |b, document| {
                b.iter(|| {
                    let mut document = document.clone();
                    let mut report = ConversionReport::new(PathBuf::from("bench.geojson"));
                    processor.add_links(&mut document, &mut report, None).unwrap();
                    black_box(report)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_link_functions,
    benchmark_csv_processor,
    benchmark_geojson_processor
);
criterion_main!(benches);
