use crate::error::Result;
use crate::models::{Coordinate, Shelter};
use crate::readers::{features, read_document};
use crate::utils::constants::{DEFAULT_NEAREST_LIMIT, RUNNING_SPEED_KMH, WALKING_SPEED_KMH};
use crate::utils::{format_distance, format_travel_time, is_within_jerusalem};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// A shelter together with its distance from the search origin
#[derive(Debug, Clone, PartialEq)]
pub struct RankedShelter {
    pub shelter: Shelter,
    pub distance_km: f64,
}

impl RankedShelter {
    pub fn distance_display(&self) -> String {
        format_distance(self.distance_km)
    }

    pub fn walking_time(&self) -> String {
        format_travel_time(self.distance_km, WALKING_SPEED_KMH)
    }

    pub fn running_time(&self) -> String {
        format_travel_time(self.distance_km, RUNNING_SPEED_KMH)
    }

    pub fn summary(&self) -> String {
        format!(
            "Shelter {} - {} ({}, walk {}, run {})",
            self.shelter.id,
            self.shelter.address,
            self.distance_display(),
            self.walking_time(),
            self.running_time()
        )
    }
}

pub struct NearestShelterFinder {
    shelters: Vec<Shelter>,
    limit: usize,
}

impl NearestShelterFinder {
    pub fn new(shelters: Vec<Shelter>) -> Self {
        Self {
            shelters,
            limit: DEFAULT_NEAREST_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Load shelters from a GeoJSON/JSON feature collection. Features without
    /// point coordinates are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let document = read_document(path)?;
        let finder = Self::from_document(&document)?;
        debug!("Loaded {} shelters from {}", finder.len(), path.display());
        Ok(finder)
    }

    pub fn from_document(document: &Value) -> Result<Self> {
        let all = features(document)?;
        let shelters: Vec<Shelter> = all.iter().filter_map(Shelter::from_feature).collect();

        if shelters.len() < all.len() {
            warn!(
                "Skipped {} features without coordinates",
                all.len() - shelters.len()
            );
        }

        Ok(Self::new(shelters))
    }

    pub fn len(&self) -> usize {
        self.shelters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelters.is_empty()
    }

    /// The closest shelters to `origin`, nearest first
    pub fn find_nearest(&self, origin: &Coordinate) -> Vec<RankedShelter> {
        if !is_within_jerusalem(origin.latitude, origin.longitude) {
            warn!(
                "Location {}, {} is outside Jerusalem; results may be far away",
                origin.latitude, origin.longitude
            );
        }

        let mut ranked: Vec<RankedShelter> = self
            .shelters
            .iter()
            .map(|shelter| RankedShelter {
                distance_km: origin.distance_km(&shelter.coordinate),
                shelter: shelter.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        ranked.truncate(self.limit);
        ranked
    }
}
