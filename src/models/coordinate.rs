use crate::error::Result;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build from the `[longitude, latitude]` order GeoJSON uses
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self::new(latitude, longitude)
    }

    /// Both halves must be present to form a coordinate
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Self::new(lat, lon)),
            _ => None,
        }
    }

    /// Latitude within ±90 and longitude within ±180
    pub fn check_bounds(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }

    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        crate::utils::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Where a record's coordinate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSource {
    Waze,
    Fallback,
    Geometry,
    Missing,
}

impl std::fmt::Display for CoordinateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CoordinateSource::Waze => "Waze link",
            CoordinateSource::Fallback => "latitude/longitude columns",
            CoordinateSource::Geometry => "feature geometry",
            CoordinateSource::Missing => "missing",
        };
        write!(f, "{}", name)
    }
}
