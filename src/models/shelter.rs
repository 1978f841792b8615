use crate::models::Coordinate;
use crate::utils::constants::{ADDRESS_LABEL_FIELD, GOOGLE_MAPS_LINK_FIELD, SHELTER_NO_FIELD, WAZE_LINK_FIELD};
use serde_json::{Map, Value};

const NEIGHBORHOOD_FIELD: &str = "neighborhood";
const NEIGHBORHOOD_FIELD_BOM: &str = "\u{feff}neighborhood";

/// Destination label for a shelter: its address when known, otherwise
/// a name derived from the shelter number.
pub fn destination_label(address: Option<&str>, shelter_no: &str) -> String {
    match address {
        Some(address) if !address.is_empty() => address.to_string(),
        _ => format!("Shelter {}", shelter_no),
    }
}

/// Read a feature property as text. Numbers and booleans are rendered,
/// empty strings, nulls and nested values count as absent.
pub fn property_text(properties: &Map<String, Value>, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coordinate of a GeoJSON point feature, `None` when the geometry is
/// missing or not a pair of numbers.
pub fn feature_coordinate(feature: &Value) -> Option<Coordinate> {
    let coordinates = feature.get("geometry")?.get("coordinates")?.as_array()?;
    let longitude = coordinates.first()?.as_f64()?;
    let latitude = coordinates.get(1)?.as_f64()?;
    Some(Coordinate::from_lon_lat(longitude, latitude))
}

/// Shelter as presented to someone looking for the closest one
#[derive(Debug, Clone, PartialEq)]
pub struct Shelter {
    pub id: String,
    pub address: String,
    pub operator: String,
    pub capacity: String,
    pub area: String,
    pub kind: String,
    pub neighborhood: String,
    pub coordinate: Coordinate,
    pub waze_link: String,
    pub google_maps_link: String,
}

impl Shelter {
    /// Build from a GeoJSON feature, `None` when it has no usable point
    pub fn from_feature(feature: &Value) -> Option<Self> {
        let coordinate = feature_coordinate(feature)?;
        let empty = Map::new();
        let properties = feature
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let text = |key: &str, default: &str| {
            property_text(properties, key).unwrap_or_else(|| default.to_string())
        };

        let neighborhood = property_text(properties, NEIGHBORHOOD_FIELD_BOM)
            .or_else(|| property_text(properties, NEIGHBORHOOD_FIELD))
            .unwrap_or_else(|| "Unknown".to_string());

        Some(Self {
            id: text(SHELTER_NO_FIELD, "Unknown"),
            address: text(ADDRESS_LABEL_FIELD, "Address not available"),
            operator: text("operator", "Unknown operator"),
            capacity: text("capacity", "Unknown"),
            area: text("area", "Unknown"),
            kind: text("type", "Shelter"),
            neighborhood,
            coordinate,
            waze_link: text(WAZE_LINK_FIELD, ""),
            google_maps_link: text(GOOGLE_MAPS_LINK_FIELD, ""),
        })
    }
}
