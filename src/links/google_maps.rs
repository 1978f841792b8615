use crate::models::Coordinate;
use crate::utils::constants::GOOGLE_MAPS_DIR_URL;
use crate::utils::format_degrees;

/// Build a Google Maps directions URL for `coordinate`.
///
/// An absent coordinate yields an empty string. The label, when present and
/// non-empty, is appended as `+(<label>)` with spaces turned into `+`; no
/// other characters are percent-encoded.
///
/// # Examples
/// ```
/// use shelter_links::links::create_google_maps_url;
/// use shelter_links::models::Coordinate;
///
/// let url = create_google_maps_url(Some(Coordinate::new(31.771959, 35.217018)), Some("Test Shelter"));
/// assert_eq!(url, "https://www.google.com/maps/dir//31.771959,35.217018+(Test+Shelter)");
/// ```
pub fn create_google_maps_url(coordinate: Option<Coordinate>, label: Option<&str>) -> String {
    let Some(coordinate) = coordinate else {
        return String::new();
    };

    let coords = format!(
        "{},{}",
        format_degrees(coordinate.latitude),
        format_degrees(coordinate.longitude)
    );

    match label {
        Some(label) if !label.is_empty() => {
            format!("{}{}+({})", GOOGLE_MAPS_DIR_URL, coords, label.replace(' ', "+"))
        }
        _ => format!("{}{}", GOOGLE_MAPS_DIR_URL, coords),
    }
}
