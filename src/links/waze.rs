use crate::models::Coordinate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static LL_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ll=([0-9.-]+),([0-9.-]+)").expect("valid ll= pattern"));

/// Extract the destination from a Waze deep link's `ll=<lat>,<lon>` parameter.
///
/// HTML-encoded ampersands are decoded first. Returns `None` when the link is
/// empty, has no `ll=` parameter, or carries numbers that do not parse.
///
/// # Examples
/// ```
/// use shelter_links::links::extract_coordinates;
///
/// let coord = extract_coordinates("https://waze.com/ul?ll=31.771959,35.217018&navigate=yes").unwrap();
/// assert_eq!((coord.latitude, coord.longitude), (31.771959, 35.217018));
/// ```
pub fn extract_coordinates(link: &str) -> Option<Coordinate> {
    if link.is_empty() {
        return None;
    }

    let link = link.replace("&amp;", "&");
    let captures = LL_PARAM.captures(&link)?;

    let latitude = captures[1].parse::<f64>();
    let longitude = captures[2].parse::<f64>();

    match (latitude, longitude) {
        (Ok(lat), Ok(lon)) => Some(Coordinate::new(lat, lon)),
        _ => {
            debug!("Unparsable ll= parameter in Waze link: {}", link);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_link() {
        let coord = extract_coordinates("https://waze.com/ul?ll=31.771959,35.217018&navigate=yes");
        assert_eq!(coord, Some(Coordinate::new(31.771959, 35.217018)));
    }

    #[test]
    fn test_extract_html_encoded_link() {
        let encoded = "https://waze.com/ul?navigate=yes&amp;ll=31.771959,35.217018&amp;zoom=17";
        let plain = "https://waze.com/ul?navigate=yes&ll=31.771959,35.217018&zoom=17";

        assert_eq!(extract_coordinates(encoded), extract_coordinates(plain));
        assert_eq!(
            extract_coordinates(encoded),
            Some(Coordinate::new(31.771959, 35.217018))
        );
    }

    #[test]
    fn test_extract_signed_values() {
        let coord = extract_coordinates("https://waze.com/ul?ll=-33.8688,-151.2093");
        assert_eq!(coord, Some(Coordinate::new(-33.8688, -151.2093)));
    }

    #[test]
    fn test_no_coordinates() {
        assert_eq!(extract_coordinates(""), None);
        assert_eq!(extract_coordinates("https://waze.com/ul?q=Jaffa%20St"), None);
        assert_eq!(extract_coordinates("ll=31.77"), None);
    }

    #[test]
    fn test_malformed_numbers_are_absent() {
        assert_eq!(extract_coordinates("https://waze.com/ul?ll=31.7.7,35.2"), None);
        assert_eq!(extract_coordinates("https://waze.com/ul?ll=-,35.2"), None);
    }
}
