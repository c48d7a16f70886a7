//! Geographic calculations

use crate::error::RouteError;
use crate::types::Coordinates;

/// Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Parse a "lat,lng" string into coordinates.
///
/// Exactly two comma-separated numeric tokens are required; anything else
/// (a missing part, a third part, non-numeric or non-finite values) is
/// rejected.
pub fn parse_coordinates(text: &str) -> Result<Coordinates, RouteError> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 2 {
        return Err(RouteError::InvalidCoordinates {
            text: text.to_string(),
        });
    }

    let lat: f64 = parts[0].trim().parse().map_err(|_| RouteError::InvalidCoordinates {
        text: text.to_string(),
    })?;
    let lng: f64 = parts[1].trim().parse().map_err(|_| RouteError::InvalidCoordinates {
        text: text.to_string(),
    })?;

    if !lat.is_finite() || !lng.is_finite() {
        return Err(RouteError::InvalidCoordinates {
            text: text.to_string(),
        });
    }

    Ok(Coordinates { lat, lng })
}

/// Calculate Haversine distance between two points in kilometers
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Build a Google Maps direction deep link between two points.
///
/// Plain string construction; the link is handed to the frontend as-is and
/// never validated against the map service.
pub fn maps_url(from: &Coordinates, to: &Coordinates) -> String {
    format!(
        "https://www.google.com/maps/dir/{},{}/{},{}",
        from.lat, from.lng, to.lat, to.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_haversine_surabaya_malang() {
        let surabaya = Coordinates { lat: -7.2574719, lng: 112.7520883 };
        let malang = Coordinates { lat: -7.9666, lng: 112.6326 };

        let distance = haversine_distance(&surabaya, &malang);

        // Surabaya to Malang is approximately 80 km straight line
        assert!((distance - 80.0).abs() < 5.0);
    }

    #[test]
    fn test_haversine_jakarta_surabaya() {
        let jakarta = Coordinates { lat: -6.2088, lng: 106.8456 };
        let surabaya = Coordinates { lat: -7.2574719, lng: 112.7520883 };

        let distance = haversine_distance(&jakarta, &surabaya);

        // Jakarta to Surabaya is approximately 660 km straight line
        assert!((distance - 660.0).abs() < 15.0);
    }

    #[test]
    fn test_haversine_same_point() {
        let point = Coordinates { lat: -7.25, lng: 112.75 };
        let distance = haversine_distance(&point, &point);
        assert!((distance - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_coordinates() {
        let c = parse_coordinates("-7.2574719,112.7520883").unwrap();
        assert!((c.lat - -7.2574719).abs() < 1e-12);
        assert!((c.lng - 112.7520883).abs() < 1e-12);

        let c = parse_coordinates("0,0").unwrap();
        assert_eq!(c.lat, 0.0);
        assert_eq!(c.lng, 0.0);
    }

    #[test]
    fn test_parse_coordinates_rejects_malformed() {
        for text in [
            "",
            "abc",
            "-7.25",
            "-7.25,112.75,300",
            "-7.25;112.75",
            "lat,lng",
            "NaN,112.75",
            "-7.25,inf",
        ] {
            assert!(
                matches!(
                    parse_coordinates(text),
                    Err(RouteError::InvalidCoordinates { .. })
                ),
                "expected {:?} to be rejected",
                text
            );
        }
    }

    #[test]
    fn test_maps_url() {
        let from = Coordinates { lat: -7.25, lng: 112.75 };
        let to = Coordinates { lat: -7.3, lng: 112.8 };
        assert_eq!(
            maps_url(&from, &to),
            "https://www.google.com/maps/dir/-7.25,112.75/-7.3,112.8"
        );
    }

    proptest! {
        #[test]
        fn haversine_is_symmetric(
            lat1 in -90.0f64..90.0,
            lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lng2 in -180.0f64..180.0,
        ) {
            let a = Coordinates { lat: lat1, lng: lng1 };
            let b = Coordinates { lat: lat2, lng: lng2 };
            prop_assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-9);
        }

        #[test]
        fn parse_round_trips(
            lat in -90.0f64..90.0,
            lng in -180.0f64..180.0,
        ) {
            let text = format!("{},{}", lat, lng);
            let parsed = parse_coordinates(&text).unwrap();
            prop_assert!((parsed.lat - lat).abs() < 1e-9);
            prop_assert!((parsed.lng - lng).abs() < 1e-9);
        }
    }
}
