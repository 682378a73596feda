//! Degree/minute to decimal-degree coordinate conversion.
//!
//! NOAA station records carry positions as fixed-format degree/minute text,
//! e.g. `"61 10N"` / `"150 30W"`. Conversion failures yield the sentinel pair
//! for both axes so that a record never ends up with one valid and one
//! unknown coordinate.

use crate::app::models::SENTINEL_COORDINATE;

/// Convert a `"DD MMH"` latitude and `"DDD MMH"` longitude pair to signed
/// decimal degrees.
///
/// decimal = degrees + minutes/60, negated for the `S` and `W` hemispheres.
/// If any degree or minute substring is missing or non-numeric, returns
/// `(SENTINEL_COORDINATE, SENTINEL_COORDINATE)`.
pub fn deg_min_to_decimal(lat: &str, lon: &str) -> (f64, f64) {
    match convert_pair(lat, lon) {
        Some(pair) => pair,
        None => (SENTINEL_COORDINATE, SENTINEL_COORDINATE),
    }
}

fn convert_pair(lat: &str, lon: &str) -> Option<(f64, f64)> {
    let lat_deg: f64 = lat.get(0..2)?.trim().parse().ok()?;
    let lat_min: f64 = lat.get(3..5)?.trim().parse().ok()?;
    let lon_deg: f64 = lon.get(0..3)?.trim().parse().ok()?;
    let lon_min: f64 = lon.get(4..6)?.trim().parse().ok()?;

    let mut latitude = lat_deg + lat_min / 60.0;
    let mut longitude = lon_deg + lon_min / 60.0;

    if lat.as_bytes().get(5) == Some(&b'S') {
        latitude = -latitude;
    }
    if lon.as_bytes().get(6) == Some(&b'W') {
        longitude = -longitude;
    }

    Some((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_north_west() {
        let (lat, lon) = deg_min_to_decimal("61 10N", "150 30W");
        assert!((lat - 61.167).abs() < 0.001);
        assert!((lon - -150.5).abs() < 0.001);
    }

    #[test]
    fn test_convert_south_east() {
        let (lat, lon) = deg_min_to_decimal("33 57S", "018 36E");
        assert!((lat - -33.95).abs() < 0.001);
        assert!((lon - 18.6).abs() < 0.001);
    }

    #[test]
    fn test_missing_hemisphere_letter_keeps_sign() {
        // Absence of S/W preserves the positive sign
        let (lat, lon) = deg_min_to_decimal("10 30 ", "020 15 ");
        assert!((lat - 10.5).abs() < 0.001);
        assert!((lon - 20.25).abs() < 0.001);
    }

    #[test]
    fn test_malformed_degrees_yield_sentinel_pair() {
        let (lat, lon) = deg_min_to_decimal("6A 10N", "150 30W");
        assert_eq!(lat, SENTINEL_COORDINATE);
        assert_eq!(lon, SENTINEL_COORDINATE);
    }

    #[test]
    fn test_malformed_minutes_yield_sentinel_pair() {
        // A bad minute field on one axis sentinels both, never a mixed pair
        let (lat, lon) = deg_min_to_decimal("61 10N", "150 xxW");
        assert_eq!(lat, SENTINEL_COORDINATE);
        assert_eq!(lon, SENTINEL_COORDINATE);
    }

    #[test]
    fn test_truncated_input_yields_sentinel_pair() {
        let (lat, lon) = deg_min_to_decimal("61", "150 30W");
        assert_eq!(lat, SENTINEL_COORDINATE);
        assert_eq!(lon, SENTINEL_COORDINATE);
    }

    #[test]
    fn test_valid_inputs_stay_in_canonical_ranges() {
        let cases = [
            ("00 00N", "000 00E"),
            ("89 59S", "179 59W"),
            ("45 30N", "090 15E"),
            ("12 05S", "177 45E"),
        ];
        for (lat_text, lon_text) in cases {
            let (lat, lon) = deg_min_to_decimal(lat_text, lon_text);
            assert!(lat.abs() <= 90.0, "latitude out of range for {lat_text}");
            assert!(lon.abs() <= 180.0, "longitude out of range for {lon_text}");
        }
    }
}
