//! Core data model for the station registry compiler.

use serde::{Deserialize, Serialize};

/// Reserved coordinate value meaning "unknown or unparseable".
///
/// Assigned and replaced only as a pair, never one axis at a time. Distinct
/// from a legitimate 0,0 position; consumers must check for it explicitly.
pub const SENTINEL_COORDINATE: f64 = 999.0;

/// A METAR station record, the canonical unit of the registry.
///
/// Records are built transiently during a single run; each execution rebuilds
/// the full set from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// 4-character ICAO identifier, the sole join key across sources
    pub icao: String,

    /// Station/airport name, optionally annotated "Name (Municipality)"
    pub name: String,

    /// Alternate short code; may be empty, sourced only from OurAirports
    pub iata: String,

    /// 2-letter country code
    pub country: String,

    /// Latitude in decimal degrees, or [`SENTINEL_COORDINATE`]
    pub latitude: f64,

    /// Longitude in decimal degrees, or [`SENTINEL_COORDINATE`]
    pub longitude: f64,
}

impl Station {
    /// Whether this record carries a real geographic position rather than
    /// the sentinel pair.
    pub fn has_known_position(&self) -> bool {
        self.latitude != SENTINEL_COORDINATE
    }
}

/// Normalize an identifier for use as a join key: surrounding whitespace
/// removed, upper-cased.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(lat: f64, lon: f64) -> Station {
        Station {
            icao: "PANC".to_string(),
            name: "ANCHORAGE INTL".to_string(),
            iata: "ANC".to_string(),
            country: "US".to_string(),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_known_position() {
        assert!(station(61.167, -150.5).has_known_position());
        assert!(station(0.0, 0.0).has_known_position());
        assert!(!station(SENTINEL_COORDINATE, SENTINEL_COORDINATE).has_known_position());
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier(" panc "), "PANC");
        assert_eq!(normalize_identifier("EGLL"), "EGLL");
        assert_eq!(normalize_identifier("   "), "");
    }
}
