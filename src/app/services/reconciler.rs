//! Cross-source reconciliation of the two station maps.
//!
//! Membership comes from the primary (NOAA) source: every identifier it
//! lists is emitted exactly once, and nothing else is. Descriptive fields
//! come from the secondary (OurAirports) source when it knows the
//! identifier, with the primary's coordinates as a fallback for a secondary
//! record whose position is unknown.

use crate::app::models::Station;
use std::collections::HashMap;
use tracing::debug;

/// Merge the two source maps into one record per primary identifier.
///
/// For each identifier in `primary`:
/// - absent from `secondary`: the primary record is emitted unchanged;
/// - present in `secondary`: the secondary record is emitted, except that a
///   secondary sentinel position is overwritten with the primary's
///   coordinates. When the primary's are also the sentinel, the sentinel
///   pair is emitted unchanged; there is no further fallback.
///
/// Output order is unspecified; the registry writer sorts before
/// serializing.
pub fn merge(
    primary: &HashMap<String, Station>,
    secondary: &HashMap<String, Station>,
) -> Vec<Station> {
    let mut merged = Vec::with_capacity(primary.len());
    let mut coordinate_fallbacks = 0usize;

    for station in primary.values() {
        match secondary.get(&station.icao) {
            Some(enriched) => {
                let mut record = enriched.clone();
                if !record.has_known_position() {
                    record.latitude = station.latitude;
                    record.longitude = station.longitude;
                    coordinate_fallbacks += 1;
                }
                merged.push(record);
            }
            None => merged.push(station.clone()),
        }
    }

    debug!(
        "Reconciled {} stations ({} coordinate fallbacks)",
        merged.len(),
        coordinate_fallbacks
    );
    merged
}
