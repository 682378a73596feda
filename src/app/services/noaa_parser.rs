//! Fixed-width parser for the NOAA `stations.txt` listing (primary source).
//!
//! Each station record is one 83-byte line with positional fields. The
//! listing also carries title blocks, column headers and separators; those
//! lines never match the required length and are skipped without error.

use crate::app::models::{Station, normalize_identifier};
use crate::app::services::coordinates::deg_min_to_decimal;
use crate::constants::{
    NOAA_COUNTRY_RANGE, NOAA_ICAO_RANGE, NOAA_LAT_RANGE, NOAA_LINE_LEN, NOAA_LON_RANGE,
    NOAA_METAR_FLAG, NOAA_METAR_FLAG_INDEX, NOAA_NAME_RANGE,
};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Parse the raw NOAA listing into a map of ICAO identifier to station.
///
/// A line is retained only when it is exactly [`NOAA_LINE_LEN`] bytes,
/// flagged as a METAR-reporting station, and carries a non-blank identifier.
/// A retained line whose coordinate text fails conversion keeps its record
/// with the sentinel pair; missing geometry is not a rejection reason.
///
/// Zero retained records means the source format changed and is fatal;
/// `url` is only used for error context.
pub fn parse(url: &str, text: &str) -> Result<HashMap<String, Station>> {
    let mut stations = HashMap::new();
    let mut lines_seen = 0usize;

    for line in text.split('\n') {
        lines_seen += 1;
        if let Some(station) = parse_line(line) {
            stations.insert(station.icao.clone(), station);
        }
    }

    debug!(
        "NOAA parse: {} stations retained from {} lines",
        stations.len(),
        lines_seen
    );

    if stations.is_empty() {
        return Err(Error::source_format(url, "no valid station record found"));
    }
    Ok(stations)
}

/// Extract a station record from one line, or `None` if the line is not a
/// retained METAR station record.
fn parse_line(line: &str) -> Option<Station> {
    if line.len() != NOAA_LINE_LEN {
        return None;
    }
    if line.as_bytes()[NOAA_METAR_FLAG_INDEX] != NOAA_METAR_FLAG {
        return None;
    }

    // Ranges are byte offsets; a line holding multi-byte characters at a
    // field boundary cannot be a well-formed record.
    let icao = normalize_identifier(line.get(NOAA_ICAO_RANGE)?);
    if icao.is_empty() {
        return None;
    }

    let name = line.get(NOAA_NAME_RANGE)?.trim().to_string();
    let country = line.get(NOAA_COUNTRY_RANGE)?.to_string();

    let lat_text = line.get(NOAA_LAT_RANGE)?;
    let lon_text = line.get(NOAA_LON_RANGE)?;
    let (latitude, longitude) = deg_min_to_decimal(lat_text, lon_text);

    Some(Station {
        icao,
        name,
        iata: String::new(),
        country,
        latitude,
        longitude,
    })
}
