//! Registry file writer.
//!
//! The registry artifact is a human-editable text file: a preamble, then a
//! marker line opening the data section, then one quoted semicolon-delimited
//! record per line, closed by a structural `}` line. Each run rewrites
//! everything after the marker line and leaves the preamble untouched.
//!
//! The rewrite is atomic: the new content is assembled in memory and
//! persisted through a temp file in the same directory plus a rename, so a
//! failed run leaves the artifact byte-identical.

use crate::app::models::Station;
use crate::constants::{COORDINATE_PRECISION, RECORD_FIELD_DELIMITER, REGISTRY_CLOSING_LINE};
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Serialize one station as a registry data line (without terminator).
///
/// Field order is identifier, secondary code, name, country, latitude,
/// longitude; coordinates carry exactly 3 decimal places so repeated runs
/// over the same data are byte-identical.
pub fn serialize_record(station: &Station) -> String {
    let d = RECORD_FIELD_DELIMITER;
    format!(
        "\t\"{}{d}{}{d}{}{d}{}{d}{:.prec$}{d}{:.prec$}\",",
        station.icao,
        station.iata,
        station.name,
        station.country,
        station.latitude,
        station.longitude,
        prec = COORDINATE_PRECISION,
    )
}

/// Render the full data section: records sorted by identifier, one per
/// line, followed by the closing structural line.
pub fn render_data_section(stations: &[Station]) -> String {
    let mut sorted: Vec<&Station> = stations.iter().collect();
    sorted.sort_by(|a, b| a.icao.cmp(&b.icao));

    let mut section = String::new();
    for station in sorted {
        section.push_str(&serialize_record(station));
        section.push('\n');
    }
    section.push_str(REGISTRY_CLOSING_LINE);
    section.push('\n');
    section
}

/// Replace the data section of the registry file at `path` with `stations`.
///
/// Locates the first line containing `marker`, keeps everything through that
/// line, and discards everything after it. A missing marker line is an
/// error; nothing is written in that case. Returns the number of records
/// written.
pub fn write_registry(path: &Path, marker: &str, stations: &[Station]) -> Result<usize> {
    let path_display = path.display().to_string();

    let current = std::fs::read_to_string(path)
        .map_err(|e| Error::registry_io(&path_display, "failed to read", e))?;

    let preamble = preamble_through_marker(&current, marker)
        .ok_or_else(|| Error::missing_marker(&path_display, marker))?;

    let mut content = preamble.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&render_data_section(stations));

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut temp = tempfile::NamedTempFile::new_in(parent.unwrap_or(Path::new(".")))
        .map_err(|e| Error::registry_io(&path_display, "failed to create temp file", e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| Error::registry_io(&path_display, "failed to write temp file", e))?;
    temp.persist(path)
        .map_err(|e| Error::registry_io(&path_display, "failed to replace", e.error))?;

    info!(
        "Wrote {} records to registry {}",
        stations.len(),
        path_display
    );
    debug!("Preamble preserved: {} bytes", preamble.len());
    Ok(stations.len())
}

/// Everything from the start of `content` through the end of the first line
/// containing `marker`, or `None` when no line matches.
fn preamble_through_marker<'a>(content: &'a str, marker: &str) -> Option<&'a str> {
    let mut end = 0;
    for line in content.split_inclusive('\n') {
        end += line.len();
        if line.contains(marker) {
            return Some(&content[..end]);
        }
    }
    None
}
