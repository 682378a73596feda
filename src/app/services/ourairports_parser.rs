//! CSV parser for the OurAirports `airports.csv` listing (secondary source).
//!
//! The listing publishes 18 named columns; a row with any other field count
//! means the upstream schema changed, which fails the whole source rather
//! than dropping rows one at a time.

use crate::app::models::{SENTINEL_COORDINATE, Station, normalize_identifier};
use crate::constants::{OURAIRPORTS_FIELD_COUNT, ourairports_columns as col};
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;
use tracing::debug;

/// Parse the raw OurAirports CSV into a map of identifier to station.
///
/// The first row is the header and is discarded after the field-count check.
/// Rows with unparseable coordinates are kept with the sentinel pair; only a
/// shape mismatch or an empty data section is fatal. `url` is used for error
/// context.
pub fn parse(url: &str, text: &str) -> Result<HashMap<String, Station>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut stations = HashMap::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            Error::source_format(url, format!("row {}: {}", index + 1, e))
        })?;

        if record.len() != OURAIRPORTS_FIELD_COUNT {
            return Err(Error::source_format(
                url,
                format!(
                    "row {}: expected {} fields, found {}",
                    index + 1,
                    OURAIRPORTS_FIELD_COUNT,
                    record.len()
                ),
            ));
        }

        // Row 0 is the column header
        if index == 0 {
            continue;
        }

        let station = parse_row(&record);
        stations.insert(station.icao.clone(), station);
    }

    debug!("OurAirports parse: {} stations retained", stations.len());

    if stations.is_empty() {
        return Err(Error::source_format(url, "no valid station record found"));
    }
    Ok(stations)
}

fn parse_row(record: &StringRecord) -> Station {
    let field = |index: usize| record.get(index).unwrap_or("");

    // The csv reader unescapes quoting; stray embedded quotes in the name
    // are stripped outright.
    let mut name = field(col::NAME).replace('"', "");

    let latitude = field(col::LATITUDE).parse::<f64>();
    let longitude = field(col::LONGITUDE).parse::<f64>();
    let (latitude, longitude) = match (latitude, longitude) {
        (Ok(lat), Ok(lon)) => (lat, lon),
        // Replaced as a pair, never one axis at a time
        _ => (SENTINEL_COORDINATE, SENTINEL_COORDINATE),
    };

    let municipality = field(col::MUNICIPALITY);
    if !municipality.is_empty() {
        name.push_str(&format!(" ({municipality})"));
    }

    Station {
        icao: normalize_identifier(field(col::IDENT)),
        name,
        iata: field(col::IATA_CODE).to_string(),
        country: field(col::ISO_COUNTRY).to_string(),
        latitude,
        longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.test/airports.csv";

    const HEADER: &str = "id,ident,type,name,latitude_deg,longitude_deg,elevation_ft,continent,iso_country,iso_region,municipality,scheduled_service,gps_code,iata_code,local_code,home_link,wikipedia_link,keywords";

    fn row(
        ident: &str,
        name: &str,
        lat: &str,
        lon: &str,
        country: &str,
        municipality: &str,
        iata: &str,
    ) -> String {
        format!(
            "1,{ident},large_airport,{name},{lat},{lon},152,NA,{country},US-AK,{municipality},yes,{ident},{iata},,,,"
        )
    }

    #[test]
    fn test_parse_valid_rows() {
        let text = format!(
            "{HEADER}\n{}\n{}",
            row("PANC", "Ted Stevens Anchorage", "61.1744", "-149.996", "US", "Anchorage", "ANC"),
            row("EGLL", "Heathrow Airport", "51.4706", "-0.461941", "GB", "London", "LHR"),
        );
        let stations = parse(URL, &text).unwrap();
        assert_eq!(stations.len(), 2);

        let anc = &stations["PANC"];
        assert_eq!(anc.name, "Ted Stevens Anchorage (Anchorage)");
        assert_eq!(anc.iata, "ANC");
        assert_eq!(anc.country, "US");
        assert!((anc.latitude - 61.1744).abs() < 1e-9);
        assert!((anc.longitude - -149.996).abs() < 1e-9);
    }

    #[test]
    fn test_header_row_discarded() {
        let text = format!(
            "{HEADER}\n{}",
            row("PANC", "Anchorage", "61.17", "-149.99", "US", "", "ANC")
        );
        let stations = parse(URL, &text).unwrap();
        assert!(!stations.contains_key("IDENT"));
        assert_eq!(stations.len(), 1);
    }

    #[test]
    fn test_empty_municipality_leaves_name_unannotated() {
        let text = format!(
            "{HEADER}\n{}",
            row("PADQ", "Kodiak Airport", "57.75", "-152.49", "US", "", "ADQ")
        );
        let stations = parse(URL, &text).unwrap();
        assert_eq!(stations["PADQ"].name, "Kodiak Airport");
    }

    #[test]
    fn test_stray_quotes_stripped_from_name() {
        // Quoted field with an embedded quoted nickname; the unescaped
        // quotes left by the csv reader are removed outright
        let text = format!(
            "{HEADER}\n{}",
            row(
                "PADQ",
                "\"Kodiak \"\"Benny Benson\"\" Airport\"",
                "57.75",
                "-152.49",
                "US",
                "",
                "ADQ"
            )
        );
        let stations = parse(URL, &text).unwrap();
        assert_eq!(stations["PADQ"].name, "Kodiak Benny Benson Airport");
    }

    #[test]
    fn test_unparseable_coordinates_yield_sentinel_row() {
        let text = format!(
            "{HEADER}\n{}",
            row("PADQ", "Kodiak Airport", "57.75", "west", "US", "Kodiak", "ADQ")
        );
        let stations = parse(URL, &text).unwrap();

        // Record kept, both axes sentineled
        let station = &stations["PADQ"];
        assert_eq!(station.latitude, SENTINEL_COORDINATE);
        assert_eq!(station.longitude, SENTINEL_COORDINATE);
        assert_eq!(station.name, "Kodiak Airport (Kodiak)");
    }

    #[test]
    fn test_field_count_mismatch_is_fatal() {
        let text = format!(
            "{HEADER}\n{}\nshort,row,with,four",
            row("PANC", "Anchorage", "61.17", "-149.99", "US", "", "ANC")
        );
        match parse(URL, &text).unwrap_err() {
            Error::SourceFormat { message, .. } => {
                assert!(message.contains("expected 18 fields"), "{message}");
            }
            other => panic!("expected SourceFormat error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_input_is_fatal() {
        assert!(parse(URL, HEADER).is_err());
    }
}
