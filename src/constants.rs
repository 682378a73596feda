//! Application constants for the METAR station registry compiler
//!
//! Default source endpoints, the NOAA fixed-width record layout, the
//! OurAirports column layout, and the registry file format.

// =============================================================================
// Default Source Endpoints
// =============================================================================

/// NOAA METAR station listing (fixed-width text, the primary source)
pub const DEFAULT_PRIMARY_URL: &str = "https://www.aviationweather.gov/docs/metar/stations.txt";

/// OurAirports airport listing (CSV, the secondary source)
pub const DEFAULT_SECONDARY_URL: &str = "https://ourairports.com/data/airports.csv";

/// Default per-fetch timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Default registry file path
pub const DEFAULT_OUTPUT_PATH: &str = "data/ad_list.go";

// =============================================================================
// NOAA Fixed-Width Record Layout
// =============================================================================
//
// Byte offsets into an 83-byte stations.txt line. Lines of any other length
// (titles, separators, footers) carry no station record.

/// Required line length in bytes
pub const NOAA_LINE_LEN: usize = 83;

/// Station/airport name field
pub const NOAA_NAME_RANGE: std::ops::Range<usize> = 3..20;

/// ICAO identifier field
pub const NOAA_ICAO_RANGE: std::ops::Range<usize> = 20..24;

/// Latitude field, "DD MMH" degree/minute text
pub const NOAA_LAT_RANGE: std::ops::Range<usize> = 39..46;

/// Longitude field, "DDD MMH" degree/minute text
pub const NOAA_LON_RANGE: std::ops::Range<usize> = 47..55;

/// Column holding the METAR-reporting flag
pub const NOAA_METAR_FLAG_INDEX: usize = 62;

/// Flag value marking a METAR-reporting station
pub const NOAA_METAR_FLAG: u8 = b'X';

/// Two-letter country code field
pub const NOAA_COUNTRY_RANGE: std::ops::Range<usize> = 81..83;

// =============================================================================
// OurAirports CSV Layout
// =============================================================================

/// Required field count for every row, header included
pub const OURAIRPORTS_FIELD_COUNT: usize = 18;

/// Column indices into an airports.csv row
pub mod ourairports_columns {
    pub const IDENT: usize = 1;
    pub const NAME: usize = 3;
    pub const LATITUDE: usize = 4;
    pub const LONGITUDE: usize = 5;
    pub const ISO_COUNTRY: usize = 8;
    pub const MUNICIPALITY: usize = 10;
    pub const IATA_CODE: usize = 13;
}

// =============================================================================
// Registry File Format
// =============================================================================

/// Marker text identifying the line that opens the data section; everything
/// after the first line containing it is rewritten on each run
pub const DEFAULT_REGISTRY_MARKER: &str = "var AdList";

/// Closing line appended after the record section
pub const REGISTRY_CLOSING_LINE: &str = "}";

/// Field delimiter inside a serialized record
pub const RECORD_FIELD_DELIMITER: char = ';';

/// Decimal places for serialized coordinates
pub const COORDINATE_PRECISION: usize = 3;
