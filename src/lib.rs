//! METAR Stations Library
//!
//! A Rust library for compiling the canonical METAR station registry from two
//! independently published aviation-station datasets:
//!
//! - NOAA `stations.txt` (fixed-width text, the primary source)
//! - OurAirports `airports.csv` (CSV, the secondary source)
//!
//! This library provides tools for:
//! - Fetching both datasets concurrently with bounded timeouts
//! - Parsing fixed-width and CSV station listings into a common record shape
//! - Converting degree/minute coordinates to signed decimal degrees
//! - Reconciling the two datasets by ICAO identifier with a defined
//!   source-precedence rule
//! - Rewriting the data section of a marker-delimited registry file atomically

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod coordinates;
        pub mod fetcher;
        pub mod noaa_parser;
        pub mod ourairports_parser;
        pub mod reconciler;
        pub mod registry_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Station;
pub use config::Config;

/// Result type alias for the METAR stations compiler
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for registry compilation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport failure (connect, TLS, timeout) while fetching a source
    #[error("fetch failed for '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status from a source endpoint
    #[error("fetch failed for '{url}': HTTP error: {status}")]
    HttpStatus { url: String, status: String },

    /// Response body could not be read after a successful status
    #[error("error reading response body from '{url}'")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Source text did not match the expected structure
    #[error("source '{url}' is not valid: {message}")]
    SourceFormat { url: String, message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Registry file I/O failure
    #[error("registry file '{path}': {message}")]
    RegistryIo {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Registry file has no marker line delimiting the data section
    #[error("registry file '{path}' has no '{marker}' marker line")]
    MissingMarker { path: String, marker: String },

    /// A fetch/parse task panicked or was cancelled
    #[error("source task failed: {message}")]
    Task { message: String },
}

impl Error {
    /// Create a transport error with the source URL
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create an HTTP status error with canonical status text
    pub fn http_status(url: impl Into<String>, status: impl Into<String>) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status: status.into(),
        }
    }

    /// Create a body-read error
    pub fn body_read(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::BodyRead {
            url: url.into(),
            source,
        }
    }

    /// Create a source format error
    pub fn source_format(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceFormat {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a registry I/O error with path context
    pub fn registry_io(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::RegistryIo {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing marker error
    pub fn missing_marker(path: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::MissingMarker {
            path: path.into(),
            marker: marker.into(),
        }
    }

    /// Create a task failure error
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Task {
            message: error.to_string(),
        }
    }
}
