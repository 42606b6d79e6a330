//! Error types for the fallible edges of the pipeline.
//!
//! Article fetching and narration talk to third-party services. Their failures
//! are typed here so the pipeline can record *why* an item was dropped instead
//! of only logging it.

use thiserror::Error;

/// Why a location could not be turned into article text.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered with HTTP {0}")]
    Status(u16),

    #[error("page has no readable content")]
    NoContent,

    #[error("invalid location: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Why a summary could not be narrated.
#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("nothing to narrate")]
    EmptyText,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{service} answered with HTTP {code}")]
    Status { service: &'static str, code: u16 },

    #[error("unexpected translation payload: {0}")]
    Translation(String),

    #[error("could not write audio file: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while loading `config.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
