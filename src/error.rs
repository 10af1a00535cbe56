//! Error types for the NFL data bridge

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("At least one season/year must be provided.")]
    EmptySeasons,

    #[error("Invalid season '{value}': expected a four-digit year")]
    InvalidSeason { value: String },

    #[error("Week must be between 1 and 23 (including playoffs), got '{value}'.")]
    InvalidWeek { value: String },

    #[error("Unsupported stat_type '{stat_type}'. Available options: {}", .options.join(", "))]
    UnsupportedStatType {
        stat_type: String,
        options: Vec<&'static str>,
    },

    #[error(
        "season_type must be one of REG, ALL, POST or a recognised alias such as 'regular', 'all', 'post' (got '{value}')"
    )]
    InvalidSeasonType { value: String },

    #[error("Invalid parameters for {operation}: {source}")]
    InvalidParams {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("No {dataset} data published for season {season}")]
    DatasetNotFound { dataset: &'static str, season: u16 },

    #[error("Data source unreachable at {url}: {message} (set {env_var} to use a mirror)")]
    SourceUnavailable {
        url: String,
        message: String,
        env_var: &'static str,
    },
}
