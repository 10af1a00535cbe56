//! NFL Data Bridge Library
//!
//! Fetches NFL weekly player stats, play-by-play, seasonal aggregates,
//! preseason win totals and rosters from the nflverse data releases and
//! hands them back as a single JSON document.
//!
//! ## Features
//!
//! - **Season Normalisation**: `season`/`years` parameters collapse into a sorted, de-duplicated list
//! - **Post-fetch Filtering**: Week, team and stat-type (position group) filters
//! - **Seasonal Aggregation**: Season totals and receiving share metrics from weekly rows
//! - **Disk Caching**: Completed seasons are downloaded once
//! - **Pluggable Sources**: Any [`StatsSource`] can back the operations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_data_bridge::{commands::run_operation, NflverseSource, Operation};
//!
//! # async fn example() -> nfl_data_bridge::Result<()> {
//! let source = NflverseSource::from_env()?;
//! let json = run_operation(&source, Operation::GetWeeklyData, r#"{"season": 2023, "week": 1}"#).await?;
//! println!("{json}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the provider at a mirror or move the cache:
//! ```bash
//! export NFL_DATA_RELEASE_URL=https://mirror.example/nflverse-data/releases/download
//! export NFL_DATA_CACHE_DIR=/var/cache/nfl
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod nflverse;

// Re-export commonly used types
pub use cli::types::{
    operation::Operation,
    position::PositionGroup,
    time::{Season, SeasonType, Week},
};
pub use crate::core::Table;
pub use error::{BridgeError, Result};
pub use nflverse::{MemorySource, NflverseSource, SourceConfig, StatsSource};

pub const RELEASE_URL_ENV_VAR: &str = "NFL_DATA_RELEASE_URL";
pub const NFLDATA_URL_ENV_VAR: &str = "NFL_DATA_NFLDATA_URL";
pub const CACHE_DIR_ENV_VAR: &str = "NFL_DATA_CACHE_DIR";
pub const NO_CACHE_ENV_VAR: &str = "NFL_DATA_NO_CACHE";
