//! nflverse data provider
//!
//! Fetches the public nflverse CSV release assets and turns them into
//! [`Table`](crate::core::Table)s:
//! - `config`: base URLs and cache settings
//! - `http`: dataset URLs and downloads
//! - `parse`: gzip and CSV decoding
//! - `compute`: seasonal aggregation and roster ages
//! - `source`: the [`StatsSource`] seam with network and in-memory providers

pub mod compute;
pub mod config;
pub mod http;
pub mod parse;
pub mod source;

pub use config::SourceConfig;
pub use source::{MemorySource, NflverseSource, StatsSource};
