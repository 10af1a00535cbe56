//! CLI argument definitions and parsing.

pub mod types;

use clap::{ArgAction, Parser};
use types::operation::Operation;

#[derive(Debug, Parser)]
#[clap(
    name = "nfl-data-bridge",
    about = "NFL weekly, play-by-play, seasonal, win-total and roster data as JSON",
    version
)]
pub struct Bridge {
    /// Operation to execute.
    #[clap(value_enum)]
    pub operation: Operation,

    /// JSON-encoded object with the operation's keyword parameters,
    /// e.g. `{"season": 2023, "week": 5}`.
    #[clap(long, default_value = "{}")]
    pub params: String,

    /// Re-download datasets even if a cached copy exists.
    #[clap(long)]
    pub refresh: bool,

    /// Neither read nor write the dataset cache.
    #[clap(long)]
    pub no_cache: bool,

    /// Log to stderr: `-v` info, `-vv` debug (overridden by RUST_LOG).
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
