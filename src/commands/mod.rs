//! Command implementations for the NFL data bridge
//!
//! Each operation normalises its parameters, asks the [`StatsSource`] for a
//! table, filters it and encodes the JSON response.

pub mod check_module;
pub mod play_by_play;
pub mod rosters;
pub mod seasonal;
pub mod weekly;
pub mod win_totals;

#[cfg(test)]
mod tests;

use serde::de::DeserializeOwned;

use crate::cli::types::operation::Operation;
use crate::cli::types::params::NoParams;
use crate::nflverse::StatsSource;
use crate::{BridgeError, Result};

use check_module::handle_check_module;
use play_by_play::handle_play_by_play;
use rosters::handle_rosters;
use seasonal::handle_seasonal_data;
use weekly::handle_weekly_data;
use win_totals::handle_win_totals;

/// Decode the `--params` JSON for `operation`.
pub fn parse_params<T: DeserializeOwned>(operation: Operation, params: &str) -> Result<T> {
    serde_json::from_str(params).map_err(|source| BridgeError::InvalidParams {
        operation: operation.name(),
        source,
    })
}

/// Run `operation` with JSON-encoded `params` and return the JSON response.
pub async fn run_operation<S: StatsSource>(
    source: &S,
    operation: Operation,
    params: &str,
) -> Result<String> {
    match operation {
        Operation::GetWeeklyData => {
            handle_weekly_data(source, parse_params(operation, params)?).await
        }
        Operation::GetPlayByPlay => {
            handle_play_by_play(source, parse_params(operation, params)?).await
        }
        Operation::GetSeasonalData => {
            handle_seasonal_data(source, parse_params(operation, params)?).await
        }
        Operation::GetWinTotals => {
            handle_win_totals(source, parse_params(operation, params)?).await
        }
        Operation::GetRosters => handle_rosters(source, parse_params(operation, params)?).await,
        Operation::CheckModule => {
            let NoParams {} = parse_params(operation, params)?;
            handle_check_module(source)
        }
    }
}
