//! `check_module`: health payload for clients.

use chrono::Utc;
use serde::Serialize;

use crate::cli::types::operation::Operation;
use crate::nflverse::StatsSource;
use crate::Result;

#[derive(Debug, Serialize)]
struct ModuleStatus<'a> {
    module: &'a str,
    version: &'a str,
    datetime_utc: String,
    functions: Vec<&'static str>,
}

/// Provider name and version, the six operation names, and the current UTC time.
pub fn handle_check_module<S: StatsSource>(source: &S) -> Result<String> {
    let status = ModuleStatus {
        module: source.name(),
        version: source.version(),
        datetime_utc: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        functions: Operation::ALL.iter().map(Operation::name).collect(),
    };
    Ok(serde_json::to_string(&status)?)
}
