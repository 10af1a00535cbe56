//! `get_win_totals`: preseason win-total lines.

use crate::cli::types::params::SeasonsParams;
use crate::cli::types::time::normalize_years;
use crate::core::{encode_response, QueryMetadata};
use crate::nflverse::StatsSource;
use crate::Result;

pub const SOURCE: &str = "import_win_totals";

pub async fn handle_win_totals<S: StatsSource>(source: &S, params: SeasonsParams) -> Result<String> {
    let seasons = normalize_years(params.season.as_ref(), params.years.as_deref())?;
    let table = source.win_totals(&seasons).await?;
    encode_response(&table, &QueryMetadata::new(SOURCE, &seasons))
}
