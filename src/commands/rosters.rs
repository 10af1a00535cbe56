//! `get_rosters`: season rosters.

use crate::cli::types::params::SeasonsParams;
use crate::cli::types::time::normalize_years;
use crate::core::{encode_response, QueryMetadata};
use crate::nflverse::StatsSource;
use crate::Result;

pub const SOURCE: &str = "import_seasonal_rosters";

pub async fn handle_rosters<S: StatsSource>(source: &S, params: SeasonsParams) -> Result<String> {
    let seasons = normalize_years(params.season.as_ref(), params.years.as_deref())?;
    let table = source.rosters(&seasons).await?;
    encode_response(&table, &QueryMetadata::new(SOURCE, &seasons))
}
