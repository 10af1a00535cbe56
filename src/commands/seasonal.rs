//! `get_seasonal_data`: player-season totals.

use crate::cli::types::params::SeasonalParams;
use crate::cli::types::time::{normalize_years, resolve_season_type};
use crate::core::{encode_response, QueryMetadata};
use crate::nflverse::StatsSource;
use crate::Result;

pub const SOURCE: &str = "import_seasonal_data";

/// Season aggregates for the resolved season type. `stat_type` only feeds the
/// season-type fallback here; rows are not position-filtered.
pub async fn handle_seasonal_data<S: StatsSource>(
    source: &S,
    params: SeasonalParams,
) -> Result<String> {
    let seasons = normalize_years(params.season.as_ref(), params.years.as_deref())?;
    let scope = resolve_season_type(params.stat_type.as_deref(), params.season_type.as_deref())?;

    let table = source.seasonal(&seasons, scope).await?;

    let meta = QueryMetadata::new(SOURCE, &seasons)
        .with_filter(
            "stat_type",
            params.stat_type.as_deref().filter(|s| !s.is_empty()),
        )
        .with_filter("season_type", scope);
    encode_response(&table, &meta)
}
