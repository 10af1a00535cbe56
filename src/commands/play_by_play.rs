//! `get_play_by_play`: one row per play.

use tracing::info;

use crate::cli::types::params::PlayByPlayParams;
use crate::cli::types::time::{normalize_years, validate_week};
use crate::core::{encode_response, QueryMetadata, RowFilter};
use crate::nflverse::StatsSource;
use crate::Result;

pub const SOURCE: &str = "import_pbp_data";

/// Play-by-play rows, optionally narrowed to one week and to plays involving
/// a team in any team-like column.
pub async fn handle_play_by_play<S: StatsSource>(
    source: &S,
    params: PlayByPlayParams,
) -> Result<String> {
    let seasons = normalize_years(params.season.as_ref(), params.years.as_deref())?;
    let week = validate_week(params.week.as_ref())?;

    let table = source.play_by_play(&seasons).await?;
    info!(rows = table.len(), seasons = seasons.len(), "play-by-play fetched");

    let filtered = RowFilter {
        week,
        team: params.team.as_deref(),
        stat_type: None,
    }
    .apply(table)?;

    let meta = QueryMetadata::new(SOURCE, &seasons)
        .with_filter("week", week)
        .with_filter("team", params.team.as_deref());
    encode_response(&filtered, &meta)
}
