//! `get_weekly_data`: player-week statistics.

use tracing::info;

use crate::cli::types::params::WeeklyParams;
use crate::cli::types::time::{normalize_years, validate_week};
use crate::core::{encode_response, QueryMetadata, RowFilter};
use crate::nflverse::StatsSource;
use crate::Result;

pub const SOURCE: &str = "import_weekly_data";

/// Weekly player stats, optionally narrowed to one week and a position group
/// (`stat_type`, default `"offense"`).
pub async fn handle_weekly_data<S: StatsSource>(source: &S, params: WeeklyParams) -> Result<String> {
    let seasons = normalize_years(params.season.as_ref(), params.years.as_deref())?;
    let week = validate_week(params.week.as_ref())?;
    let stat_type = params.stat_type.as_deref();

    let table = source.weekly(&seasons).await?;
    info!(rows = table.len(), seasons = seasons.len(), "weekly data fetched");

    let filtered = RowFilter {
        week,
        team: None,
        stat_type,
    }
    .apply(table)?;

    let meta = QueryMetadata::new(SOURCE, &seasons)
        .with_filter("week", week)
        .with_filter(
            "stat_type",
            stat_type.filter(|s| !s.is_empty()).map(str::to_lowercase),
        );
    encode_response(&filtered, &meta)
}
