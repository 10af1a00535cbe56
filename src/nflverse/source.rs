//! The data-provider seam and its implementations.

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::core::cache::{dataset_cache_path, read_if_fresh, write_bytes};
use crate::core::table::Table;
use crate::nflverse::compute::{add_roster_age, seasonal_from_weekly};
use crate::nflverse::config::SourceConfig;
use crate::nflverse::http::{build_client, fetch_bytes, Dataset};
use crate::nflverse::parse::{decompress, parse_csv, parse_csv_strict};
use crate::{Result, Season, SeasonType};

/// A provider of NFL tables, one fetch per logical query type.
///
/// Every method receives the already-normalised season list. Failures are
/// returned unchanged; there is no retry.
#[allow(async_fn_in_trait)]
pub trait StatsSource {
    /// Short provider name reported by the health check.
    fn name(&self) -> &'static str;

    /// Provider version reported by the health check.
    fn version(&self) -> &str;

    /// One row per player-week.
    async fn weekly(&self, years: &[Season]) -> Result<Table>;

    /// One row per play.
    async fn play_by_play(&self, years: &[Season]) -> Result<Table>;

    /// One row per player-season, aggregated from [`StatsSource::weekly`].
    async fn seasonal(&self, years: &[Season], season_type: SeasonType) -> Result<Table> {
        let weekly = self.weekly(years).await?;
        Ok(seasonal_from_weekly(&weekly, season_type))
    }

    /// Preseason win-total lines for the requested seasons.
    async fn win_totals(&self, years: &[Season]) -> Result<Table>;

    /// Season rosters with an `age` column derived from `birth_date`.
    async fn rosters(&self, years: &[Season]) -> Result<Table>;
}

/// Keep rows whose `season` is in `years`. Tables without the column pass through.
fn restrict_to_seasons(mut table: Table, years: &[Season]) -> Table {
    if table.has_column("season") {
        table.retain(|row| {
            row.get("season")
                .and_then(serde_json::Value::as_i64)
                .is_some_and(|s| years.iter().any(|y| i64::from(y.as_u16()) == s))
        });
    }
    table
}

/// Downloads nflverse CSV release assets, with an optional disk cache.
#[derive(Debug, Clone)]
pub struct NflverseSource {
    client: Client,
    config: SourceConfig,
}

impl NflverseSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            config,
        })
    }

    /// Provider configured from `NFL_DATA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(SourceConfig::from_env())
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Fetch one dataset file, going through the cache when enabled.
    async fn load(&self, dataset: Dataset, season: Season) -> Result<Table> {
        let file = dataset.file_name(season);
        let cache_path = self
            .config
            .cache_dir
            .as_deref()
            .map(|root| dataset_cache_path(root, dataset.name(), &file));

        if let Some(path) = cache_path.as_deref().filter(|_| !self.config.refresh) {
            if let Some(bytes) = read_if_fresh(path, dataset.max_age(season)) {
                match decompress(bytes).and_then(|b| parse_csv_strict(&b)) {
                    Ok(table) => {
                        debug!(path = %path.display(), rows = table.len(), "cache hit");
                        return Ok(table);
                    }
                    Err(e) => warn!(path = %path.display(), error = %e, "ignoring damaged cache file"),
                }
            }
        }

        info!(dataset = dataset.name(), %season, "downloading");
        let bytes = fetch_bytes(&self.client, &self.config, dataset, season).await?;

        if let Some(path) = cache_path.as_deref() {
            if let Err(e) = write_bytes(path, &bytes) {
                warn!(path = %path.display(), error = %e, "failed to write cache file");
            }
        }

        parse_csv(&decompress(bytes)?)
    }

    /// Fetch one file per season, one after another, and stack them.
    async fn load_seasons(&self, dataset: Dataset, years: &[Season]) -> Result<Table> {
        let mut tables = Vec::with_capacity(years.len());
        for season in years {
            tables.push(self.load(dataset, *season).await?);
        }
        Ok(Table::concat(tables))
    }
}

impl StatsSource for NflverseSource {
    fn name(&self) -> &'static str {
        "nflverse"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn weekly(&self, years: &[Season]) -> Result<Table> {
        self.load_seasons(Dataset::Weekly, years).await
    }

    async fn play_by_play(&self, years: &[Season]) -> Result<Table> {
        self.load_seasons(Dataset::PlayByPlay, years).await
    }

    async fn win_totals(&self, years: &[Season]) -> Result<Table> {
        // One file covers every season; the season argument only picks the cache policy.
        let table = self.load(Dataset::WinTotals, Season::current()).await?;
        Ok(restrict_to_seasons(table, years))
    }

    async fn rosters(&self, years: &[Season]) -> Result<Table> {
        let mut table = self.load_seasons(Dataset::Rosters, years).await?;
        add_roster_age(&mut table);
        Ok(table)
    }
}

/// Serves prebuilt tables from memory, narrowed by their `season` column.
///
/// Useful for embedding callers that already hold the data, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub weekly: Table,
    pub play_by_play: Table,
    pub win_totals: Table,
    pub rosters: Table,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weekly(mut self, table: Table) -> Self {
        self.weekly = table;
        self
    }

    pub fn with_play_by_play(mut self, table: Table) -> Self {
        self.play_by_play = table;
        self
    }

    pub fn with_win_totals(mut self, table: Table) -> Self {
        self.win_totals = table;
        self
    }

    pub fn with_rosters(mut self, table: Table) -> Self {
        self.rosters = table;
        self
    }
}

impl StatsSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn weekly(&self, years: &[Season]) -> Result<Table> {
        Ok(restrict_to_seasons(self.weekly.clone(), years))
    }

    async fn play_by_play(&self, years: &[Season]) -> Result<Table> {
        Ok(restrict_to_seasons(self.play_by_play.clone(), years))
    }

    async fn win_totals(&self, years: &[Season]) -> Result<Table> {
        Ok(restrict_to_seasons(self.win_totals.clone(), years))
    }

    async fn rosters(&self, years: &[Season]) -> Result<Table> {
        let mut table = restrict_to_seasons(self.rosters.clone(), years);
        add_roster_age(&mut table);
        Ok(table)
    }
}
