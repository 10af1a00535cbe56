//! HTTP access to nflverse release assets.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client, StatusCode,
};
use chrono::{NaiveDate, Utc};
use std::time::Duration;
use tracing::debug;

use crate::core::cache::CURRENT_SEASON_MAX_AGE;
use crate::nflverse::config::SourceConfig;
use crate::{BridgeError, Result, Season, NFLDATA_URL_ENV_VAR, RELEASE_URL_ENV_VAR};

/// The downloadable nflverse files behind the fetch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Weekly,
    PlayByPlay,
    Rosters,
    WinTotals,
}

impl Dataset {
    /// Release tag, also used as the cache sub-directory.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Weekly => "player_stats",
            Dataset::PlayByPlay => "pbp",
            Dataset::Rosters => "rosters",
            Dataset::WinTotals => "win_totals",
        }
    }

    pub fn file_name(&self, season: Season) -> String {
        match self {
            Dataset::Weekly => format!("player_stats_{}.csv", season),
            Dataset::PlayByPlay => format!("play_by_play_{}.csv.gz", season),
            Dataset::Rosters => format!("roster_{}.csv", season),
            Dataset::WinTotals => "win_totals.csv".to_string(),
        }
    }

    pub fn url(&self, config: &SourceConfig, season: Season) -> String {
        match self {
            Dataset::WinTotals => format!(
                "{}/{}",
                config.nfldata_url.trim_end_matches('/'),
                self.file_name(season)
            ),
            _ => format!(
                "{}/{}/{}",
                config.release_url.trim_end_matches('/'),
                self.name(),
                self.file_name(season)
            ),
        }
    }

    /// Environment variable that relocates this dataset's host.
    pub fn env_var(&self) -> &'static str {
        match self {
            Dataset::WinTotals => NFLDATA_URL_ENV_VAR,
            _ => RELEASE_URL_ENV_VAR,
        }
    }

    /// Cache lifetime as of today.
    pub fn max_age(&self, season: Season) -> Option<Duration> {
        self.max_age_on(season, Utc::now().date_naive())
    }

    /// Win totals and seasons still being played (playoffs run into
    /// February of the next year) are re-published; closed seasons are frozen.
    pub fn max_age_on(&self, season: Season, today: NaiveDate) -> Option<Duration> {
        match self {
            Dataset::WinTotals => Some(CURRENT_SEASON_MAX_AGE),
            _ if season.is_final_on(today) => None,
            _ => Some(CURRENT_SEASON_MAX_AGE),
        }
    }
}

/// Build the shared HTTP client.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("nfl-data-bridge/", env!("CARGO_PKG_VERSION"))),
    );

    Ok(Client::builder()
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(30))
        .build()?)
}

/// Download one dataset file.
///
/// A 404 becomes [`BridgeError::DatasetNotFound`]; connection failures become
/// [`BridgeError::SourceUnavailable`]; other failures propagate unchanged.
pub async fn fetch_bytes(
    client: &Client,
    config: &SourceConfig,
    dataset: Dataset,
    season: Season,
) -> Result<Vec<u8>> {
    let url = dataset.url(config, season);
    debug!(%url, "requesting dataset");

    let res = client.get(&url).send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            BridgeError::SourceUnavailable {
                url: url.clone(),
                message: e.to_string(),
                env_var: dataset.env_var(),
            }
        } else {
            BridgeError::Http(e)
        }
    })?;

    if res.status() == StatusCode::NOT_FOUND && dataset != Dataset::WinTotals {
        return Err(BridgeError::DatasetNotFound {
            dataset: dataset.name(),
            season: season.as_u16(),
        });
    }

    let bytes = res.error_for_status()?.bytes().await?;
    debug!(%url, bytes = bytes.len(), "downloaded dataset");
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SourceConfig {
        SourceConfig {
            release_url: "https://example.test/releases/".to_string(),
            nfldata_url: "https://example.test/nfldata".to_string(),
            cache_dir: None,
            refresh: false,
        }
    }

    #[test]
    fn test_dataset_urls() {
        let season = Season::new(2023);
        assert_eq!(
            Dataset::Weekly.url(&config(), season),
            "https://example.test/releases/player_stats/player_stats_2023.csv"
        );
        assert_eq!(
            Dataset::PlayByPlay.url(&config(), season),
            "https://example.test/releases/pbp/play_by_play_2023.csv.gz"
        );
        assert_eq!(
            Dataset::Rosters.url(&config(), season),
            "https://example.test/releases/rosters/roster_2023.csv"
        );
        assert_eq!(
            Dataset::WinTotals.url(&config(), season),
            "https://example.test/nfldata/win_totals.csv"
        );
    }

    #[test]
    fn test_max_age_rules() {
        assert_eq!(Dataset::Weekly.max_age(Season::new(2012)), None);
        assert_eq!(
            Dataset::Weekly.max_age(Season::current()),
            Some(CURRENT_SEASON_MAX_AGE)
        );
        assert_eq!(
            Dataset::WinTotals.max_age(Season::new(2012)),
            Some(CURRENT_SEASON_MAX_AGE)
        );
    }

    #[test]
    fn test_last_season_stays_fresh_through_playoffs() {
        let on = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let last = Season::new(2023);

        assert_eq!(
            Dataset::Weekly.max_age_on(last, on(2024, 1, 28)),
            Some(CURRENT_SEASON_MAX_AGE)
        );
        assert_eq!(
            Dataset::PlayByPlay.max_age_on(last, on(2024, 2, 12)),
            Some(CURRENT_SEASON_MAX_AGE)
        );
        assert_eq!(Dataset::PlayByPlay.max_age_on(last, on(2024, 3, 1)), None);
        assert_eq!(Dataset::Rosters.max_age_on(Season::new(2022), on(2024, 1, 28)), None);
    }

    #[test]
    fn test_env_var_per_dataset() {
        assert_eq!(Dataset::WinTotals.env_var(), NFLDATA_URL_ENV_VAR);
        assert_eq!(Dataset::Rosters.env_var(), RELEASE_URL_ENV_VAR);
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }
}
