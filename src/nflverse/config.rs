//! Where the nflverse provider downloads from and caches to.

use std::path::PathBuf;

use crate::core::cache::default_cache_dir;
use crate::{CACHE_DIR_ENV_VAR, NFLDATA_URL_ENV_VAR, NO_CACHE_ENV_VAR, RELEASE_URL_ENV_VAR};

/// GitHub release download root for nflverse-data assets.
pub const DEFAULT_RELEASE_URL: &str = "https://github.com/nflverse/nflverse-data/releases/download";

/// Raw file root of the nfldata repository (win totals live here).
pub const DEFAULT_NFLDATA_URL: &str = "https://raw.githubusercontent.com/nflverse/nfldata/master/data";

/// Provider settings. `cache_dir == None` disables the disk cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub release_url: String,
    pub nfldata_url: String,
    pub cache_dir: Option<PathBuf>,
    /// Ignore cached files (they are still rewritten after download).
    pub refresh: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            release_url: DEFAULT_RELEASE_URL.to_string(),
            nfldata_url: DEFAULT_NFLDATA_URL.to_string(),
            cache_dir: Some(default_cache_dir()),
            refresh: false,
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl SourceConfig {
    /// Defaults overridden by `NFL_DATA_RELEASE_URL`, `NFL_DATA_NFLDATA_URL`,
    /// `NFL_DATA_CACHE_DIR` and `NFL_DATA_NO_CACHE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_env(RELEASE_URL_ENV_VAR) {
            config.release_url = url;
        }
        if let Some(url) = non_empty_env(NFLDATA_URL_ENV_VAR) {
            config.nfldata_url = url;
        }
        if let Some(dir) = non_empty_env(CACHE_DIR_ENV_VAR) {
            config.cache_dir = Some(PathBuf::from(dir));
        }
        if non_empty_env(NO_CACHE_ENV_VAR).is_some() {
            config.cache_dir = None;
        }
        config
    }

    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache_dir = None;
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Point both roots at one base URL (mirrors, test servers).
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.release_url = base.to_string();
        self.nfldata_url = base.to_string();
        self
    }
}
