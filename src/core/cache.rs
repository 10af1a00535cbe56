//! File system cache for downloaded nflverse assets.
//!
//! Each dataset file is stored verbatim under
//! `{cache_dir}/nfl-data-bridge/{dataset}/{file}`. Completed seasons never
//! change upstream, so only in-progress data carries a maximum age.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use tempfile::NamedTempFile;

/// How long in-progress data (current season, win totals) stays fresh.
pub const CURRENT_SEASON_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Default cache root: `~/.cache/nfl-data-bridge` (or the platform equivalent).
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nfl-data-bridge")
}

/// Path: {root}/{dataset}/{file}
pub fn dataset_cache_path(root: &Path, dataset: &str, file: &str) -> PathBuf {
    root.join(dataset).join(file)
}

/// Try to read a file into bytes
pub fn try_read_bytes(path: &Path) -> Option<Vec<u8>> {
    let mut f = fs::File::open(path).ok()?;
    let mut buf = Vec::new();

    f.read_to_end(&mut buf).ok()?;

    Some(buf)
}

/// Write bytes to file, creating parent directories.
///
/// The bytes go to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either the old file or the complete
/// new one. On failure the temporary file is removed.
pub fn write_bytes(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Whether a cached file may be used. `max_age == None` means it never expires.
pub fn is_fresh(path: &Path, max_age: Option<Duration>) -> bool {
    let Ok(meta) = fs::metadata(path) else {
        return false;
    };
    let Some(max_age) = max_age else {
        return true;
    };
    meta.modified()
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age <= max_age)
}

/// Read a cached file only if it exists and is fresh.
pub fn read_if_fresh(path: &Path, max_age: Option<Duration>) -> Option<Vec<u8>> {
    if is_fresh(path, max_age) {
        try_read_bytes(path)
    } else {
        None
    }
}
