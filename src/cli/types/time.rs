//! Time-related types for NFL seasons, weeks and season types.

use crate::cli::types::params::IntLike;
use crate::cli::types::position::resolve_stat_type_alias;
use crate::error::{BridgeError, Result};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The current calendar year in UTC.
    pub fn current() -> Self {
        Self(Utc::now().year() as u16)
    }

    /// Whether every game of this season, playoffs included, was played
    /// before `today`. Seasons close on March 1st of the following year.
    pub fn is_final_on(&self, today: NaiveDate) -> bool {
        NaiveDate::from_ymd_opt(i32::from(self.0) + 1, SEASON_CLOSE_MONTH, 1)
            .is_some_and(|close| today >= close)
    }
}

/// Month of `season + 1` by which the Super Bowl has been played.
const SEASON_CLOSE_MONTH: u32 = 3;

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&IntLike> for Season {
    type Error = BridgeError;

    fn try_from(value: &IntLike) -> Result<Self> {
        value
            .to_i64()
            .filter(|year| *year > 0)
            .and_then(|year| u16::try_from(year).ok())
            .map(Season)
            .ok_or_else(|| BridgeError::InvalidSeason {
                value: value.to_string(),
            })
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    /// First week of the regular season.
    pub const FIRST: u16 = 1;
    /// Last week including playoffs.
    pub const LAST: u16 = 23;

    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Week> for Value {
    fn from(week: Week) -> Self {
        Value::from(week.0)
    }
}

impl TryFrom<&IntLike> for Week {
    type Error = BridgeError;

    fn try_from(value: &IntLike) -> Result<Self> {
        value
            .to_i64()
            .filter(|w| (i64::from(Week::FIRST)..=i64::from(Week::LAST)).contains(w))
            .map(|w| Week(w as u16))
            .ok_or_else(|| BridgeError::InvalidWeek {
                value: value.to_string(),
            })
    }
}

/// Which part of the NFL calendar a seasonal query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
    #[serde(rename = "REG")]
    Regular,
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "POST")]
    Post,
}

impl SeasonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Regular => "REG",
            SeasonType::All => "ALL",
            SeasonType::Post => "POST",
        }
    }
}

impl From<SeasonType> for Value {
    fn from(season_type: SeasonType) -> Self {
        Value::from(season_type.as_str())
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "REG" => Ok(SeasonType::Regular),
            "ALL" => Ok(SeasonType::All),
            "POST" => Ok(SeasonType::Post),
            _ => Err(BridgeError::InvalidSeasonType {
                value: s.to_string(),
            }),
        }
    }
}

/// Spellings accepted for season types. Position-group words map to the
/// regular season so a seasonal query can reuse a weekly `stat_type`.
pub const SEASON_TYPE_ALIASES: &[(&str, SeasonType)] = &[
    ("reg", SeasonType::Regular),
    ("regular", SeasonType::Regular),
    ("regular_season", SeasonType::Regular),
    ("regular-season", SeasonType::Regular),
    ("offense", SeasonType::Regular),
    ("offence", SeasonType::Regular),
    ("defense", SeasonType::Regular),
    ("defence", SeasonType::Regular),
    ("team", SeasonType::Regular),
    ("kicking", SeasonType::Regular),
    ("all", SeasonType::All),
    ("full", SeasonType::All),
    ("post", SeasonType::Post),
    ("postseason", SeasonType::Post),
    ("playoffs", SeasonType::Post),
];

fn lookup_season_type_alias(key: &str) -> Option<SeasonType> {
    SEASON_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, season_type)| *season_type)
}

/// Turn the `season`/`years` pair into a sorted, de-duplicated season list.
///
/// `years` wins over `season`; with neither, the current UTC year is used.
/// An explicitly empty `years` list is an error.
pub fn normalize_years(season: Option<&IntLike>, years: Option<&[IntLike]>) -> Result<Vec<Season>> {
    let normalized: Vec<Season> = match (years, season) {
        (Some(years), _) => years
            .iter()
            .map(Season::try_from)
            .collect::<Result<BTreeSet<_>>>()?
            .into_iter()
            .collect(),
        (None, Some(season)) => vec![Season::try_from(season)?],
        (None, None) => vec![Season::current()],
    };

    if normalized.is_empty() {
        return Err(BridgeError::EmptySeasons);
    }
    Ok(normalized)
}

/// `None` and `""` mean "no week filter"; anything else must be a week in 1..=23.
pub fn validate_week(week: Option<&IntLike>) -> Result<Option<Week>> {
    match week {
        None => Ok(None),
        Some(w) if w.is_empty_text() => Ok(None),
        Some(w) => Week::try_from(w).map(Some),
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Pick the season type for a seasonal query.
///
/// A non-blank `season_type` wins; otherwise `stat_type` is tried as the
/// candidate, and with neither the regular season is assumed.
pub fn resolve_season_type(stat_type: Option<&str>, season_type: Option<&str>) -> Result<SeasonType> {
    let candidate = if !is_blank(season_type) {
        season_type
    } else {
        stat_type
    };

    let Some(candidate) = candidate.filter(|c| !c.trim().is_empty()) else {
        return Ok(SeasonType::Regular);
    };

    let normalized = candidate.trim().to_lowercase().replace([' ', '-'], "_");
    let normalized = resolve_stat_type_alias(&normalized);

    match lookup_season_type_alias(normalized) {
        Some(season_type) => Ok(season_type),
        None => normalized
            .to_uppercase()
            .parse()
            .map_err(|_| BridgeError::InvalidSeasonType {
                value: candidate.to_string(),
            }),
    }
}
