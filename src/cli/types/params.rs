//! Parameter objects accepted by each operation's `--params` JSON.
//!
//! Every struct rejects keys it does not know about, so a misspelled filter
//! fails loudly instead of silently widening the query.

use serde::Deserialize;
use std::fmt;

/// An integer-ish JSON value: `2023`, `2023.0` or `"2023"`.
///
/// Floats are truncated toward zero and strings are trimmed before parsing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntLike {
    Int(i64),
    Float(f64),
    Text(String),
}

impl IntLike {
    /// Coerce to an integer, or `None` if the value is not numeric.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            IntLike::Int(n) => Some(*n),
            IntLike::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            IntLike::Float(_) => None,
            IntLike::Text(s) => s.trim().parse().ok(),
        }
    }

    /// True for the empty string, which callers treat as "not provided".
    pub fn is_empty_text(&self) -> bool {
        matches!(self, IntLike::Text(s) if s.is_empty())
    }
}

impl From<i64> for IntLike {
    fn from(n: i64) -> Self {
        IntLike::Int(n)
    }
}

impl From<&str> for IntLike {
    fn from(s: &str) -> Self {
        IntLike::Text(s.to_string())
    }
}

impl fmt::Display for IntLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntLike::Int(n) => write!(f, "{}", n),
            IntLike::Float(x) => write!(f, "{}", x),
            IntLike::Text(s) => write!(f, "{}", s),
        }
    }
}

fn default_weekly_stat_type() -> Option<String> {
    Some("offense".to_string())
}

/// Parameters for `get_weekly_data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeeklyParams {
    pub season: Option<IntLike>,
    pub years: Option<Vec<IntLike>>,
    pub week: Option<IntLike>,
    #[serde(default = "default_weekly_stat_type")]
    pub stat_type: Option<String>,
}

impl Default for WeeklyParams {
    fn default() -> Self {
        Self {
            season: None,
            years: None,
            week: None,
            stat_type: default_weekly_stat_type(),
        }
    }
}

/// Parameters for `get_play_by_play`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayByPlayParams {
    pub season: Option<IntLike>,
    pub years: Option<Vec<IntLike>>,
    pub week: Option<IntLike>,
    pub team: Option<String>,
}

/// Parameters for `get_seasonal_data`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonalParams {
    pub season: Option<IntLike>,
    pub years: Option<Vec<IntLike>>,
    pub stat_type: Option<String>,
    pub season_type: Option<String>,
}

/// Parameters for operations that only take seasons (`get_win_totals`, `get_rosters`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonsParams {
    pub season: Option<IntLike>,
    pub years: Option<Vec<IntLike>>,
}

/// `check_module` takes nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_like_accepts_numbers_and_strings() {
        let values: Vec<IntLike> = serde_json::from_str(r#"[2023, 2022.9, " 2021 ", "abc"]"#).unwrap();
        assert_eq!(values[0].to_i64(), Some(2023));
        assert_eq!(values[1].to_i64(), Some(2022));
        assert_eq!(values[2].to_i64(), Some(2021));
        assert_eq!(values[3].to_i64(), None);
        assert!(IntLike::from("").is_empty_text());
        assert!(!IntLike::from(" ").is_empty_text());
    }

    #[test]
    fn test_weekly_params_default_stat_type() {
        let params: WeeklyParams = serde_json::from_str(r#"{"season": 2023}"#).unwrap();
        assert_eq!(params.stat_type.as_deref(), Some("offense"));
        assert_eq!(params.season, Some(IntLike::Int(2023)));

        let explicit_null: WeeklyParams = serde_json::from_str(r#"{"stat_type": null}"#).unwrap();
        assert_eq!(explicit_null.stat_type, None);

        assert_eq!(WeeklyParams::default().stat_type.as_deref(), Some("offense"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(serde_json::from_str::<SeasonsParams>(r#"{"week": 3}"#).is_err());
        assert!(serde_json::from_str::<PlayByPlayParams>(r#"{"stat_type": "offense"}"#).is_err());
        assert!(serde_json::from_str::<NoParams>(r#"{"season": 2023}"#).is_err());
        assert!(serde_json::from_str::<NoParams>("{}").is_ok());
    }

    #[test]
    fn test_play_by_play_params() {
        let params: PlayByPlayParams =
            serde_json::from_str(r#"{"years": [2022, "2023"], "week": "", "team": "kc"}"#).unwrap();
        assert_eq!(params.years.as_ref().map(Vec::len), Some(2));
        assert!(params.week.as_ref().is_some_and(IntLike::is_empty_text));
        assert_eq!(params.team.as_deref(), Some("kc"));
    }
}
