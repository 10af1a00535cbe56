//! Position groups and the `stat_type` vocabulary that selects them.

use crate::error::BridgeError;
use std::fmt;
use std::str::FromStr;

/// Coarse player-role classification used by nflverse's `position_group` column.
///
/// # Examples
///
/// ```rust
/// use nfl_data_bridge::PositionGroup;
///
/// let group: PositionGroup = "ol".parse().unwrap();
/// assert_eq!(group, PositionGroup::OL);
/// assert_eq!(PositionGroup::SPEC.to_string(), "SPEC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    DB,
    SPEC,
}

impl PositionGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionGroup::QB => "QB",
            PositionGroup::RB => "RB",
            PositionGroup::WR => "WR",
            PositionGroup::TE => "TE",
            PositionGroup::OL => "OL",
            PositionGroup::DL => "DL",
            PositionGroup::LB => "LB",
            PositionGroup::DB => "DB",
            PositionGroup::SPEC => "SPEC",
        }
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionGroup {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(PositionGroup::QB),
            "RB" => Ok(PositionGroup::RB),
            "WR" => Ok(PositionGroup::WR),
            "TE" => Ok(PositionGroup::TE),
            "OL" => Ok(PositionGroup::OL),
            "DL" => Ok(PositionGroup::DL),
            "LB" => Ok(PositionGroup::LB),
            "DB" => Ok(PositionGroup::DB),
            "SPEC" => Ok(PositionGroup::SPEC),
            _ => Err(BridgeError::UnsupportedStatType {
                stat_type: s.to_string(),
                options: supported_stat_types(),
            }),
        }
    }
}

use PositionGroup::*;

/// `stat_type` → allowed position groups. An empty set means "no filtering".
pub const POSITION_GROUP_FILTERS: &[(&str, &[PositionGroup])] = &[
    ("offense", &[QB, RB, WR, TE, OL]),
    ("defense", &[DL, LB, DB]),
    ("kicking", &[SPEC]),
    ("special", &[SPEC]),
    ("special_teams", &[SPEC]),
    ("specialteams", &[SPEC]),
    ("team", &[]),
    ("all", &[]),
];

/// Alternative spellings folded onto a `POSITION_GROUP_FILTERS` key.
pub const STAT_TYPE_ALIASES: &[(&str, &str)] = &[
    ("offence", "offense"),
    ("defence", "defense"),
    ("specialteams", "special_teams"),
    ("specialteam", "special_teams"),
    ("special-teams", "special_teams"),
    ("special teams", "special_teams"),
    ("kicker", "kicking"),
    ("kick", "kicking"),
];

/// Map an already-normalised key through `STAT_TYPE_ALIASES`, or return it unchanged.
pub fn resolve_stat_type_alias(key: &str) -> &str {
    STAT_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key, |(_, canonical)| *canonical)
}

/// Lowercase, trim, hyphens to underscores, then alias. Blank input yields `None`.
pub fn normalize_stat_type(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.to_lowercase().replace('-', "_");
    Some(resolve_stat_type_alias(&normalized).to_string())
}

/// Sorted list of the keys accepted for position-group filtering.
pub fn supported_stat_types() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = POSITION_GROUP_FILTERS.iter().map(|(k, _)| *k).collect();
    keys.sort_unstable();
    keys
}

/// Allowed position groups for a normalised `stat_type`.
///
/// `Ok(&[])` means every group passes. `original` is only used for the error message.
pub fn position_groups_for(
    normalized: &str,
    original: &str,
) -> Result<&'static [PositionGroup], BridgeError> {
    POSITION_GROUP_FILTERS
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, groups)| *groups)
        .ok_or_else(|| BridgeError::UnsupportedStatType {
            stat_type: original.to_string(),
            options: supported_stat_types(),
        })
}
