//! Derived tables: season totals from weekly rows, roster ages.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde_json::{Number, Value};

use crate::core::table::{cell_text, RowRef, Table};
use crate::SeasonType;

#[cfg(test)]
mod tests;

/// Weekly columns summed per team-game, and the names the totals go by.
const TEAM_GAME_TOTALS: &[(&str, &str)] = &[
    ("attempts", "atts"),
    ("completions", "comps"),
    ("passing_yards", "p_yds"),
    ("passing_tds", "p_tds"),
    ("passing_air_yards", "p_ayds"),
    ("passing_yards_after_catch", "p_yac"),
    ("passing_first_downs", "p_fds"),
    ("fantasy_points_ppr", "ppr_pts"),
];

/// Share metrics appended to every seasonal row, in output order.
pub const SHARE_COLUMNS: &[&str] = &[
    "tgt_sh", "ay_sh", "yac_sh", "wopr", "ry_sh", "rtd_sh", "rfd_sh", "rtdfd_sh", "dom", "w8dom",
    "yptmpa", "ppr_sh",
];

const GROUP_KEYS: &[&str] = &["player_id", "season", "season_type"];
const EXCLUDED_FROM_SUMS: &[&str] = &["week", "recent_team"];

type TeamGameKey = (String, String, String);
type PlayerSeasonKey = (String, i64, Option<String>);

fn number(row: RowRef<'_>, column: &str) -> f64 {
    row.get(column).and_then(Value::as_f64).unwrap_or(0.0)
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator != 0.0).then(|| numerator / denominator)
}

fn float_value(value: Option<f64>) -> Value {
    value
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// A column is summable if it holds at least one number and nothing but numbers or nulls.
#[derive(Debug, Clone)]
struct SumColumn {
    name: String,
    integer: bool,
}

fn summable_columns(weekly: &Table, rows: &[RowRef<'_>]) -> Vec<SumColumn> {
    weekly
        .columns()
        .iter()
        .filter(|c| !GROUP_KEYS.contains(&c.as_str()) && !EXCLUDED_FROM_SUMS.contains(&c.as_str()))
        .filter_map(|name| {
            let mut seen_number = false;
            let mut integer = true;
            for row in rows {
                match row.get(name) {
                    Some(Value::Number(n)) => {
                        seen_number = true;
                        integer &= n.is_i64() || n.is_u64();
                    }
                    Some(Value::Null) | None => {}
                    Some(_) => return None,
                }
            }
            seen_number.then(|| SumColumn {
                name: name.clone(),
                integer,
            })
        })
        .collect()
}

#[derive(Debug)]
struct PlayerSeason {
    player_id: Value,
    season: Value,
    season_type: Option<Value>,
    sums: Vec<f64>,
    team: [f64; TEAM_GAME_TOTALS.len()],
    games: u64,
}

/// Season totals per player, derived from weekly rows.
///
/// Rows are narrowed to `season_type` (unless `ALL`, or the column is
/// absent), grouped by `player_id`/`season`/`season_type` in sorted key
/// order, numeric columns are summed, `games` counts weekly rows, and
/// receiving share metrics are computed against the team-game totals of the
/// games each player appeared in. Shares with a zero denominator are null.
pub fn seasonal_from_weekly(weekly: &Table, season_type: SeasonType) -> Table {
    let has_season_type = weekly.has_column("season_type");
    let code = season_type.as_str();

    let rows: Vec<RowRef<'_>> = weekly
        .rows()
        .filter(|row| {
            season_type == SeasonType::All
                || match row.get("season_type") {
                    None => true,
                    Some(v) => cell_text(v).as_deref() == Some(code),
                }
        })
        .collect();

    let sum_columns = summable_columns(weekly, &rows);

    let mut team_games: HashMap<TeamGameKey, [f64; TEAM_GAME_TOTALS.len()]> = HashMap::new();
    for row in &rows {
        if let Some(key) = team_game_key(*row) {
            let totals = team_games.entry(key).or_insert([0.0; TEAM_GAME_TOTALS.len()]);
            for (slot, (column, _)) in totals.iter_mut().zip(TEAM_GAME_TOTALS) {
                *slot += number(*row, column);
            }
        }
    }

    let mut groups: BTreeMap<PlayerSeasonKey, PlayerSeason> = BTreeMap::new();
    for row in &rows {
        let Some(player_id) = row.get("player_id").and_then(cell_text) else {
            continue;
        };
        let Some(season) = row.get("season").and_then(Value::as_i64) else {
            continue;
        };
        let season_type_value = row.get("season_type").cloned();
        let season_type_key = match &season_type_value {
            Some(v) => match cell_text(v) {
                Some(text) => Some(text),
                None => continue,
            },
            None => None,
        };

        let entry = groups
            .entry((player_id, season, season_type_key))
            .or_insert_with(|| PlayerSeason {
                player_id: row.get("player_id").cloned().unwrap_or(Value::Null),
                season: row.get("season").cloned().unwrap_or(Value::Null),
                season_type: season_type_value,
                sums: vec![0.0; sum_columns.len()],
                team: [0.0; TEAM_GAME_TOTALS.len()],
                games: 0,
            });

        entry.games += 1;
        for (sum, column) in entry.sums.iter_mut().zip(&sum_columns) {
            *sum += number(*row, &column.name);
        }
        if let Some(totals) = team_game_key(*row).and_then(|key| team_games.get(&key)) {
            for (slot, total) in entry.team.iter_mut().zip(totals) {
                *slot += total;
            }
        }
    }

    let mut columns: Vec<String> = GROUP_KEYS
        .iter()
        .filter(|k| **k != "season_type" || has_season_type)
        .map(|k| k.to_string())
        .collect();
    columns.extend(sum_columns.iter().map(|c| c.name.clone()));
    columns.extend(SHARE_COLUMNS.iter().map(|c| c.to_string()));
    columns.push("games".to_string());

    let mut out = Table::new(columns);
    for group in groups.into_values() {
        let mut row = vec![group.player_id, group.season];
        if has_season_type {
            row.push(group.season_type.unwrap_or(Value::Null));
        }

        for (sum, column) in group.sums.iter().zip(&sum_columns) {
            row.push(if column.integer {
                Value::Number((*sum as i64).into())
            } else {
                float_value(Some(*sum))
            });
        }

        let stat = |name: &str| {
            sum_columns
                .iter()
                .position(|c| c.name == name)
                .map_or(0.0, |idx| group.sums[idx])
        };
        let team = |name: &str| {
            TEAM_GAME_TOTALS
                .iter()
                .position(|(_, alias)| *alias == name)
                .map_or(0.0, |idx| group.team[idx])
        };
        row.extend(share_metrics(&stat, &team).into_iter().map(float_value));
        row.push(Value::Number(group.games.into()));

        out.push_row(row);
    }
    out
}

fn team_game_key(row: RowRef<'_>) -> Option<TeamGameKey> {
    Some((
        row.get("recent_team").and_then(cell_text)?,
        row.get("season").and_then(cell_text)?,
        row.get("week").and_then(cell_text)?,
    ))
}

/// Values for [`SHARE_COLUMNS`], in the same order.
fn share_metrics(stat: &dyn Fn(&str) -> f64, team: &dyn Fn(&str) -> f64) -> Vec<Option<f64>> {
    let tgt_sh = ratio(stat("targets"), team("atts"));
    let ay_sh = ratio(stat("receiving_air_yards"), team("p_ayds"));
    let yac_sh = ratio(stat("receiving_yards_after_catch"), team("p_yac"));
    let wopr = tgt_sh.zip(ay_sh).map(|(t, a)| 1.5 * t + 0.8 * a);
    let ry_sh = ratio(stat("receiving_yards"), team("p_yds"));
    let rtd_sh = ratio(stat("receiving_tds"), team("p_tds"));
    let rfd_sh = ratio(stat("receiving_first_downs"), team("p_fds"));
    let rtdfd_sh = ratio(
        stat("receiving_tds") + stat("receiving_first_downs"),
        team("p_tds") + team("p_fds"),
    );
    let dom = ry_sh.zip(rtd_sh).map(|(y, t)| (y + t) / 2.0);
    let w8dom = ry_sh.zip(rtd_sh).map(|(y, t)| 0.8 * y + 0.2 * t);
    let yptmpa = ratio(stat("receiving_yards"), team("atts"));
    let ppr_sh = ratio(stat("fantasy_points_ppr"), team("ppr_pts"));

    vec![
        tgt_sh, ay_sh, yac_sh, wopr, ry_sh, rtd_sh, rfd_sh, rtdfd_sh, dom, w8dom, yptmpa, ppr_sh,
    ]
}

/// Whole years between `birth_date` and September 1st of `season`.
pub fn age_at_season_start(birth_date: &str, season: i64) -> Option<u32> {
    let date_part = birth_date.get(..10).unwrap_or(birth_date);
    let born = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    let kickoff = NaiveDate::from_ymd_opt(i32::try_from(season).ok()?, 9, 1)?;
    kickoff.years_since(born)
}

/// Add an `age` column to a roster table that carries `birth_date`.
pub fn add_roster_age(rosters: &mut Table) {
    if !rosters.has_column("birth_date") {
        return;
    }
    rosters.add_column("age", |row| {
        let birth = row.get("birth_date").and_then(Value::as_str);
        let season = row.get("season").and_then(Value::as_i64);
        match (birth, season) {
            (Some(birth), Some(season)) => age_at_season_start(birth, season)
                .map(|age| Value::Number(age.into()))
                .unwrap_or(Value::Null),
            _ => Value::Null,
        }
    });
}
