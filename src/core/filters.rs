//! Post-fetch row filtering by week, team and stat type.
//!
//! nflverse tables do not share a schema, so every filter first checks which
//! columns are present:
//!
//! - **week**: rows whose `week` equals the requested week (skipped when the column is absent)
//! - **team**: rows where any team-like column matches the upper-cased code
//! - **stat_type**: exact match on a `stat_type` column, otherwise a
//!   position-group filter on `position_group`

use crate::cli::types::position::{normalize_stat_type, position_groups_for, PositionGroup};
use crate::core::table::{cell_equals_int, cell_text, Table};
use crate::{Result, Week};
use tracing::debug;

/// Filters applied to a fetched table. All fields are optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowFilter<'a> {
    pub week: Option<Week>,
    pub team: Option<&'a str>,
    pub stat_type: Option<&'a str>,
}

impl<'a> RowFilter<'a> {
    pub fn apply(&self, table: Table) -> Result<Table> {
        filter_table(table, self.week, self.team, self.stat_type)
    }
}

/// Narrow `table` by week, then team, then stat type.
pub fn filter_table(
    mut table: Table,
    week: Option<Week>,
    team: Option<&str>,
    stat_type: Option<&str>,
) -> Result<Table> {
    let before = table.len();

    if let Some(week) = week {
        if let Some(idx) = table.column_index("week") {
            let target = i64::from(week.as_u16());
            table.retain(|row| row.at(idx).is_some_and(|v| cell_equals_int(v, target)));
        }
    }

    if let Some(team) = team {
        let team = team.to_uppercase();
        let indices: Vec<usize> = team_columns(&table)
            .iter()
            .filter_map(|column| table.column_index(column))
            .collect();
        table.retain(|row| {
            indices.iter().any(|idx| {
                row.at(*idx)
                    .and_then(cell_text)
                    .is_some_and(|text| text.to_uppercase() == team)
            })
        });
    }

    let table = apply_stat_type_filter(table, stat_type)?;
    debug!(before, after = table.len(), "filtered rows");
    Ok(table)
}

/// Columns treated as team identifiers: anything ending in `_team`, plus
/// `team` and `recent_team`. Falls back to `team` when none exist, which
/// then matches nothing.
pub fn team_columns(table: &Table) -> Vec<String> {
    let detected: Vec<String> = table
        .columns()
        .iter()
        .filter(|c| c.ends_with("_team") || *c == "team" || *c == "recent_team")
        .cloned()
        .collect();

    if detected.is_empty() {
        vec!["team".to_string()]
    } else {
        detected
    }
}

/// Narrow by `stat_type`. Blank input is a no-op, as is a table with neither
/// a `stat_type` nor a `position_group` column.
pub fn apply_stat_type_filter(mut table: Table, stat_type: Option<&str>) -> Result<Table> {
    let Some(raw) = stat_type else {
        return Ok(table);
    };
    let Some(normalized) = normalize_stat_type(raw) else {
        return Ok(table);
    };

    if let Some(idx) = table.column_index("stat_type") {
        table.retain(|row| {
            row.at(idx)
                .and_then(cell_text)
                .is_some_and(|text| text.to_lowercase() == normalized)
        });
        return Ok(table);
    }

    let Some(idx) = table.column_index("position_group") else {
        return Ok(table);
    };

    let groups = position_groups_for(&normalized, raw)?;
    if groups.is_empty() {
        return Ok(table);
    }

    table.retain(|row| {
        row.at(idx)
            .and_then(cell_text)
            .and_then(|text| text.parse::<PositionGroup>().ok())
            .is_some_and(|group| groups.contains(&group))
    });
    Ok(table)
}
