//! The operations exposed on the process interface.

use std::fmt;

/// One variant per public operation. The CLI spells them in snake_case,
/// matching the names clients already call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Operation {
    /// Player-week statistics
    GetWeeklyData,
    /// Play-by-play rows
    GetPlayByPlay,
    /// Player-season totals and share metrics
    GetSeasonalData,
    /// Preseason win-total lines
    GetWinTotals,
    /// Season rosters
    GetRosters,
    /// Version, available operations and current time
    CheckModule,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::GetWeeklyData,
        Operation::GetPlayByPlay,
        Operation::GetSeasonalData,
        Operation::GetWinTotals,
        Operation::GetRosters,
        Operation::CheckModule,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetWeeklyData => "get_weekly_data",
            Operation::GetPlayByPlay => "get_play_by_play",
            Operation::GetSeasonalData => "get_seasonal_data",
            Operation::GetWinTotals => "get_win_totals",
            Operation::GetRosters => "get_rosters",
            Operation::CheckModule => "check_module",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_cli_names_match_display_names() {
        for op in Operation::ALL {
            let parsed = Operation::from_str(op.name(), false).unwrap();
            assert_eq!(parsed, op);
        }
    }

    #[test]
    fn test_unknown_operation_rejected() {
        assert!(Operation::from_str("get_schedules", false).is_err());
        assert!(Operation::from_str("GetWeeklyData", false).is_err());
    }
}
