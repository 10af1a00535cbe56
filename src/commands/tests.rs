//! Unit tests for operation dispatch

use super::*;
use crate::core::Table;
use crate::nflverse::MemorySource;
use serde_json::{json, Value};

fn weekly_table() -> Table {
    Table::from_rows(
        ["player_id", "player_name", "recent_team", "position_group", "season", "week", "season_type", "targets"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        vec![
            vec![json!("00-1"), json!("A. Passer"), json!("KC"), json!("QB"), json!(2023), json!(1), json!("REG"), json!(0)],
            vec![json!("00-2"), json!("B. Catcher"), json!("KC"), json!("WR"), json!(2023), json!(1), json!("REG"), json!(9)],
            vec![json!("00-3"), json!("C. Rusher"), json!("BUF"), json!("DL"), json!(2023), json!(2), json!("REG"), json!(0)],
            vec![json!("00-2"), json!("B. Catcher"), json!("KC"), json!("WR"), json!(2022), json!(3), json!("REG"), json!(4)],
        ],
    )
}

fn source() -> MemorySource {
    MemorySource::new().with_weekly(weekly_table())
}

async fn run(operation: Operation, params: &str) -> Result<Value> {
    let out = run_operation(&source(), operation, params).await?;
    Ok(serde_json::from_str(&out).unwrap())
}

#[tokio::test]
async fn test_weekly_defaults_to_offense() {
    let out = run(Operation::GetWeeklyData, r#"{"season": 2023}"#).await.unwrap();
    assert_eq!(out["data"].as_array().unwrap().len(), 2);
    assert_eq!(out["meta"]["source"], json!("import_weekly_data"));
    assert_eq!(out["meta"]["seasons"], json!([2023]));
    assert_eq!(out["meta"]["filters"], json!({"week": null, "stat_type": "offense"}));
}

#[tokio::test]
async fn test_weekly_week_filter_and_lowercased_meta() {
    let out = run(
        Operation::GetWeeklyData,
        r#"{"years": [2023, 2022, 2023], "week": "1", "stat_type": "OFFENSE"}"#,
    )
    .await
    .unwrap();
    assert_eq!(out["data"].as_array().unwrap().len(), 2);
    assert_eq!(out["meta"]["seasons"], json!([2022, 2023]));
    assert_eq!(out["meta"]["filters"]["week"], json!(1));
    assert_eq!(out["meta"]["filters"]["stat_type"], json!("offense"));
}

#[tokio::test]
async fn test_weekly_null_stat_type_disables_filter() {
    let out = run(Operation::GetWeeklyData, r#"{"season": 2023, "stat_type": null}"#)
        .await
        .unwrap();
    assert_eq!(out["data"].as_array().unwrap().len(), 3);
    assert_eq!(out["meta"]["filters"]["stat_type"], Value::Null);
}

#[tokio::test]
async fn test_invalid_week_rejected_before_fetch() {
    let err = run(Operation::GetWeeklyData, r#"{"season": 2023, "week": 24}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::InvalidWeek { .. }));
}

#[tokio::test]
async fn test_unknown_parameter_rejected() {
    let err = run(Operation::GetRosters, r#"{"season": 2023, "week": 1}"#)
        .await
        .unwrap_err();
    match err {
        BridgeError::InvalidParams { operation, .. } => assert_eq!(operation, "get_rosters"),
        other => panic!("Expected InvalidParams, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_params_rejected() {
    let err = run(Operation::GetWinTotals, "{season: 2023").await.unwrap_err();
    assert!(matches!(err, BridgeError::InvalidParams { .. }));
}

#[tokio::test]
async fn test_empty_years_rejected() {
    let err = run(Operation::GetWinTotals, r#"{"years": []}"#).await.unwrap_err();
    assert!(matches!(err, BridgeError::EmptySeasons));
}

#[tokio::test]
async fn test_seasonal_meta_and_rows() {
    let out = run(
        Operation::GetSeasonalData,
        r#"{"season": 2023, "stat_type": "Regular"}"#,
    )
    .await
    .unwrap();
    assert_eq!(out["meta"]["source"], json!("import_seasonal_data"));
    assert_eq!(
        out["meta"]["filters"],
        json!({"stat_type": "Regular", "season_type": "REG"})
    );
    assert_eq!(out["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_seasonal_rejects_bogus_season_type() {
    let err = run(Operation::GetSeasonalData, r#"{"season_type": "bogus"}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::InvalidSeasonType { .. }));
}

#[tokio::test]
async fn test_empty_result_keeps_meta() {
    let out = run(Operation::GetPlayByPlay, r#"{"season": 2023, "team": "kc"}"#)
        .await
        .unwrap();
    assert_eq!(out["data"], json!([]));
    assert_eq!(out["meta"]["filters"], json!({"week": null, "team": "kc"}));
}

#[tokio::test]
async fn test_check_module_payload() {
    let out = run(Operation::CheckModule, "{}").await.unwrap();
    assert_eq!(out["module"], json!("memory"));
    assert_eq!(out["version"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(
        out["functions"],
        json!([
            "get_weekly_data",
            "get_play_by_play",
            "get_seasonal_data",
            "get_win_totals",
            "get_rosters",
            "check_module"
        ])
    );
    let stamp = out["datetime_utc"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
}

#[tokio::test]
async fn test_check_module_rejects_params() {
    assert!(run(Operation::CheckModule, r#"{"season": 2023}"#).await.is_err());
}
