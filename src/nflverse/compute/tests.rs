//! Unit tests for derived tables

use super::*;
use serde_json::{json, Map};

fn weekly_fixture() -> Table {
    let columns = [
        "player_id",
        "player_name",
        "recent_team",
        "season",
        "week",
        "season_type",
        "attempts",
        "passing_yards",
        "passing_tds",
        "targets",
        "receiving_yards",
        "receiving_tds",
        "fantasy_points_ppr",
    ];
    let rows = vec![
        // Week 1, KC: QB throws to one receiver
        vec![json!("QB1"), json!("Q. Back"), json!("KC"), json!(2023), json!(1), json!("REG"), json!(30), json!(300), json!(2), json!(0), json!(0), json!(0), json!(24.0)],
        vec![json!("WR1"), json!("W. Out"), json!("KC"), json!(2023), json!(1), json!("REG"), json!(0), json!(0), json!(0), json!(10), json!(150), json!(1), json!(27.5)],
        // Week 2, KC
        vec![json!("QB1"), json!("Q. Back"), json!("KC"), json!(2023), json!(2), json!("REG"), json!(20), json!(200), json!(2), json!(0), json!(0), json!(0), json!(16.0)],
        vec![json!("WR1"), json!("W. Out"), json!("KC"), json!(2023), json!(2), json!("REG"), json!(0), json!(0), json!(0), json!(5), json!(50), json!(1), json!(12.5)],
        // Playoff game only counted under POST/ALL
        vec![json!("WR1"), json!("W. Out"), json!("KC"), json!(2023), json!(19), json!("POST"), json!(0), json!(0), json!(0), json!(8), json!(90), json!(0), json!(13.0)],
    ];
    Table::from_rows(columns.iter().map(|c| c.to_string()).collect(), rows)
}

fn records_by_player(table: &Table) -> Map<String, Value> {
    table
        .to_records()
        .into_iter()
        .map(|r| {
            let key = format!("{}:{}", r["player_id"].as_str().unwrap(), r["season_type"]);
            (key, Value::Object(r))
        })
        .collect()
}

#[test]
fn test_seasonal_sums_regular_season() {
    let seasonal = seasonal_from_weekly(&weekly_fixture(), SeasonType::Regular);
    assert_eq!(seasonal.len(), 2);

    let by_player = records_by_player(&seasonal);
    let wr = &by_player["WR1:\"REG\""];
    assert_eq!(wr["targets"], json!(15));
    assert_eq!(wr["receiving_yards"], json!(200));
    assert_eq!(wr["games"], json!(2));
    assert_eq!(wr["fantasy_points_ppr"], json!(40.0));
    assert_eq!(wr["season"], json!(2023));
}

#[test]
fn test_seasonal_excludes_week_and_text_columns() {
    let seasonal = seasonal_from_weekly(&weekly_fixture(), SeasonType::Regular);
    let columns = seasonal.columns();
    assert!(!columns.iter().any(|c| c == "week"));
    assert!(!columns.iter().any(|c| c == "player_name"));
    assert!(!columns.iter().any(|c| c == "recent_team"));
    assert_eq!(&columns[..3], &["player_id", "season", "season_type"]);
    assert_eq!(columns.last().map(String::as_str), Some("games"));
}

#[test]
fn test_seasonal_share_metrics() {
    let seasonal = seasonal_from_weekly(&weekly_fixture(), SeasonType::Regular);
    let by_player = records_by_player(&seasonal);
    let wr = &by_player["WR1:\"REG\""];

    // 15 targets over 50 team attempts
    assert_eq!(wr["tgt_sh"], json!(0.3));
    // 200 of 500 team passing yards, 2 of 4 passing tds
    assert_eq!(wr["ry_sh"], json!(0.4));
    assert_eq!(wr["rtd_sh"], json!(0.5));
    assert_eq!(wr["dom"], json!(0.45));
    assert_eq!(wr["yptmpa"], json!(4.0));
    // No air-yards columns: team denominator is zero
    assert_eq!(wr["ay_sh"], Value::Null);
    assert_eq!(wr["wopr"], Value::Null);
}

#[test]
fn test_seasonal_post_and_all() {
    let post = seasonal_from_weekly(&weekly_fixture(), SeasonType::Post);
    assert_eq!(post.len(), 1);
    assert_eq!(post.to_records()[0]["games"], json!(1));

    let all = seasonal_from_weekly(&weekly_fixture(), SeasonType::All);
    // Grouping keeps season_type, so WR1 has a REG row and a POST row.
    assert_eq!(all.len(), 3);
}

#[test]
fn test_seasonal_groups_sorted_by_key() {
    let seasonal = seasonal_from_weekly(&weekly_fixture(), SeasonType::All);
    let ids: Vec<String> = seasonal
        .to_records()
        .iter()
        .map(|r| format!("{}/{}", r["player_id"].as_str().unwrap(), r["season_type"].as_str().unwrap()))
        .collect();
    assert_eq!(ids, vec!["QB1/REG", "WR1/POST", "WR1/REG"]);
}

#[test]
fn test_seasonal_without_season_type_column() {
    let table = Table::from_rows(
        vec!["player_id".into(), "season".into(), "week".into(), "targets".into()],
        vec![
            vec![json!("A"), json!(2022), json!(1), json!(3)],
            vec![json!("A"), json!(2022), json!(2), json!(4)],
        ],
    );
    let seasonal = seasonal_from_weekly(&table, SeasonType::Post);
    assert_eq!(seasonal.len(), 1);
    assert!(!seasonal.has_column("season_type"));
    assert_eq!(seasonal.to_records()[0]["targets"], json!(7));
}

#[test]
fn test_seasonal_empty_input() {
    let seasonal = seasonal_from_weekly(&Table::default(), SeasonType::Regular);
    assert!(seasonal.is_empty());
}

#[test]
fn test_age_at_season_start() {
    assert_eq!(age_at_season_start("1995-09-17", 2023), Some(27));
    assert_eq!(age_at_season_start("1995-09-01", 2023), Some(28));
    assert_eq!(age_at_season_start("1995-09-17T00:00:00Z", 2023), Some(27));
    assert_eq!(age_at_season_start("unknown", 2023), None);
    assert_eq!(age_at_season_start("2030-01-01", 2023), None);
}

#[test]
fn test_add_roster_age() {
    let mut rosters = Table::from_rows(
        vec!["season".into(), "full_name".into(), "birth_date".into()],
        vec![
            vec![json!(2023), json!("Patrick Mahomes"), json!("1995-09-17")],
            vec![json!(2023), json!("Unknown Player"), Value::Null],
        ],
    );
    add_roster_age(&mut rosters);

    let records = rosters.to_records();
    assert_eq!(records[0]["age"], json!(27));
    assert_eq!(records[1]["age"], Value::Null);
}

#[test]
fn test_add_roster_age_without_birth_date_is_noop() {
    let mut rosters = Table::from_rows(vec!["season".into()], vec![vec![json!(2023)]]);
    add_roster_age(&mut rosters);
    assert!(!rosters.has_column("age"));
}
