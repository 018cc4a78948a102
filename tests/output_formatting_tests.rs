mod common;
use common::*;

use std::fs;
use tempfile::tempdir;

const EXPECTED_HEADER: &str = "level_index,win_rate,loses,churn,amuletBomb,amuletMoves,horn,\
                               boostHammer,boostCross,boostSwapElements,preingame_bomb,\
                               preingame_multicolor,preingame_firework,preingame_steps,\
                               additionalMoves,inGameBomb,inGameTnt,inGameBigTnt";

#[test]
fn test_csv_header_is_fixed() {
    let (stdout, _stderr, exit_code) = run_ludolog_with_input(&[], "start win\n");
    assert_eq!(exit_code, 0);

    let (header, _rows) = split_csv(&stdout);
    assert_eq!(header, EXPECTED_HEADER);
}

#[test]
fn test_csv_row_values() {
    let (stdout, _stderr, exit_code) =
        run_ludolog_with_input(&[], "start horn lose start win\n");
    assert_eq!(exit_code, 0);

    let (_header, rows) = split_csv(&stdout);
    assert_eq!(rows, vec!["0,0.5,1,false,0,0,1,0,0,0,0,0,0,0,0,0,0,0"]);
}

#[test]
fn test_no_header_flag() {
    let (stdout, _stderr, exit_code) =
        run_ludolog_with_input(&["--no-header"], "start win\n");
    assert_eq!(exit_code, 0);

    assert!(
        !stdout.contains("level_index"),
        "Header row should be suppressed"
    );
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_tsv_output() {
    let (stdout, _stderr, exit_code) =
        run_ludolog_with_input(&["-F", "tsv"], "start win\n");
    assert_eq!(exit_code, 0);

    let mut lines = stdout.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("level_index\twin_rate\tloses\tchurn\t"));
    assert!(lines.next().unwrap().starts_with("0\t1\t0\tfalse\t"));
}

#[test]
fn test_jsonl_output() {
    let input = "start boostCross lose churn\n";

    let (stdout, _stderr, exit_code) = run_ludolog_with_input(&["-F", "jsonl"], input);
    assert_eq!(exit_code, 0);

    let lines: Vec<&str> = stdout.trim().split('\n').collect();
    assert_eq!(lines.len(), 1, "One JSON object per level");

    let row: serde_json::Value =
        serde_json::from_str(lines[0]).expect("Output should be valid JSON");
    assert_eq!(row["level_index"], 0);
    assert_eq!(row["win_rate"], 0.0);
    assert_eq!(row["loses"], 1);
    assert_eq!(row["churn"], true);
    assert_eq!(row["boostCross"], 1);
    assert_eq!(row["amuletBomb"], 0);
}

#[test]
fn test_jsonl_field_order_is_stable() {
    let (stdout, _stderr, exit_code) =
        run_ludolog_with_input(&["-F", "jsonl"], "start win\nstart win\n");
    assert_eq!(exit_code, 0);

    let lines: Vec<&str> = stdout.trim().split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1], "Identical levels serialize identically");
    assert!(
        lines[0].starts_with(r#"{"level_index":0,"win_rate":1.0,"loses":0,"churn":false,"#),
        "Fields should keep insertion order, got: {}",
        lines[0]
    );
}

#[test]
fn test_output_file_flag() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("summary.csv");
    let out_arg = out_path.to_str().unwrap();

    let (stdout, _stderr, exit_code) =
        run_ludolog_with_input(&["-o", out_arg], "start win\n");
    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty(), "Table goes to the file, not stdout");

    let written = fs::read_to_string(&out_path).expect("Output file should exist");
    let (header, rows) = split_csv(&written);
    assert_eq!(header, EXPECTED_HEADER);
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_multi_log_row_order() {
    let input = "start lose churn\nstart win start win\n";

    let (stdout, _stderr, exit_code) = run_ludolog_with_input(&[], input);
    assert_eq!(exit_code, 0);

    let (header, rows) = split_csv(&stdout);
    assert_eq!(rows.len(), 3);
    // First log's single churned level, then the second log's two wins
    assert_eq!(csv_field(&header, &rows[0], "churn"), "true");
    assert_eq!(csv_field(&header, &rows[1], "level_index"), "0");
    assert_eq!(csv_field(&header, &rows[2], "level_index"), "1");
}
