use std::fs;
use std::path::Path;

use assert_cmd::Command;
use rust_xlsxwriter::Workbook;

fn items_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("items").unwrap();
    cmd.current_dir(cwd);
    cmd
}

#[test]
fn missing_input_exits_1_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let assert = items_cmd(dir.path()).arg("does-not-exist.xlsx").assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Input file not found"), "stderr: {stderr}");
    assert!(!dir.path().join("data").join("items.csv").exists());
}

#[test]
fn default_input_path_is_used_when_omitted() {
    let dir = tempfile::tempdir().unwrap();

    // No data/DELTdata.xlsx in an empty directory.
    let assert = items_cmd(dir.path()).assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("DELTdata.xlsx"), "stderr: {stderr}");
}

#[test]
fn converts_workbook_into_items_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    let input = dir.path().join("data").join("DELTdata.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    // Difficulty / max score / identifier, starting at column D.
    sheet.write_number(0, 3, -4.0).unwrap();
    sheet.write_number(1, 3, 1).unwrap();
    sheet.write_string(2, 3, "A1-1").unwrap();
    sheet.write_number(0, 4, -1.0).unwrap();
    sheet.write_number(1, 4, 1).unwrap();
    sheet.write_number(0, 5, -1.0).unwrap();
    sheet.write_number(1, 5, 2).unwrap();
    sheet.write_string(2, 5, "B1-2").unwrap();
    sheet.write_number(0, 6, -3.7).unwrap();
    sheet.write_string(2, 6, "item-7").unwrap();
    workbook.save(&input).unwrap();

    items_cmd(dir.path()).assert().success();

    let out = fs::read_to_string(dir.path().join("data").join("items.csv")).unwrap();
    assert_eq!(
        out,
        "UIID,a,b,se,rating,k\n\
         A1-1,1.0,-4.0,0.0,A1,1\n\
         B1-2,1.0,-1.0,0.0,B1,2\n\
         item-7,1.0,-3.7,0.0,A1,1\n"
    );
}

#[test]
fn csv_without_items_exits_0_with_header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bank.csv"), "uiid,,\nb,0.1,0.2\n").unwrap();

    items_cmd(dir.path()).arg("bank.csv").assert().success();

    let out = fs::read_to_string(dir.path().join("data").join("items.csv")).unwrap();
    assert_eq!(out, "UIID,a,b,se,rating,k\n");
}

#[test]
fn out_of_range_difficulty_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bank.csv"), "uiid,B2-laptop-01,x-2\nb,-9.0,10.0\n").unwrap();

    let assert = items_cmd(dir.path()).arg("bank.csv").assert().code(3);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("x-2"), "stderr: {stderr}");
    assert!(!dir.path().join("data").join("items.csv").exists());
}
