use predicates::str::contains;
use std::fs;

mod common;
use common::{kintai, setup_test_env, today_file};

#[test]
fn test_clock_in_and_out_flow() {
    let (config, data) = setup_test_env("in_out_flow");

    kintai()
        .args(["--config", &config, "in", "佐藤"])
        .assert()
        .success()
        .stdout(contains("Welcome, 佐藤"));

    kintai()
        .args(["--config", &config, "status"])
        .assert()
        .success()
        .stdout(contains("1 / 3"));

    kintai()
        .args(["--config", &config, "out", "佐藤"])
        .assert()
        .success()
        .stdout(contains("Thanks for today, 佐藤"));

    // persisted day file exists and holds one closed session
    let content = fs::read_to_string(today_file(&data)).expect("day file");
    let state: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let sessions = &state["佐藤"]["sessions"];
    assert_eq!(sessions.as_array().map(|a| a.len()), Some(1));
    assert!(sessions[0]["clockIn"].is_i64());
    assert!(sessions[0]["clockOut"].is_i64());
    assert_eq!(state["佐藤"]["status"], "absent");
}

#[test]
fn test_double_clock_in_is_a_noop() {
    let (config, data) = setup_test_env("double_in");

    kintai()
        .args(["--config", &config, "in", "鈴木"])
        .assert()
        .success();

    kintai()
        .args(["--config", &config, "in", "鈴木"])
        .assert()
        .success()
        .stdout(contains("already clocked in"));

    let content = fs::read_to_string(today_file(&data)).expect("day file");
    let state: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(
        state["鈴木"]["sessions"].as_array().map(|a| a.len()),
        Some(1)
    );
}

#[test]
fn test_clock_out_while_absent_is_a_noop() {
    let (config, _data) = setup_test_env("out_absent");

    kintai()
        .args(["--config", &config, "out", "高橋"])
        .assert()
        .success()
        .stdout(contains("not clocked in"));
}

#[test]
fn test_unknown_member_is_rejected() {
    let (config, _data) = setup_test_env("unknown_member");

    kintai()
        .args(["--config", &config, "in", "無名"])
        .assert()
        .failure()
        .stderr(contains("Unknown member"));
}

#[test]
fn test_status_board_shows_all_members() {
    let (config, _data) = setup_test_env("status_board");

    kintai()
        .args(["--config", &config, "status"])
        .assert()
        .success()
        .stdout(contains("0 / 3"))
        .stdout(contains("佐藤"))
        .stdout(contains("鈴木"))
        .stdout(contains("高橋"));
}

#[test]
fn test_status_filter_by_initial() {
    let (config, _data) = setup_test_env("status_filter");

    let out = kintai()
        .args(["--config", &config, "status", "--filter", "さ"])
        .assert()
        .success()
        .stdout(contains("佐藤"));

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    assert!(!stdout.contains("鈴木"));
    assert!(!stdout.contains("高橋"));
}

#[test]
fn test_status_watch_ticks_bounded() {
    let (config, _data) = setup_test_env("status_watch");

    kintai()
        .args(["--config", &config, "status", "--ticks", "2"])
        .assert()
        .success()
        .stdout(contains("0 / 3"));
}

#[test]
fn test_corrupt_day_file_falls_back_to_fresh_state() {
    let (config, data) = setup_test_env("corrupt_day");

    let path = today_file(&data);
    fs::create_dir_all(&data).unwrap();
    fs::write(&path, "this is not json {").unwrap();

    kintai()
        .args(["--config", &config, "status"])
        .assert()
        .success()
        .stdout(contains("0 / 3"));

    // the corrupt file does not block new clock-ins
    kintai()
        .args(["--config", &config, "in", "佐藤"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).expect("day file");
    let state: serde_json::Value = serde_json::from_str(&content).expect("rewritten as json");
    assert_eq!(state["佐藤"]["status"], "present");
}

#[test]
fn test_shifts_lists_remaining_slots() {
    let (config, _data) = setup_test_env("shifts_cmd");

    // the test schedule covers the whole day, so at least the second slot
    // is still ahead for a rostered member
    kintai()
        .args(["--config", &config, "shifts", "佐藤"])
        .assert()
        .success()
        .stdout(contains("12:00 - 24:00"));

    // not listed on any shift
    kintai()
        .args(["--config", &config, "shifts", "高橋"])
        .assert()
        .success()
        .stdout(contains("No shifts left today"));
}

#[test]
fn test_config_check_reports_problems() {
    let (config, data) = setup_test_env("config_check");

    // rewrite the config with a bad shift window and an unknown member
    let yaml = format!(
        r#"data_dir: '{data}'
roster:
  - '佐藤'
readings:
  佐藤: 'さとう'
schedule:
  - date: 2099-01-01
    shifts:
      - time: 'backwards'
        start_hour: 14
        end_hour: 10
        members: ['部外者']
admin_secret: 'hidemura'
"#,
    );
    fs::write(&config, yaml).unwrap();

    kintai()
        .args(["--config", &config, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Bad shift window"))
        .stdout(contains("unknown member"));
}
