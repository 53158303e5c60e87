use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{kintai, setup_test_env, temp_out};

#[test]
fn test_export_csv_report() {
    let (config, _data) = setup_test_env("export_csv");
    let out = temp_out("export_csv", "csv");

    kintai()
        .args(["--config", &config, "in", "佐藤"])
        .assert()
        .success();

    kintai()
        .args([
            "--config", &config, "export", "--secret", "hidemura", "--format", "csv", "--file",
            &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("csv file");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("name,total,status"));
    assert!(content.contains("佐藤"));
    assert!(content.contains("present"));
}

#[test]
fn test_export_json_report() {
    let (config, _data) = setup_test_env("export_json");
    let out = temp_out("export_json", "json");

    kintai()
        .args(["--config", &config, "in", "鈴木"])
        .assert()
        .success();

    kintai()
        .args([
            "--config", &config, "export", "--secret", "hidemura", "--format", "json", "--file",
            &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json file");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 3);
    let suzuki = rows
        .iter()
        .find(|r| r["name"] == "鈴木")
        .expect("鈴木 in report");
    assert_eq!(suzuki["status"], "present");
    assert!(suzuki["totalMs"].as_i64().unwrap() >= 0);
    assert!(suzuki["total"].as_str().unwrap().len() >= 8);
}

#[test]
fn test_export_rejects_wrong_secret() {
    let (config, _data) = setup_test_env("export_auth");
    let out = temp_out("export_auth", "csv");

    kintai()
        .args([
            "--config", &config, "export", "--secret", "wrong", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("Incorrect admin secret"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_report_requires_secret() {
    let (config, _data) = setup_test_env("report_auth");

    kintai()
        .args(["--config", &config, "report", "--secret", "wrong"])
        .assert()
        .failure()
        .stderr(contains("Incorrect admin secret"));

    kintai()
        .args(["--config", &config, "report", "--secret", "hidemura"])
        .assert()
        .success()
        .stdout(contains("Work report"))
        .stdout(contains("佐藤"));
}

#[test]
fn test_report_sorts_by_total_descending() {
    let (config, _data) = setup_test_env("report_sorted");

    // 佐藤 clocks in first, so their open session has run longest
    kintai()
        .args(["--config", &config, "in", "佐藤"])
        .assert()
        .success();
    kintai()
        .args(["--config", &config, "in", "鈴木"])
        .assert()
        .success();

    let out = kintai()
        .args(["--config", &config, "report", "--secret", "hidemura"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    let sato = stdout.find("佐藤").expect("佐藤 listed");
    let takahashi = stdout.find("高橋").expect("高橋 listed");
    assert!(sato < takahashi, "longest total should be listed first");
}

#[test]
fn test_backup_copies_day_file() {
    let (config, _data) = setup_test_env("backup_copy");
    let out = temp_out("backup_copy", "json");

    kintai()
        .args(["--config", &config, "in", "高橋"])
        .assert()
        .success();

    kintai()
        .args(["--config", &config, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let content = fs::read_to_string(&out).expect("backup file");
    assert!(content.contains("高橋"));
}

#[test]
fn test_backup_compress_creates_zip() {
    let (config, _data) = setup_test_env("backup_zip");
    let out = temp_out("backup_zip", "json");
    fs::remove_file(Path::new(&out).with_extension("zip")).ok();

    kintai()
        .args(["--config", &config, "in", "佐藤"])
        .assert()
        .success();

    kintai()
        .args(["--config", &config, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    // the uncompressed copy is removed after zipping
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_backup_without_day_file_fails() {
    let (config, _data) = setup_test_env("backup_missing");
    let out = temp_out("backup_missing", "json");

    kintai()
        .args(["--config", &config, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("No attendance file"));
}
