#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::Local;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kintai() -> Command {
    cargo_bin_cmd!("kintai")
}

/// Create a unique (config file, data dir) pair inside the system temp dir
/// and remove any leftovers from previous runs
pub fn setup_test_env(name: &str) -> (String, String) {
    let mut cfg_path: PathBuf = env::temp_dir();
    cfg_path.push(format!("{}_kintai.conf", name));

    let mut data_dir: PathBuf = env::temp_dir();
    data_dir.push(format!("{}_kintai_days", name));

    fs::remove_file(&cfg_path).ok();
    fs::remove_dir_all(&data_dir).ok();

    let config = cfg_path.to_string_lossy().to_string();
    let data = data_dir.to_string_lossy().to_string();
    write_config(&config, &data);

    (config, data)
}

/// Write a config file with a three-member roster and shifts covering the
/// whole of today, so clock-in/out flows always have a shift context
pub fn write_config(config_path: &str, data_dir: &str) {
    let today = Local::now().date_naive();
    let yaml = format!(
        r#"data_dir: '{data}'
roster:
  - '佐藤'
  - '鈴木'
  - '高橋'
readings:
  佐藤: 'さとう'
  鈴木: 'すずき'
  高橋: 'たかはし'
schedule:
  - date: {today}
    shifts:
      - time: '00:00 - 12:00'
        start_hour: 0
        end_hour: 12
        members: ['佐藤']
      - time: '12:00 - 24:00'
        start_hour: 12
        end_hour: 24
        members: ['佐藤']
admin_secret: 'hidemura'
"#,
        data = data_dir,
        today = today.format("%Y-%m-%d"),
    );

    fs::write(config_path, yaml).expect("write test config");
}

/// Path of today's attendance file inside the given data dir
pub fn today_file(data_dir: &str) -> PathBuf {
    let today = Local::now().date_naive();
    PathBuf::from(data_dir).join(format!("attendance-{}.json", today.format("%Y-%m-%d")))
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
