use crate::models::shift::ShiftDay;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the per-day attendance JSON files.
    pub data_dir: String,

    /// Ordered member roster; drives display order everywhere.
    #[serde(default)]
    pub roster: Vec<String>,

    /// Member name -> phonetic reading, used by the initial filter.
    #[serde(default)]
    pub readings: BTreeMap<String, String>,

    /// Static shift schedule for the event days.
    #[serde(default)]
    pub schedule: Vec<ShiftDay>,

    /// Shared secret gating the admin report, compared by plain equality.
    #[serde(default = "default_admin_secret")]
    pub admin_secret: String,
}

fn default_admin_secret() -> String {
    "change-me".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            roster: Vec::new(),
            readings: BTreeMap::new(),
            schedule: Vec::new(),
            admin_secret: default_admin_secret(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("kintai")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".kintai")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kintai.conf")
    }

    /// Default location of the per-day attendance files
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("days")
    }

    /// Load configuration from the default location, or return defaults
    /// if no file exists yet
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path (tests, --config override)
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            let content = fs::read_to_string(path).expect("Failed to read configuration file");
            serde_yaml::from_str(&content).expect("Failed to parse configuration file")
        } else {
            Self::default()
        }
    }

    pub fn is_member(&self, name: &str) -> bool {
        self.roster.iter().any(|m| m == name)
    }

    /// Initialize configuration file and data directory. Writes a starter
    /// config with a sample roster unless one already exists.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> std::io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_dir = match custom_data_dir {
            Some(d) => {
                let p = Path::new(&d);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::data_dir_default(),
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Self::starter()
        };

        // Write config file
        if !is_test && !Self::config_file().exists() {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&data_dir)?;
        println!("Data directory: {:?}", data_dir);

        Ok(())
    }

    /// Sample configuration written by `kintai init`, meant to be edited.
    fn starter() -> Self {
        let roster = vec![
            "佐藤".to_string(),
            "鈴木".to_string(),
            "高橋".to_string(),
        ];
        let readings = BTreeMap::from([
            ("佐藤".to_string(), "さとう".to_string()),
            ("鈴木".to_string(), "すずき".to_string()),
            ("高橋".to_string(), "たかはし".to_string()),
        ]);

        Self {
            roster,
            readings,
            ..Self::default()
        }
    }
}
