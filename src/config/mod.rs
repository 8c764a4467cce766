use crate::errors::AppResult;
use crate::utils::time::{Zone, parse_zone};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path to the exported spreadsheet (plain CSV, row-major).
    pub source: String,
    /// Path the generated sleep/wake CSV is written to.
    pub output: String,
    /// "local", "UTC", or a fixed offset like "+02:00". The sheet's
    /// wall-clock times are interpreted in this zone.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// How long a cached grid stays valid.
    #[serde(default = "default_cache_minutes")]
    pub cache_minutes: i64,
}

fn default_timezone() -> String {
    "local".to_string()
}
fn default_cache_minutes() -> i64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Self::source_file().to_string_lossy().to_string(),
            output: Self::output_file().to_string_lossy().to_string(),
            timezone: default_timezone(),
            cache_minutes: default_cache_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("sleepcharter")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".sleepcharter")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sleepcharter.conf")
    }

    /// Default location of the exported sheet
    pub fn source_file() -> PathBuf {
        Self::config_dir().join("sheet.csv")
    }

    /// Default location of the generated CSV
    pub fn output_file() -> PathBuf {
        Self::config_dir().join("out").join("sleepData.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// The configured timezone, resolved.
    pub fn zone(&self) -> AppResult<Zone> {
        parse_zone(&self.timezone)
    }

    /// Initialize the configuration file and the output directory
    pub fn init_all(custom_source: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Source path: user provided or default
        let source_path = if let Some(src) = custom_source {
            let p = std::path::Path::new(&src);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::source_file()
        };

        let config = Config {
            source: source_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Make sure the output directory exists
        fs::create_dir_all(Self::output_file().parent().unwrap_or(&dir))?;

        println!("✅ Sheet source: {:?}", source_path);

        Ok(())
    }
}
