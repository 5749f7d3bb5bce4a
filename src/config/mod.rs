use crate::errors::{AppError, AppResult};
use crate::models::period::PeriodKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // missing-field check and rewrite, see src/config/migrate.rs

/// Per-set bonuses and flat rates used by the earnings formulas.
///
/// The hour-log bonus intentionally differs between the entry screens and the
/// summary/report views; both are kept so the difference stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsConfig {
    pub per_set_bonus_entry_creation: f64,
    pub per_set_bonus_summary: f64,
    pub work_record_set_bonus: f64,
    pub moes_hour_rate: f64,
    pub moes_set_bonus: f64,
}

impl Default for EarningsConfig {
    fn default() -> Self {
        Self {
            per_set_bonus_entry_creation: default_bonus_entry_creation(),
            per_set_bonus_summary: default_bonus_summary(),
            work_record_set_bonus: default_work_record_set_bonus(),
            moes_hour_rate: default_moes_hour_rate(),
            moes_set_bonus: default_moes_set_bonus(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_bonus_entry_creation")]
    pub per_set_bonus_entry_creation: f64,
    #[serde(default = "default_bonus_summary")]
    pub per_set_bonus_summary: f64,
    #[serde(default = "default_work_record_set_bonus")]
    pub work_record_set_bonus: f64,
    #[serde(default = "default_moes_hour_rate")]
    pub moes_hour_rate: f64,
    #[serde(default = "default_moes_set_bonus")]
    pub moes_set_bonus: f64,
    #[serde(default)]
    pub default_period: PeriodKind,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_bonus_entry_creation() -> f64 {
    5.0
}
fn default_bonus_summary() -> f64 {
    20.0
}
fn default_work_record_set_bonus() -> f64 {
    20.0
}
fn default_moes_hour_rate() -> f64 {
    2.0
}
fn default_moes_set_bonus() -> f64 {
    5.0
}
fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self::with_database(db_path.to_string_lossy().to_string())
    }
}

impl Config {
    pub fn with_database(database: String) -> Self {
        let e = EarningsConfig::default();
        Self {
            database,
            per_set_bonus_entry_creation: e.per_set_bonus_entry_creation,
            per_set_bonus_summary: e.per_set_bonus_summary,
            work_record_set_bonus: e.work_record_set_bonus,
            moes_hour_rate: e.moes_hour_rate,
            moes_set_bonus: e.moes_set_bonus,
            default_period: PeriodKind::default(),
            currency_symbol: default_currency_symbol(),
        }
    }

    pub fn earnings(&self) -> EarningsConfig {
        EarningsConfig {
            per_set_bonus_entry_creation: self.per_set_bonus_entry_creation,
            per_set_bonus_summary: self.per_set_bonus_summary,
            work_record_set_bonus: self.work_record_set_bonus,
            moes_hour_rate: self.moes_hour_rate,
            moes_set_bonus: self.moes_set_bonus,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hirebill")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hirebill")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hirebill.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hirebill.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("hirebill.sqlite")
        };

        let config = Config::with_database(db_path.to_string_lossy().to_string());

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
