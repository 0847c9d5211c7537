use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database: String,
    /// Shift length assigned to newly created users, e.g. "8h" or "7h30m".
    #[serde(default = "default_shift")]
    pub default_shift: String,
    /// Unit used when printing balances: "minutes" (HH:MM) or "hours".
    #[serde(default = "default_balance_unit")]
    pub balance_unit: String,
    /// Per-day-type accrual policy overrides, code → effect
    /// ("shift" | "credits" | "deducts" | "exempt"). Codes not listed here
    /// keep the built-in defaults.
    #[serde(default)]
    pub accrual_overrides: BTreeMap<String, String>,
}

fn default_shift() -> String {
    "8h".to_string()
}

fn default_balance_unit() -> String {
    "minutes".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_shift: default_shift(),
            balance_unit: default_balance_unit(),
            accrual_overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timetracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timetracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timetracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timetracker.sqlite")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unreadable. A broken config never prevents startup; `config --check`
    /// reports what is wrong with it.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(_) => Config::default(),
                },
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Create the config dir and write the initial config file. In test
    /// mode (hidden `--test` flag) nothing is persisted; the returned
    /// config only carries the database override.
    pub fn init_all(custom_db: Option<String>, test: bool) -> AppResult<Config> {
        let mut cfg = Config::default();
        if let Some(db) = custom_db {
            cfg.database = db;
        }
        if !test {
            cfg.save()?;
        }
        Ok(cfg)
    }

    /// Write the configuration file, creating the config dir if needed.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Report config fields missing from the on-disk file (they fall back
    /// to defaults at load time).
    pub fn check_missing_fields() -> AppResult<Vec<String>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::ConfigLoad);
        }

        let content = fs::read_to_string(&path)?;
        let parsed: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

        let required = ["database", "default_shift", "balance_unit"];
        let mut missing = Vec::new();
        for field in required {
            if parsed.get(field).is_none() {
                missing.push(field.to_string());
            }
        }
        Ok(missing)
    }
}
