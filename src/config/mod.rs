use crate::core::theme::{Background, DEFAULT_TEXT_SIZE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Overrides the configuration directory (used by the test-suite).
pub const HOME_ENV: &str = "WORKHOURS_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    pub export_dir: String,
    pub language: String,
    pub text_color: Option<String>,
    pub text_size: u8,
    pub background: Background,
    pub reminder_day: u32,
    pub lang_pack_url: Option<String>,
    pub update_url: Option<String>,
}

fn default_reminder_day() -> u32 {
    25
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            export_dir: Self::default_export_dir().to_string_lossy().to_string(),
            language: crate::i18n::DEFAULT_LANGUAGE.to_string(),
            text_color: None,
            text_size: DEFAULT_TEXT_SIZE,
            background: Background::Default,
            reminder_day: default_reminder_day(),
            lang_pack_url: None,
            update_url: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workhours")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".workhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workhours.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("workhours.sqlite")
    }

    pub fn default_export_dir() -> PathBuf {
        Self::config_dir().join("exports")
    }

    /// Downloaded language packs live here.
    pub fn lang_dir() -> PathBuf {
        Self::config_dir().join("lang")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))
    }

    /// Re-read the file on disk, apply `change` and persist it.
    ///
    /// Runtime overrides (such as `--db`) live only in the in-memory copy and
    /// are therefore never written back.
    pub fn update<F>(change: F) -> AppResult<Self>
    where
        F: FnOnce(&mut Config) -> AppResult<()>,
    {
        let mut on_disk = Self::load()?;
        change(&mut on_disk)?;
        on_disk.save()?;
        Ok(on_disk)
    }

    /// Initialize configuration directory and database file.
    /// Returns the database path in use.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            let mut config = Self::load()?;
            config.database = db_path.to_string_lossy().to_string();
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
