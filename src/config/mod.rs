use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Calendar to fetch events from.
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,

    /// Categorized events CSV, the interface between collect and chart.
    pub csv_file: String,

    /// Output path of the HTML chart.
    pub chart_file: String,

    /// OAuth token JSON (access_token, optional refresh_token/expires_at).
    pub token_file: String,

    /// OAuth client credentials, only needed for token refresh.
    #[serde(default)]
    pub google_client_id: Option<String>,
    #[serde(default)]
    pub google_client_secret: Option<String>,

    /// When a run fetches zero events: false leaves the previous CSV
    /// untouched, true truncates it to just the header.
    #[serde(default)]
    pub clear_on_empty: bool,
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            calendar_id: default_calendar_id(),
            csv_file: dir
                .join("categorized_calendar_events.csv")
                .to_string_lossy()
                .to_string(),
            chart_file: dir
                .join("total_duration_by_category.html")
                .to_string_lossy()
                .to_string(),
            token_file: dir.join("token.json").to_string_lossy().to_string(),
            google_client_id: None,
            google_client_secret: None,
            clear_on_empty: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("caltrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".caltrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("caltrack.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Write the current configuration, creating the directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }
}
