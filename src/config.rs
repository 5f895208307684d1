use crate::exceptions::HearthError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const APP_NAME: &str = "hearth";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ConfigFile {
    /// Module identities to load, in order. Absent means every built-in module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modules: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub modules: Option<Vec<String>>,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            modules: None,
        }
    }

    /// Resolves the data directory and reads the optional `config.json` inside it.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self, HearthError> {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        if data_dir.exists() && !data_dir.is_dir() {
            return Err(HearthError::Configuration(format!(
                "Data path '{}' is not a directory.",
                data_dir.display()
            )));
        }

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let file = if config_path.exists() {
            crate::fs::read_json::<ConfigFile>(&config_path).map_err(|e| {
                HearthError::Configuration(format!("{}: {}", config_path.display(), e))
            })?
        } else {
            ConfigFile::default()
        };

        log::debug!("using data directory {}", data_dir.display());

        Ok(Self {
            data_dir,
            modules: file.modules,
        })
    }

    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

pub fn default_data_dir() -> PathBuf {
    if let Some(xdg) = env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    if let Some(home) = env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local/share").join(APP_NAME);
    }
    PathBuf::from("data")
}
