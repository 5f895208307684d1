use crate::config::Config;
use crate::console::{Console, Prompt};
use crate::exceptions::HearthError;
use crate::fs::{atomic_write_json, read_json};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const HOME_DATA_FILE: &str = "home_data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeProfile {
    pub home_name: String,
    pub owner_name: String,
}

impl HomeProfile {
    pub fn path(config: &Config) -> PathBuf {
        config.data_file(HOME_DATA_FILE)
    }

    /// Returns `None` when no profile has been created yet.
    pub fn load(config: &Config) -> Result<Option<Self>, HearthError> {
        let path = Self::path(config);
        if !path.exists() {
            return Ok(None);
        }
        read_json(&path).map(Some)
    }

    pub fn save(&self, config: &Config) -> Result<(), HearthError> {
        atomic_write_json(&Self::path(config), self)
    }

    /// Loads the profile, walking the user through creating one on first run.
    pub fn load_or_onboard<R: BufRead, W: Write>(
        config: &Config,
        console: &mut Console<R, W>,
    ) -> Result<Self, HearthError> {
        console.println("Loading home data...")?;
        if let Some(profile) = Self::load(config)? {
            console.println("Home data loaded successfully.")?;
            return Ok(profile);
        }

        console.println("No home data found. Creating one right now...")?;
        let owner_name = console.ask("What's your name? ")?;
        let home_name = console.ask("Pick a name for your home? ")?;

        let profile = Self {
            home_name,
            owner_name,
        };
        profile.save(config)?;

        console.println(&format!(
            "Thank you {}!\nNew home {} created successfully.",
            profile.owner_name, profile.home_name
        ))?;
        Ok(profile)
    }
}
