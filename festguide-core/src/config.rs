//! Global festguide configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{GuideError, GuideResult};
use crate::grouping::DEFAULT_ALPHABET;
use crate::tags::DEFAULT_AVAILABLE_TAGS;

static DEFAULT_FIXTURE_PATH: &str = "~/festguide/events.json";
static DEFAULT_DATA_DIR: &str = "~/festguide/data";

fn default_fixture_path() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURE_PATH)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_available_tags() -> Vec<String> {
    DEFAULT_AVAILABLE_TAGS.iter().map(|t| t.to_string()).collect()
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

/// Configuration at ~/.config/festguide/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuideConfig {
    /// Event fixture (JSON array of events)
    #[serde(default = "default_fixture_path")]
    pub fixture: PathBuf,

    /// Where liked events are stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Tags offered as filters on the day view
    #[serde(default = "default_available_tags")]
    pub available_tags: Vec<String>,

    /// Letters of the host index
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        GuideConfig {
            fixture: default_fixture_path(),
            data_dir: default_data_dir(),
            available_tags: default_available_tags(),
            alphabet: default_alphabet(),
        }
    }
}

impl GuideConfig {
    pub fn config_path() -> GuideResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GuideError::Config("Could not determine config directory".into()))?
            .join("festguide");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first use.
    pub fn load() -> GuideResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> GuideResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| GuideError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GuideError::Config(e.to_string()))
    }

    pub fn fixture_path(&self) -> PathBuf {
        expand_tilde(&self.fixture)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GuideResult<()> {
        let contents = format!(
            "\
# festguide configuration

# Event fixture to read:
# fixture = \"{}\"

# Where liked events are kept:
# data_dir = \"{}\"

# Filter tags offered on the day view:
# available_tags = [\"Kid Friendly\", \"Sober Only\"]

# Letters of the host index:
# alphabet = \"{}\"
",
            DEFAULT_FIXTURE_PATH, DEFAULT_DATA_DIR, DEFAULT_ALPHABET
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GuideError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GuideError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
