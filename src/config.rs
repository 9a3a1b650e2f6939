use crate::error::{PlaceAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Custom gazetteer JSON file; the builtin Uttarakhand dataset is
    /// used when unset
    pub gazetteer_path: Option<PathBuf>,
    pub suggestion_limit: usize,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gazetteer_path: None,
            suggestion_limit: 5,
            language: "english".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PlaceAiError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("place-ai").join("config.json"))
    }

    pub fn set_gazetteer_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(PlaceAiError::FileNotFound(path.display().to_string()));
        }
        self.gazetteer_path = Some(path);
        self.save()
    }
}
