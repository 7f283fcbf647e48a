use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Behavior flags for the engine. Calculator state itself is never
/// persisted; only these knobs live in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Only treat a leading '-' as a negative sign when toggling negation.
    /// Off by default to match the shipped behavior, where any '-' in the
    /// display counts and un-negating drops the first character.
    pub strict_negate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_negate: false,
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keypad_calc")
            .join("config.toml")
    }

    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::config_path();

        if !path.exists() {
            let default = Config::default();
            default.save()?;
            return Ok(default);
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}
