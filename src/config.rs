use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Color, Player};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

/// Game-flow settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: Player,
}

/// Symbols used when printing a board.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty: char,
    pub player_a: char,
    pub player_b: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty: Color::Empty.symbol(),
            player_a: Color::PlayerA.symbol(),
            player_b: Color::PlayerB.symbol(),
        }
    }
}

impl DisplayConfig {
    pub fn symbol(&self, color: Color) -> char {
        match color {
            Color::Empty => self.empty,
            Color::PlayerA => self.player_a,
            Color::PlayerB => self.player_b,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        for (name, symbol) in [("empty", d.empty), ("player_a", d.player_a), ("player_b", d.player_b)] {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::Validation(format!(
                    "display.{name} must be a visible character"
                )));
            }
        }
        if d.empty == d.player_a || d.empty == d.player_b || d.player_a == d.player_b {
            return Err(ConfigError::Validation(
                "display symbols must be distinct".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
