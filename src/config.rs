//! Top-level arena configuration, loaded from TOML.

use std::path::Path;

use tracing::warn;

use crate::agents::HeuristicConfig;
use crate::arena::MatchConfig;
use crate::core::GameConfig;
use crate::error::ConfigError;

/// Top-level arena configuration, loadable from TOML.
///
/// ```toml
/// [game]
/// board_size = 8
/// pieces_per_player = 8
///
/// [matches]
/// max_turns = 100
/// fallback_budget = 5
///
/// [heuristic]
/// time_budget_ms = 800
///
/// [heuristic.weights]
/// blocking = 800.0
/// center_control = 0.0
/// ```
///
/// Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub game: GameConfig,
    pub matches: MatchConfig,
    pub heuristic: HeuristicConfig,
}

impl ArenaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        self.matches.validate()?;
        self.heuristic.validate()?;
        Ok(())
    }
}
