//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use grandpas_dots::{BoardSize, GameSetup, MAX_PLAYERS, MIN_PLAYERS, RankPolicy, Roster};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "GRANDPAS_DOTS_CONFIG";

/// Config file picked up from the working directory when nothing else is named.
pub const DEFAULT_CONFIG_FILE: &str = "grandpas_dots.toml";

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Board side length in boxes.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Number of players.
    #[serde(default = "default_players")]
    players: usize,

    /// How tied scores are ranked.
    #[serde(default)]
    rank_policy: RankPolicy,

    /// Board sizes the `size` command accepts.
    #[serde(default = "default_offered_sizes")]
    offered_sizes: Vec<usize>,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_board_size() -> usize {
    BoardSize::DEFAULT.get()
}

fn default_players() -> usize {
    MIN_PLAYERS
}

fn default_offered_sizes() -> Vec<usize> {
    vec![3, 5, 7, 9]
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            players: default_players(),
            rank_policy: RankPolicy::default(),
            offered_sizes: default_offered_sizes(),
            log_filter: default_log_filter(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Board side length.
    pub board_size: Option<usize>,
    /// Number of players.
    pub players: Option<usize>,
    /// Rank policy.
    pub rank_policy: Option<RankPolicy>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, players = config.players, "Config loaded");
        Ok(config)
    }

    /// Picks the config file to load.
    ///
    /// An explicit path wins, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_FILE`] if it exists. `None` means defaults only.
    pub fn locate(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.is_file().then_some(local)
            })
    }

    /// Builds the effective configuration: defaults, then the file, then
    /// command-line overrides, then validation.
    #[instrument]
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        let config = config.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line values over this configuration.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(n) = overrides.board_size {
            self.board_size = n;
        }
        if let Some(players) = overrides.players {
            self.players = players;
        }
        if let Some(policy) = overrides.rank_policy {
            self.rank_policy = policy;
        }
        self
    }

    /// Checks the board size against the offered sizes and the player count
    /// against the roster bounds.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.offered_sizes.is_empty() {
            return Err(ConfigError::new("offered_sizes must not be empty".to_string()));
        }
        if let Some(bad) = self.offered_sizes.iter().find(|n| **n == 0) {
            return Err(ConfigError::new(format!("Offered board size {} is invalid", bad)));
        }
        if !self.offers_size(self.board_size) {
            warn!(board_size = self.board_size, "Board size not offered");
            return Err(ConfigError::new(format!(
                "Board size {} is not one of {:?}",
                self.board_size, self.offered_sizes
            )));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            warn!(players = self.players, "Player count out of range");
            return Err(ConfigError::new(format!(
                "Player count {} must be between {} and {}",
                self.players, MIN_PLAYERS, MAX_PLAYERS
            )));
        }
        Ok(())
    }

    /// Returns true if the `size` command accepts `n`.
    pub fn offers_size(&self, n: usize) -> bool {
        self.offered_sizes.contains(&n)
    }

    /// Game setup described by this configuration.
    pub fn to_setup(&self) -> Result<GameSetup, ConfigError> {
        let size = BoardSize::new(self.board_size)
            .map_err(|e| ConfigError::new(format!("Invalid board size: {}", e)))?;
        let roster = Roster::with_size(self.players)
            .map_err(|e| ConfigError::new(format!("Invalid roster: {}", e)))?;
        Ok(GameSetup::with(size, roster, self.rank_policy))
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.players(), 2);
        assert_eq!(*config.rank_policy(), RankPolicy::Positional);
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = GameConfig::default().with_overrides(Overrides {
            players: Some(4),
            ..Overrides::default()
        });
        assert_eq!(*config.players(), 4);
        assert_eq!(*config.board_size(), 3);
    }

    #[test]
    fn test_unoffered_size_rejected() {
        let config = GameConfig::default().with_overrides(Overrides {
            board_size: Some(4),
            ..Overrides::default()
        });
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("not one of"));
    }

    #[test]
    fn test_player_bounds() {
        for (players, ok) in [(1, false), (2, true), (6, true), (7, false)] {
            let config = GameConfig::default().with_overrides(Overrides {
                players: Some(players),
                ..Overrides::default()
            });
            assert_eq!(config.validate().is_ok(), ok, "players = {players}");
        }
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }

    #[test]
    fn test_setup_from_config() {
        let config = GameConfig::default().with_overrides(Overrides {
            board_size: Some(5),
            players: Some(3),
            rank_policy: Some(RankPolicy::Shared),
        });
        let setup = config.to_setup().unwrap();
        assert_eq!(setup.size().get(), 5);
        assert_eq!(setup.roster().len(), 3);
        assert_eq!(setup.policy(), RankPolicy::Shared);
    }
}
