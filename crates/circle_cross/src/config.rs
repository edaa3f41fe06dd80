//! Session configuration loaded from TOML.

use crate::policy::HeuristicPolicy;
use crate::types::{Difficulty, Mode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "circle_cross.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "CIRCLE_CROSS_CONFIG";

/// Tuning for the computer opponents.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Chance the heuristic policy follows its rules instead of playing randomly.
    strategic_probability: f64,

    /// Chance the heuristic policy takes a free center.
    center_probability: f64,

    /// Plies searched below each candidate move; `None` searches to the end.
    minimax_depth_limit: Option<usize>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            strategic_probability: HeuristicPolicy::DEFAULT_STRATEGIC_PROBABILITY,
            center_probability: HeuristicPolicy::DEFAULT_CENTER_PROBABILITY,
            minimax_depth_limit: None,
        }
    }
}

impl PolicyConfig {
    /// Creates a policy configuration.
    pub fn new(
        strategic_probability: f64,
        center_probability: f64,
        minimax_depth_limit: Option<usize>,
    ) -> Self {
        Self {
            strategic_probability,
            center_probability,
            minimax_depth_limit,
        }
    }

    /// Checks that both probabilities lie in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("strategic_probability", self.strategic_probability),
            ("center_probability", self.center_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::new(format!(
                    "policy.{key} must be between 0 and 1, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Everything needed to start a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Who plays cross.
    mode: Mode,

    /// Computer strength under [`Mode::HumanVsComputer`].
    difficulty: Difficulty,

    /// RNG seed for reproducible computer play.
    seed: Option<u64>,

    /// Pause before the computer replies, for front ends that show it.
    computer_delay_ms: u64,

    /// Opponent tuning.
    policy: PolicyConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            seed: None,
            computer_delay_ms: 500,
            policy: PolicyConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the config file and loads it.
    ///
    /// An explicit path wins, then [`CONFIG_ENV_VAR`]; both must exist. Without
    /// either, [`DEFAULT_CONFIG_FILE`] is read if present, else defaults apply.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validates nested sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate()
    }

    /// Overrides the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the computer delay.
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Overrides the opponent tuning.
    pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
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
    /// Creates a configuration error located at the caller.
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
