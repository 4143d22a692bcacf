// Configuration loading and parsing (draft.toml).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[draft]` table in draft.toml.
#[derive(Debug, Clone, Deserialize)]
struct DraftFile {
    draft: DraftConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    /// Number of rounds; every team picks once per round.
    pub rounds: usize,
    /// Seconds on the pick clock before a slot auto-advances.
    pub pick_clock_seconds: u32,
    /// Participant identifiers in round-one pick order.
    pub teams: Vec<String>,
}

impl Default for DraftConfig {
    /// The 12-team, 18-round, 216-pick reference draft with a 30-second
    /// pick clock.
    fn default() -> Self {
        DraftConfig {
            rounds: 18,
            pick_clock_seconds: 30,
            teams: (1..=12).map(|i| format!("TEAM{i}")).collect(),
        }
    }
}

impl DraftConfig {
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn total_picks(&self) -> usize {
        self.teams.len() * self.rounds
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate a draft configuration from the given file path.
pub fn load_config_from(path: &Path) -> Result<DraftConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let file: DraftFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = file.draft;
    validate(&config)?;
    Ok(config)
}

/// Convenience wrapper: loads `config/draft.toml` relative to the current
/// working directory, falling back to the built-in default draft when the
/// file doesn't exist.
pub fn load_config() -> Result<DraftConfig, ConfigError> {
    let path = Path::new("config/draft.toml");
    if path.exists() {
        load_config_from(path)
    } else {
        let config = DraftConfig::default();
        validate(&config)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &DraftConfig) -> Result<(), ConfigError> {
    if config.teams.len() < 2 {
        return Err(ConfigError::ValidationError {
            field: "draft.teams".into(),
            message: format!("need at least 2 teams, got {}", config.teams.len()),
        });
    }

    let mut seen = HashSet::new();
    for team in &config.teams {
        if team.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "draft.teams".into(),
                message: "team identifiers must not be blank".into(),
            });
        }
        if !seen.insert(team) {
            return Err(ConfigError::ValidationError {
                field: "draft.teams".into(),
                message: format!("duplicate team identifier `{team}`"),
            });
        }
    }

    if config.rounds == 0 {
        return Err(ConfigError::ValidationError {
            field: "draft.rounds".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.pick_clock_seconds == 0 {
        return Err(ConfigError::ValidationError {
            field: "draft.pick_clock_seconds".into(),
            message: "must be greater than 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
