use crate::search::{search_engines::TerminationCondition, AgentName, HeuristicName};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything needed to pick and run an agent, loadable from a TOML file such
/// as
///
/// ```toml
/// agent = "a-star"
/// heuristic = "manhattan"
/// step-limit = 10000
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AgentConfig {
    pub agent: AgentName,
    /// Only used by the heuristic searches.
    #[serde(default)]
    pub heuristic: HeuristicName,
    /// Only used by the random walk.
    #[serde(default)]
    pub seed: u64,
    /// Cost bound branch and bound starts from.
    #[serde(default = "default_initial_bound")]
    pub initial_bound: f64,
    #[serde(default)]
    pub step_limit: Option<u64>,
    #[serde(default)]
    pub time_limit_secs: Option<f64>,
}

fn default_initial_bound() -> f64 {
    100.
}

impl AgentConfig {
    pub fn new(agent: AgentName) -> Self {
        Self {
            agent,
            heuristic: HeuristicName::default(),
            seed: 0,
            initial_bound: default_initial_bound(),
            step_limit: None,
            time_limit_secs: None,
        }
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_bound.is_nan() || self.initial_bound <= 0. {
            return Err(ConfigError::InvalidBound(self.initial_bound));
        }
        if let Some(secs) = self.time_limit_secs {
            if Duration::try_from_secs_f64(secs).is_err() {
                return Err(ConfigError::InvalidTimeLimit(secs));
            }
        }
        Ok(())
    }

    /// The time limit as a [`Duration`], `None` if unset or not representable
    /// as one (which [`AgentConfig::validate`] rejects).
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }

    pub fn termination_condition(&self) -> TerminationCondition {
        TerminationCondition::new(self.step_limit, self.time_limit())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Initial bound must be positive, got {0}")]
    InvalidBound(f64),
    #[error("Time limit must be a non-negative, finite number of seconds, got {0}")]
    InvalidTimeLimit(f64),
}
