//! Batch run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{BattleConfig, SimError};
use crate::policy::{DecisionPolicy, PolicyKind, UtilityWeights};

/// Settings for a batch of simulated battles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Members per team.
    pub team_size: usize,

    /// Battles per matchup.
    pub trials: u32,

    /// Level every character is built at.
    pub level: u32,

    /// Master seed. Each matchup derives its own stream from it.
    pub seed: u64,

    /// Decision policy used by both sides.
    pub policy: PolicyKind,

    /// Weights for the utility policy. Ignored by the uniform policy.
    pub weights: UtilityWeights,

    /// Log progress every this many battles. 0 disables progress logs.
    pub progress_interval: usize,

    /// Template keys to draw teams from. Defaults to the whole catalog.
    pub roster: Option<Vec<String>>,

    pub battle: BattleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            team_size: 3,
            trials: 100,
            level: 10,
            seed: 0,
            policy: PolicyKind::default(),
            weights: UtilityWeights::default(),
            progress_interval: 1000,
            roster: None,
            battle: BattleConfig::default(),
        }
    }
}

impl SimConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_team_size(mut self, size: usize) -> Self {
        self.team_size = size;
        self
    }

    #[must_use]
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: UtilityWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Restrict teams to the given template keys.
    #[must_use]
    pub fn with_roster<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.roster = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_battle(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }

    /// Check settings that don't depend on the catalog.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.team_size == 0 {
            return Err(SimError::InvalidConfig("team size must be at least 1".into()));
        }
        if self.trials == 0 {
            return Err(SimError::InvalidConfig("trials must be at least 1".into()));
        }
        if let Some(roster) = &self.roster {
            if roster.len() < self.team_size {
                return Err(SimError::InvalidConfig(format!(
                    "team size {} exceeds roster of {}",
                    self.team_size,
                    roster.len()
                )));
            }
        }
        self.battle.validate()
    }

    /// The configured policy.
    #[must_use]
    pub fn build_policy(&self) -> Box<dyn DecisionPolicy> {
        self.policy.build(&self.weights)
    }
}
