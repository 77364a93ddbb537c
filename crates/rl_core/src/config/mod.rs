//! # Career Configuration Module
//!
//! All tuning constants of the engine live here, grouped per concern.
//! Every field has a default, so a JSON document only needs the values it
//! overrides:
//!
//! ```rust
//! use rl_core::config::CareerConfig;
//!
//! let config = CareerConfig::from_json(r#"{ "fight": { "max_rounds": 12 } }"#).unwrap();
//! assert_eq!(config.fight.max_rounds, 12);
//! assert_eq!(config.training.energy_cost, 15);
//! ```

mod fight_config;
mod negotiation_config;
mod progression_config;
mod training_config;

pub use fight_config::{FightConfig, InjuryChances, SuccessPolicy};
pub use negotiation_config::NegotiationConfig;
pub use progression_config::ProgressionConfig;
pub use training_config::TrainingConfig;

use crate::error::{CareerError, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs};

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "RL_CAREER_CONFIG_PATH";

/// Full engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CareerConfig {
    pub fight: FightConfig,
    pub training: TrainingConfig,
    pub career: ProgressionConfig,
    pub negotiation: NegotiationConfig,
}

impl CareerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CareerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by `RL_CAREER_CONFIG_PATH`, or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        tracing::info!("loaded career config from {CONFIG_PATH_ENV}='{path}'");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.fight
            .validate()
            .and_then(|_| self.training.validate())
            .and_then(|_| self.career.validate())
            .and_then(|_| self.negotiation.validate())
            .map_err(CareerError::InvalidConfig)
    }
}

pub(crate) fn check_probability(name: &str, p: f32) -> std::result::Result<(), String> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(format!("{name} must be a probability in 0..=1, got {p}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CareerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            CareerConfig::from_json(r#"{ "negotiation": { "max_renegotiations": 5 } }"#).unwrap();
        assert_eq!(config.negotiation.max_renegotiations, 5);
        assert_eq!(config.negotiation.base_purse, 10_000.0);
        assert_eq!(config.fight.max_rounds, 10);
        assert_eq!(config.fight.success_policy, SuccessPolicy::StatDerived);
    }

    #[test]
    fn test_success_policy_from_json() {
        let config = CareerConfig::from_json(r#"{ "fight": { "success_policy": "fixed" } }"#).unwrap();
        assert_eq!(config.fight.success_policy, SuccessPolicy::Fixed);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let err = CareerConfig::from_json(r#"{ "career": { "challenge_chance": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, CareerError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = CareerConfig::from_json("{ fight: ").unwrap_err();
        assert!(matches!(err, CareerError::Json(_)));
    }
}
