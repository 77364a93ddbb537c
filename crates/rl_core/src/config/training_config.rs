//! Training Configuration

use serde::{Deserialize, Serialize};

/// Gym session parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Training is refused below this energy (default: 20)
    pub min_energy: u8,
    /// Energy spent per session (default: 15)
    pub energy_cost: u8,
    /// Flat experience per session (default: 3)
    pub experience_gain: u32,
    /// Base of the improvement roll, added to U(0,1) (default: 0.5)
    pub base_improvement: f32,
    /// Smallest improvement a session can give (default: 0.1)
    pub min_improvement: f32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_energy: 20,
            energy_cost: 15,
            experience_gain: 3,
            base_improvement: 0.5,
            min_improvement: 0.1,
        }
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_energy > 100 || self.energy_cost > 100 {
            return Err("training energy values must be within 0..=100".into());
        }
        if self.min_improvement < 0.0 || self.base_improvement < 0.0 {
            return Err("training improvements must not be negative".into());
        }
        Ok(())
    }
}
