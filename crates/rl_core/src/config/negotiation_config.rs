//! Negotiation Configuration

use serde::{Deserialize, Serialize};

/// Purse, acceptance and renegotiation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    // === Purse ===
    /// Purse before multipliers (default: 10000)
    pub base_purse: f64,
    /// Random purse multiplier range (default: 0.8..1.2)
    pub purse_variance: (f64, f64),

    // === Acceptance ===
    /// Starting acceptance chance (default: 0.4)
    pub base_acceptance: f32,
    /// Popularity gap that moves acceptance (default: 20)
    pub popularity_gap: f32,
    /// Acceptance shift for a popularity gap (default: 0.2)
    pub popularity_shift: f32,
    /// Skill gap that moves acceptance (default: 15)
    pub skill_gap: f32,
    /// Acceptance shift for a skill gap (default: 0.3)
    pub skill_shift: f32,
    /// Purses above this are attractive (default: 50000)
    pub high_purse: u64,
    /// Acceptance bonus for an attractive purse (default: 0.2)
    pub high_purse_bonus: f32,
    /// Purses below this are insulting (default: 20000)
    pub low_purse: u64,
    /// Acceptance penalty for an insulting purse (default: 0.1)
    pub low_purse_penalty: f32,
    /// Acceptance clamp (default: 0.1..0.9)
    pub acceptance_bounds: (f32, f32),

    // === Renegotiation ===
    /// Purse raise per renegotiation (default: 0.15)
    pub renegotiation_raise: f64,
    /// Renegotiations allowed before the offer is withdrawn (default: 3)
    pub max_renegotiations: u32,
    /// Acceptance lost per prior renegotiation (default: 0.1)
    pub renegotiation_penalty: f32,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            base_purse: 10_000.0,
            purse_variance: (0.8, 1.2),

            base_acceptance: 0.4,
            popularity_gap: 20.0,
            popularity_shift: 0.2,
            skill_gap: 15.0,
            skill_shift: 0.3,
            high_purse: 50_000,
            high_purse_bonus: 0.2,
            low_purse: 20_000,
            low_purse_penalty: 0.1,
            acceptance_bounds: (0.1, 0.9),

            renegotiation_raise: 0.15,
            max_renegotiations: 3,
            renegotiation_penalty: 0.1,
        }
    }
}

impl NegotiationConfig {
    pub fn validate(&self) -> Result<(), String> {
        let (lo, hi) = self.purse_variance;
        if lo <= 0.0 || lo >= hi {
            return Err("negotiation.purse_variance must be a positive, non-empty range".into());
        }
        let (lo, hi) = self.acceptance_bounds;
        super::check_probability("negotiation.acceptance_bounds.0", lo)?;
        super::check_probability("negotiation.acceptance_bounds.1", hi)?;
        if lo > hi {
            return Err("negotiation.acceptance_bounds are inverted".into());
        }
        super::check_probability("negotiation.base_acceptance", self.base_acceptance)?;
        if self.renegotiation_raise < 0.0 {
            return Err("negotiation.renegotiation_raise must not be negative".into());
        }
        Ok(())
    }
}
