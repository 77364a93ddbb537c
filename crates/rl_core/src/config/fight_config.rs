//! Fight Configuration

use serde::{Deserialize, Serialize};

/// How a chosen action's success chance is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuccessPolicy {
    /// Derived from fighter attributes and action category, scaled by stamina.
    #[default]
    StatDerived,
    /// The action table's fixed chance.
    Fixed,
}

/// Per-intensity injury probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryChances {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
    pub extreme: f32,
}

impl Default for InjuryChances {
    fn default() -> Self {
        Self { low: 0.05, medium: 0.10, high: 0.20, extreme: 0.35 }
    }
}

/// Fight state machine parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FightConfig {
    // === Termination ===
    /// Last round of a fight (default: 10)
    pub max_rounds: u8,
    /// Fight stops once player stamina drops to this value (default: 20)
    pub stamina_end_threshold: u8,

    // === Action Catalog ===
    /// Below this stamina only the low-stamina set is offered (default: 30)
    pub low_stamina_threshold: u8,
    /// Success chance policy (default: stat_derived)
    pub success_policy: SuccessPolicy,
    /// Upper bound of any success chance (default: 0.9)
    pub success_cap: f32,

    // === Opponent Model ===
    /// Chance the opponent banks a point each round (default: 0.5)
    pub opponent_point_chance: f32,

    // === Injuries ===
    pub injury_chances: InjuryChances,
    /// A failed action costing more than this can injure the player (default: 15)
    pub self_injury_cost_threshold: u8,
    /// Facial damage added per injury carried out of the ring (default: 10)
    pub facial_damage_per_injury: f32,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            stamina_end_threshold: 20,

            low_stamina_threshold: 30,
            success_policy: SuccessPolicy::StatDerived,
            success_cap: 0.9,

            opponent_point_chance: 0.5,

            injury_chances: InjuryChances::default(),
            self_injury_cost_threshold: 15,
            facial_damage_per_injury: 10.0,
        }
    }
}

impl FightConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_rounds == 0 {
            return Err("fight.max_rounds must be at least 1".into());
        }
        if self.stamina_end_threshold > 100 || self.low_stamina_threshold > 100 {
            return Err("fight stamina thresholds must be within 0..=100".into());
        }
        super::check_probability("fight.success_cap", self.success_cap)?;
        super::check_probability("fight.opponent_point_chance", self.opponent_point_chance)?;
        let chances = &self.injury_chances;
        for (name, p) in [
            ("fight.injury_chances.low", chances.low),
            ("fight.injury_chances.medium", chances.medium),
            ("fight.injury_chances.high", chances.high),
            ("fight.injury_chances.extreme", chances.extreme),
        ] {
            super::check_probability(name, p)?;
        }
        if self.facial_damage_per_injury < 0.0 {
            return Err("fight.facial_damage_per_injury must not be negative".into());
        }
        Ok(())
    }
}
