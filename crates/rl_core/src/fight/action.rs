// Fight action catalog
use crate::config::{FightConfig, SuccessPolicy};
use crate::fighter::Fighter;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Action category; drives scoring, success formula and commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionCategory {
    Aggressive,
    Tactical,
    Defensive,
    Risky,
}

impl ActionCategory {
    /// Points banked when the action lands.
    pub fn points(&self) -> u32 {
        match self {
            ActionCategory::Risky => 3,
            ActionCategory::Aggressive => 2,
            ActionCategory::Tactical | ActionCategory::Defensive => 1,
        }
    }
}

/// A move the player can choose in a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightAction {
    pub id: String,
    pub text: String,
    pub category: ActionCategory,
    pub stamina_cost: u8,
    /// Table chance, used directly under the fixed policy
    pub success_chance: f32,
}

impl FightAction {
    fn from_row(row: &ActionRow) -> Self {
        let (id, text, category, stamina_cost, success_chance) = *row;
        Self { id: id.to_string(), text: text.to_string(), category, stamina_cost, success_chance }
    }

    pub fn is_affordable(&self, stamina: f32) -> bool {
        stamina >= self.stamina_cost as f32
    }
}

/// Which table the round's actions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSet {
    Standard,
    Alternative,
    LowStamina,
}

type ActionRow = (&'static str, &'static str, ActionCategory, u8, f32);

const STANDARD_ACTIONS: [ActionRow; 4] = [
    ("A", "Throw a powerful uppercut", ActionCategory::Aggressive, 18, 0.55),
    ("B", "Circle and jab", ActionCategory::Tactical, 10, 0.70),
    ("C", "Bob and weave defensively", ActionCategory::Defensive, 7, 0.75),
    ("D", "Go for a knockout combo", ActionCategory::Risky, 25, 0.35),
];

const ALTERNATIVE_ACTIONS: [ActionRow; 4] = [
    ("A", "Body shot combination", ActionCategory::Aggressive, 16, 0.60),
    ("B", "Feint and cross", ActionCategory::Tactical, 12, 0.65),
    ("C", "Clinch and rest", ActionCategory::Defensive, 5, 0.80),
    ("D", "All-out blitz attack", ActionCategory::Risky, 22, 0.40),
];

const LOW_STAMINA_ACTIONS: [ActionRow; 4] = [
    ("A", "Conserve energy, light jabs", ActionCategory::Tactical, 8, 0.60),
    ("B", "Try to tie up opponent", ActionCategory::Defensive, 5, 0.75),
    ("C", "Desperate haymaker", ActionCategory::Risky, 15, 0.30),
    ("D", "Focus on footwork", ActionCategory::Defensive, 6, 0.70),
];

impl ActionSet {
    pub fn actions(&self) -> Vec<FightAction> {
        let rows: &[ActionRow] = match self {
            ActionSet::Standard => &STANDARD_ACTIONS,
            ActionSet::Alternative => &ALTERNATIVE_ACTIONS,
            ActionSet::LowStamina => &LOW_STAMINA_ACTIONS,
        };
        rows.iter().map(FightAction::from_row).collect()
    }
}

/// Picks the table for the current stamina. The two normal tables are
/// equally likely and differ only cosmetically.
pub fn select_action_set(stamina: f32, config: &FightConfig, rng: &mut impl Rng) -> ActionSet {
    if stamina < config.low_stamina_threshold as f32 {
        ActionSet::LowStamina
    } else if rng.gen_bool(0.5) {
        ActionSet::Standard
    } else {
        ActionSet::Alternative
    }
}

pub fn available_actions(stamina: f32, config: &FightConfig, rng: &mut impl Rng) -> Vec<FightAction> {
    select_action_set(stamina, config, rng).actions()
}

/// Stat-derived chance before stamina scaling.
pub fn base_chance(fighter: &Fighter, category: ActionCategory) -> f32 {
    let experience = fighter.experience as f32;
    match category {
        ActionCategory::Aggressive => (fighter.power + fighter.speed) / 200.0 + 0.1,
        ActionCategory::Tactical => (fighter.technique + experience) / 200.0 + 0.2,
        ActionCategory::Defensive => (fighter.defense + experience) / 200.0 + 0.3,
        ActionCategory::Risky => fighter.power / 200.0 + 0.1,
    }
}

/// Success chance of `action` for `fighter` under the configured policy.
pub fn success_chance(fighter: &Fighter, action: &FightAction, config: &FightConfig) -> f32 {
    let cap = config.success_cap;
    match config.success_policy {
        SuccessPolicy::Fixed => action.success_chance.clamp(0.0, cap),
        SuccessPolicy::StatDerived => {
            let stamina_factor = fighter.stamina.clamp(0.0, 100.0) / 100.0;
            let base = base_chance(fighter, action.category).clamp(0.0, cap);
            (base * stamina_factor).clamp(0.0, cap)
        }
    }
}
