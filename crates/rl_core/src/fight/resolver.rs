// Random outcome resolution: success draws, round intensity, injuries
use crate::config::FightConfig;
use crate::fight::action::{ActionCategory, FightAction};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One side of the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    Player,
    Opponent,
}

/// How heated the fight is; grows with the round number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
    Extreme,
}

impl Intensity {
    pub fn for_round(round: u8) -> Self {
        match round {
            r if r > 8 => Intensity::Extreme,
            r if r > 6 => Intensity::High,
            r if r > 3 => Intensity::Medium,
            _ => Intensity::Low,
        }
    }

    pub fn injury_chance(&self, config: &FightConfig) -> f32 {
        let chances = &config.injury_chances;
        match self {
            Intensity::Low => chances.low,
            Intensity::Medium => chances.medium,
            Intensity::High => chances.high,
            Intensity::Extreme => chances.extreme,
        }
    }
}

/// Draws `true` with probability `chance` (clamped into 0..=1).
pub fn resolve(chance: f32, rng: &mut impl Rng) -> bool {
    let chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
    rng.gen::<f32>() < chance
}

/// Who would be hurt if the injury roll fires for this exchange.
pub fn injury_target(action: &FightAction, success: bool, config: &FightConfig) -> Option<Corner> {
    if success && action.category == ActionCategory::Aggressive {
        Some(Corner::Opponent)
    } else if !success && action.stamina_cost > config.self_injury_cost_threshold {
        Some(Corner::Player)
    } else {
        None
    }
}

const PLAYER_INJURIES: [&str; 6] = [
    "You feel a sharp pain in your ribs - something might be cracked!",
    "Your left eye is starting to swell shut from repeated punishment!",
    "Blood streams from a cut above your eyebrow, obscuring your vision!",
    "Your nose feels like it might be broken - breathing becomes difficult!",
    "A deep cut on your cheek opens up, sending blood down your face!",
    "Your jaw throbs with pain from that crushing blow!",
];

const OPPONENT_INJURIES: [&str; 6] = [
    "Your opponent's eye is nearly swollen shut now!",
    "Blood pours from your opponent's nose - it's definitely broken!",
    "A nasty cut opens above your opponent's eye!",
    "Your opponent's lip is split and bleeding heavily!",
    "Your opponent's cheek is already showing serious swelling!",
    "Your opponent winces and holds his ribs - something's wrong there!",
];

/// An injury suffered during an exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryEvent {
    pub corner: Corner,
    pub description: String,
}

/// Independent injury roll gated by intensity. Only descriptive: the caller
/// decides what the injury does.
pub fn roll_injury(
    action: &FightAction,
    success: bool,
    intensity: Intensity,
    config: &FightConfig,
    rng: &mut impl Rng,
) -> Option<InjuryEvent> {
    if !resolve(intensity.injury_chance(config), rng) {
        return None;
    }
    let corner = injury_target(action, success, config)?;
    let pool = match corner {
        Corner::Player => &PLAYER_INJURIES,
        Corner::Opponent => &OPPONENT_INJURIES,
    };
    let description = pool[rng.gen_range(0..pool.len())].to_string();
    Some(InjuryEvent { corner, description })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fight::action::ActionSet;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_intensity_by_round() {
        assert_eq!(Intensity::for_round(1), Intensity::Low);
        assert_eq!(Intensity::for_round(3), Intensity::Low);
        assert_eq!(Intensity::for_round(4), Intensity::Medium);
        assert_eq!(Intensity::for_round(7), Intensity::High);
        assert_eq!(Intensity::for_round(9), Intensity::Extreme);
        assert_eq!(Intensity::for_round(10), Intensity::Extreme);
    }

    #[test]
    fn test_resolve_extremes() {
        let mut low = StepRng::new(0, 0);
        let mut high = StepRng::new(u64::MAX, 0);
        assert!(resolve(0.01, &mut low));
        assert!(!resolve(0.0, &mut low));
        assert!(!resolve(0.99, &mut high));
        assert!(resolve(1.5, &mut high));
        assert!(!resolve(f32::NAN, &mut low));
    }

    #[test]
    fn test_injury_targets() {
        let config = FightConfig::default();
        let actions = ActionSet::Standard.actions();
        let (uppercut, jab, risky) = (&actions[0], &actions[1], &actions[3]);

        assert_eq!(injury_target(uppercut, true, &config), Some(Corner::Opponent));
        assert_eq!(injury_target(uppercut, false, &config), Some(Corner::Player));
        assert_eq!(injury_target(risky, true, &config), None);
        assert_eq!(injury_target(risky, false, &config), Some(Corner::Player));
        assert_eq!(injury_target(jab, false, &config), None);
    }

    #[test]
    fn test_roll_injury_fires_when_forced() {
        let config = FightConfig::default();
        let uppercut = &ActionSet::Standard.actions()[0];
        let mut always = StepRng::new(0, 0);
        let injury = roll_injury(uppercut, true, Intensity::Low, &config, &mut always).unwrap();
        assert_eq!(injury.corner, Corner::Opponent);
        assert!(OPPONENT_INJURIES.contains(&injury.description.as_str()));

        let mut never = StepRng::new(u64::MAX, 0);
        assert!(roll_injury(uppercut, true, Intensity::Extreme, &config, &mut never).is_none());
    }
}
