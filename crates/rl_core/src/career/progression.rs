//! Career progression: how fights, gym sessions and the week clock change a Fighter.
//!
//! Every function takes the current Fighter by reference and returns a new
//! one; declined requests return the reason and leave the input untouched.

use crate::config::{FightConfig, ProgressionConfig, TrainingConfig};
use crate::error::Declined;
use crate::fight::{resolve, FightSummary, VictoryMethod};
use crate::fighter::{clamp_stat, Fighter, StatId};
use crate::opponent::{generate_opponent, progression_level};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Experience earned by a win for a fighter with `wins` victories.
pub fn win_experience(wins: u32, config: &ProgressionConfig) -> u32 {
    config.win_experience.saturating_sub(wins / 5).max(config.win_min_experience)
}

/// Popularity earned by a win at the current `popularity`.
pub fn win_popularity(popularity: f32, config: &ProgressionConfig) -> f32 {
    let tier = (popularity.max(0.0) / 20.0).floor();
    (config.win_popularity - tier).max(config.win_min_popularity)
}

/// Social-media gain scale for a result against `opponent`.
pub fn social_gain(base_gain: f32, popularity: f32, opponent: &Fighter) -> f32 {
    let opponent_profile = (opponent.wins as f32 + opponent.popularity) / 100.0;
    (base_gain * (popularity / 100.0) * opponent_profile).max(0.0)
}

/// Record, experience, popularity and social effects of a finished fight.
pub fn apply_fight_result(
    fighter: &Fighter,
    opponent: &Fighter,
    won: bool,
    config: &ProgressionConfig,
    rng: &mut impl Rng,
) -> Fighter {
    let mut next = fighter.clone();
    let popularity_before = fighter.popularity;

    let (lo, hi) = if won { config.win_social_gain } else { config.loss_social_gain };
    let base_gain = rng.gen_range(lo..hi);

    if won {
        next.wins += 1;
        if opponent.wins < config.unranked_opponent_wins {
            next.unranked_wins += 1;
        }
        next.experience += win_experience(next.wins, config);
        next.popularity = clamp_stat(popularity_before + win_popularity(popularity_before, config));
    } else {
        next.losses += 1;
        next.experience += config.loss_experience;
    }
    next.stamina = 100.0;
    next.weeks_since_last_fight = 0;

    let gain = social_gain(base_gain, popularity_before, opponent);
    let social = &mut next.social_media;
    social.followers += gain as u64;
    social.total_likes += (gain * 5.0) as u64;
    social.total_comments += (gain * 0.5) as u64;
    social.total_shares += (gain * 0.25) as u64;

    tracing::info!(
        fighter = %next.name,
        opponent = %opponent.name,
        won,
        record = %next.record_line(),
        experience = next.experience,
        popularity = next.popularity,
        "fight result applied"
    );
    next
}

/// Injuries, knockouts and purse money carried out of the ring.
pub fn apply_fight_aftermath(
    fighter: &Fighter,
    summary: &FightSummary,
    purse: Option<u64>,
    config: &FightConfig,
) -> Fighter {
    let mut next = fighter.clone();
    for injury in &summary.player_injuries {
        next.injuries.push(injury.clone());
        next.facial_damage += config.facial_damage_per_injury;
    }
    if summary.won && summary.method == VictoryMethod::Knockout {
        next.ko += 1;
    }
    if let Some(purse) = purse {
        next.money = next.money.saturating_add(purse);
    }
    next.clamp_bounded();
    next
}

/// Outcome of a gym session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub stat: StatId,
    pub improvement: f32,
    pub new_value: f32,
    pub message: String,
}

/// Diminishing returns near the cap.
pub fn difficulty_modifier(current: f32) -> f32 {
    match current {
        v if v > 90.0 => 0.1,
        v if v > 80.0 => 0.3,
        v if v > 70.0 => 0.5,
        v if v > 60.0 => 0.7,
        _ => 1.0,
    }
}

pub fn apply_training(
    fighter: &Fighter,
    stat: StatId,
    config: &TrainingConfig,
    rng: &mut impl Rng,
) -> Result<(Fighter, TrainingReport), Declined> {
    if fighter.energy < config.min_energy {
        tracing::debug!(energy = fighter.energy, "training declined");
        return Err(Declined::TooExhausted { energy: fighter.energy, required: config.min_energy });
    }

    let current = fighter.stat(stat);
    let roll = config.base_improvement + rng.gen::<f32>();
    let improvement = (roll * difficulty_modifier(current)).max(config.min_improvement);

    let mut next = fighter.clone();
    next.set_stat(stat, current + improvement);
    next.experience += config.experience_gain;
    next.energy = next.energy.saturating_sub(config.energy_cost);

    let new_value = next.stat(stat);
    let message = format!(
        "{} complete! {} improved by {:.1} to {:.1}",
        stat.training_name(),
        stat,
        new_value - current,
        new_value
    );
    tracing::info!(fighter = %next.name, %stat, improvement, new_value, energy = next.energy, "trained");

    Ok((next, TrainingReport { stat, improvement: new_value - current, new_value, message }))
}

/// Trains a stat named by the caller; unknown names are declined without touching the fighter.
pub fn apply_training_by_name(
    fighter: &Fighter,
    stat: &str,
    config: &TrainingConfig,
    rng: &mut impl Rng,
) -> Result<(Fighter, TrainingReport), Declined> {
    let stat_id = stat.trim().parse::<StatId>().map_err(|_| Declined::UnknownStat(stat.trim().to_string()))?;
    apply_training(fighter, stat_id, config, rng)
}

/// Energy regain, recovery clock, healing and incoming challenges for one week.
pub fn apply_week_advance(
    fighter: &Fighter,
    config: &ProgressionConfig,
    rng: &mut impl Rng,
) -> (Fighter, Vec<Fighter>) {
    let mut next = fighter.clone();
    next.energy = next.energy.saturating_add(config.weekly_energy).min(100);
    next.weeks_since_last_fight += 1;

    if next.is_injured() {
        let healed = next.injuries.remove(0);
        tracing::debug!(fighter = %next.name, %healed, "injury healed");
    }
    next.facial_damage = clamp_stat(next.facial_damage - config.weekly_facial_recovery);

    let mut challenges = Vec::new();
    if next.popularity > config.challenge_min_popularity && resolve(config.challenge_chance, rng) {
        let challenger = generate_opponent(next.division, progression_level(&next), rng);
        tracing::info!(fighter = %next.name, challenger = %challenger.name, "incoming challenge");
        challenges.push(challenger);
    }
    (next, challenges)
}

/// Whether the fighter may step into the ring right now.
pub fn check_fight_eligibility(fighter: &Fighter, config: &ProgressionConfig) -> Result<(), Declined> {
    if fighter.energy < config.fight_min_energy {
        return Err(Declined::InsufficientEnergy {
            energy: fighter.energy,
            required: config.fight_min_energy,
        });
    }
    if fighter.weeks_since_last_fight < config.recovery_weeks {
        return Err(Declined::NeedsRecovery {
            weeks: fighter.weeks_since_last_fight,
            required: config.recovery_weeks,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{create_fighter, Division, FightingStyle};
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rookie() -> Fighter {
        create_fighter("Rookie", 19, Division::Welterweight, FightingStyle::Balanced).unwrap()
    }

    fn opponent(wins: u32, popularity: f32) -> Fighter {
        let mut opponent = rookie();
        opponent.name = "Opponent".into();
        opponent.wins = wins;
        opponent.popularity = popularity;
        opponent
    }

    fn summary(won: bool, method: VictoryMethod, injuries: &[&str]) -> FightSummary {
        FightSummary {
            won,
            method,
            rounds: 6,
            player_score: 5,
            opponent_score: 3,
            player_injuries: injuries.iter().map(|s| s.to_string()).collect(),
            opponent_injuries: Vec::new(),
            closing_commentary: String::new(),
        }
    }

    #[test]
    fn test_win_against_unranked_opponent() {
        let config = ProgressionConfig::default();
        let mut fighter = rookie();
        fighter.stamina = 35.0;
        fighter.weeks_since_last_fight = 3;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let next = apply_fight_result(&fighter, &opponent(4, 40.0), true, &config, &mut rng);
        assert_eq!(next.wins, 1);
        assert_eq!(next.unranked_wins, 1);
        assert_eq!(next.experience, 10);
        assert_eq!(next.popularity, 18.0);
        assert_eq!(next.stamina, 100.0);
        assert_eq!(next.weeks_since_last_fight, 0);
        // 50..150 * 0.1 * 0.44
        let gained = next.social_media.followers - fighter.social_media.followers;
        assert!((2..=6).contains(&gained), "gained {gained}");
        assert!(next.social_media.total_likes >= 5 * gained);
    }

    #[test]
    fn test_win_diminishing_returns() {
        let config = ProgressionConfig::default();
        assert_eq!(win_experience(1, &config), 10);
        assert_eq!(win_experience(10, &config), 8);
        assert_eq!(win_experience(40, &config), 5);
        assert_eq!(win_popularity(10.0, &config), 8.0);
        assert_eq!(win_popularity(65.0, &config), 5.0);
        assert_eq!(win_popularity(100.0, &config), 3.0);

        let mut star = rookie();
        star.popularity = 99.0;
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let next = apply_fight_result(&star, &opponent(8, 70.0), true, &config, &mut rng);
        assert_eq!(next.popularity, 100.0);
        assert_eq!(next.unranked_wins, 0);
    }

    #[test]
    fn test_loss_effects() {
        let config = ProgressionConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let fighter = rookie();
        let next = apply_fight_result(&fighter, &opponent(4, 40.0), false, &config, &mut rng);
        assert_eq!((next.wins, next.losses), (0, 1));
        assert_eq!(next.experience, 2);
        assert_eq!(next.popularity, fighter.popularity);
    }

    #[test]
    fn test_aftermath_persists_injuries_and_pays_purse() {
        let config = FightConfig::default();
        let fighter = rookie();
        let next = apply_fight_aftermath(
            &fighter,
            &summary(true, VictoryMethod::Knockout, &["cut", "swollen eye"]),
            Some(12_500),
            &config,
        );
        assert_eq!(next.injuries, vec!["cut".to_string(), "swollen eye".to_string()]);
        assert_eq!(next.facial_damage, 20.0);
        assert_eq!(next.ko, 1);
        assert_eq!(next.money, 25_000 + 12_500);

        let next = apply_fight_aftermath(&fighter, &summary(false, VictoryMethod::Knockout, &[]), None, &config);
        assert_eq!(next.ko, 0);
        assert_eq!(next.money, 25_000);
        assert!(!next.is_injured());
    }

    #[test]
    fn test_aftermath_caps_facial_damage() {
        let config = FightConfig::default();
        let mut fighter = rookie();
        fighter.facial_damage = 95.0;
        let next = apply_fight_aftermath(
            &fighter,
            &summary(false, VictoryMethod::TechnicalKnockout, &["cut", "broken nose"]),
            None,
            &config,
        );
        assert_eq!(next.facial_damage, 100.0);
        assert!(next.is_injured());
    }

    #[test]
    fn test_training_improves_and_costs_energy() {
        let config = TrainingConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let fighter = rookie();
        let (next, report) = apply_training(&fighter, StatId::Power, &config, &mut rng).unwrap();
        // power 65 -> modifier 0.7, roll 0.5..1.5
        assert!(report.improvement > 0.34 && report.improvement < 1.06);
        assert_eq!(next.power, report.new_value);
        assert_eq!(next.experience, 3);
        assert_eq!(next.energy, 85);
        assert!(report.message.starts_with("Power Training complete!"));
    }

    #[test]
    fn test_exhausted_training_is_declined() {
        let config = TrainingConfig::default();
        let mut fighter = rookie();
        fighter.energy = 15;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let err = apply_training_by_name(&fighter, "power", &config, &mut rng).unwrap_err();
        assert_eq!(err, Declined::TooExhausted { energy: 15, required: 20 });
        assert!(err.to_string().contains("Too exhausted"));
    }

    #[test]
    fn test_unknown_stat_is_declined() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let err = apply_training_by_name(&rookie(), "charisma", &TrainingConfig::default(), &mut rng).unwrap_err();
        assert_eq!(err, Declined::UnknownStat("charisma".into()));
    }

    #[test]
    fn test_improvement_shrinks_near_cap() {
        let config = TrainingConfig::default();
        let mut capped = rookie();
        capped.speed = 95.0;
        let mut fresh = rookie();
        fresh.speed = 50.0;

        for seed in 0..20 {
            let (_, near_cap) =
                apply_training(&capped, StatId::Speed, &config, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
            let (_, low) =
                apply_training(&fresh, StatId::Speed, &config, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
            assert!(near_cap.improvement < low.improvement);
        }
    }

    #[test]
    fn test_training_never_exceeds_cap() {
        let config = TrainingConfig::default();
        let mut fighter = rookie();
        fighter.defense = 99.95;
        let (next, report) = apply_training(&fighter, StatId::Defense, &config, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(next.defense, 100.0);
        assert!((report.improvement - 0.05).abs() < 1e-3);
    }

    #[test]
    fn test_week_advance() {
        let config = ProgressionConfig::default();
        let mut fighter = rookie();
        fighter.energy = 90;
        fighter.injuries = vec!["old cut".into(), "bruised ribs".into()];
        fighter.facial_damage = 25.0;
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let (next, challenges) = apply_week_advance(&fighter, &config, &mut rng);
        assert_eq!(next.energy, 100);
        assert_eq!(next.weeks_since_last_fight, 1);
        assert_eq!(next.injuries, vec!["bruised ribs".to_string()]);
        assert_eq!(next.facial_damage, 15.0);
        // popularity 10 never draws challenges
        assert!(challenges.is_empty());
    }

    #[test]
    fn test_popular_fighter_gets_challenged() {
        let config = ProgressionConfig::default();
        let mut fighter = rookie();
        fighter.popularity = 60.0;
        fighter.wins = 10;
        let (_, challenges) = apply_week_advance(&fighter, &config, &mut StepRng::new(0, 0));
        assert_eq!(challenges.len(), 1);
        assert_eq!(challenges[0].division, Division::Welterweight);
        assert!(challenges[0].wins >= 6);
    }

    #[test]
    fn test_fight_eligibility() {
        let config = ProgressionConfig::default();
        let mut fighter = rookie();
        assert_eq!(
            check_fight_eligibility(&fighter, &config),
            Err(Declined::NeedsRecovery { weeks: 0, required: 2 })
        );
        fighter.weeks_since_last_fight = 2;
        assert!(check_fight_eligibility(&fighter, &config).is_ok());
        fighter.energy = 69;
        assert_eq!(
            check_fight_eligibility(&fighter, &config),
            Err(Declined::InsufficientEnergy { energy: 69, required: 70 })
        );
    }
}
