// Synthetic opponent generator
use crate::fighter::{clamp_stat, Division, Fighter, SocialMedia};
use rand::Rng;

const SYNTHETIC_NAMES: [&str; 5] =
    ["Mike Johnson", "Carlos Ramirez", "Tommy Wilson", "Angelo Bruno", "Vladimir Petrov"];

/// Player wins per progression level
pub const WINS_PER_LEVEL: u32 = 5;
/// Stat points added per progression level
pub const STAT_BONUS_PER_LEVEL: f32 = 2.0;
/// Opponent wins added per progression level
pub const WINS_BONUS_PER_LEVEL: u32 = 3;

pub fn progression_level(player: &Fighter) -> u32 {
    player.wins / WINS_PER_LEVEL
}

/// Produces a journeyman opponent for `division`, tougher as `level` rises.
pub fn generate_opponent(division: Division, level: u32, rng: &mut impl Rng) -> Fighter {
    let name = SYNTHETIC_NAMES[rng.gen_range(0..SYNTHETIC_NAMES.len())];
    let age = 20 + rng.gen_range(0..15u8);
    let wins = rng.gen_range(0..10u32) + level * WINS_BONUS_PER_LEVEL;
    let losses = rng.gen_range(0..3u32);
    let ko = rng.gen_range(0..5u32).min(wins);
    let popularity = clamp_stat(20.0 + rng.gen::<f32>() * 60.0);
    let experience = rng.gen_range(0..50u32);

    let bonus = level as f32 * STAT_BONUS_PER_LEVEL;
    let mut roll = |base: f32| clamp_stat(base + rng.gen::<f32>() * 20.0 + bonus);
    let power = roll(60.0);
    let speed = roll(60.0);
    let defense = roll(60.0);
    let technique = roll(55.0);
    let mental = roll(55.0);

    tracing::debug!(name, level, wins, "generated opponent");

    Fighter {
        name: name.to_string(),
        age,
        division,
        wins,
        losses,
        ko,
        unranked_wins: 0,
        power,
        speed,
        defense,
        stamina: 100.0,
        technique,
        mental,
        experience: (experience as f32 + bonus).min(100.0) as u32,
        popularity,
        energy: 100,
        money: 0,
        weeks_since_last_fight: 0,
        injuries: Vec::new(),
        facial_damage: 0.0,
        social_media: SocialMedia::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_level_zero_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..200 {
            let opponent = generate_opponent(Division::Middleweight, 0, &mut rng);
            assert!(SYNTHETIC_NAMES.contains(&opponent.name.as_str()));
            assert!((20..35).contains(&opponent.age));
            assert!(opponent.wins < 10);
            assert!(opponent.losses < 3);
            assert!((60.0..=80.0).contains(&opponent.power));
            assert!((55.0..=75.0).contains(&opponent.mental));
            assert!((20.0..=80.0).contains(&opponent.popularity));
            assert_eq!(opponent.division, Division::Middleweight);
        }
    }

    #[test]
    fn test_progression_scales_opponent() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..100 {
            let veteran = generate_opponent(Division::Heavyweight, 4, &mut rng);
            assert!(veteran.wins >= 12);
            assert!(veteran.power >= 68.0);
            assert!(veteran.power <= 100.0);
        }
    }

    #[test]
    fn test_stats_stay_bounded_at_high_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let opponent = generate_opponent(Division::Lightweight, 40, &mut rng);
        for value in [opponent.power, opponent.speed, opponent.defense, opponent.technique, opponent.mental] {
            assert_eq!(value, 100.0);
        }
        assert!(opponent.experience <= 100);
    }
}
