// Division rankings table and ranked challenges
use crate::error::Declined;
use crate::fighter::{rank_status, Division, Fighter, SocialMedia, RANKED_PLACES};
use rand::Rng;
use serde::Serialize;

pub const CHAMPION_NAME: &str = "Marcus Johnson";
/// Ranked fighters may challenge anyone this many places away
pub const MAX_CHALLENGE_GAP: u32 = 3;

/// (name, wins, losses, ko, popularity) of ranks #2-#5
const CONTENDERS: [(&str, u32, u32, u32, f32); 4] = [
    ("Rico Martinez", 22, 1, 18, 85.0),
    ("Tommy Thompson", 20, 2, 15, 80.0),
    ("Viktor Petrov", 18, 0, 14, 75.0),
    ("Carlos Rodriguez", 19, 3, 12, 70.0),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFighter {
    pub rank: u32,
    pub fighter: Fighter,
    /// Title held, champion only
    pub belt: Option<String>,
    pub is_player: bool,
}

impl RankedFighter {
    pub fn is_champion(&self) -> bool {
        self.belt.is_some()
    }
}

fn champion(division: Division) -> Fighter {
    Fighter {
        name: CHAMPION_NAME.to_string(),
        age: 28,
        division,
        wins: 25,
        losses: 0,
        ko: 20,
        unranked_wins: 0,
        power: 95.0,
        speed: 90.0,
        defense: 92.0,
        stamina: 100.0,
        technique: 95.0,
        mental: 90.0,
        experience: 95,
        popularity: 95.0,
        energy: 100,
        money: 5_000_000,
        weeks_since_last_fight: 2,
        injuries: Vec::new(),
        facial_damage: 0.0,
        social_media: SocialMedia {
            followers: 2_500_000,
            total_posts: 450,
            total_likes: 1_200_000,
            total_comments: 85_000,
            total_shares: 15_000,
        },
    }
}

fn contender(
    (name, wins, losses, ko, popularity): (&str, u32, u32, u32, f32),
    division: Division,
    rng: &mut impl Rng,
) -> Fighter {
    let mut roll = |base: u32, spread: u32| (base + rng.gen_range(0..spread)) as f32;
    let stamina = roll(90, 10);
    let power = roll(80, 15);
    let speed = roll(80, 15);
    let defense = roll(80, 15);
    let technique = roll(75, 20);
    let mental = roll(75, 20);
    let experience = roll(70, 20) as u32;

    Fighter {
        name: name.to_string(),
        age: 24 + rng.gen_range(0..8u8),
        division,
        wins,
        losses,
        ko,
        unranked_wins: 0,
        power,
        speed,
        defense,
        stamina,
        technique,
        mental,
        experience,
        popularity,
        energy: 100,
        money: 500_000 + rng.gen_range(0..1_000_000u64),
        weeks_since_last_fight: rng.gen_range(0..4u32),
        injuries: Vec::new(),
        facial_damage: 0.0,
        social_media: SocialMedia {
            followers: 100_000 + rng.gen_range(0..500_000u64),
            total_posts: 100 + rng.gen_range(0..200u64),
            total_likes: 50_000 + rng.gen_range(0..200_000u64),
            total_comments: 5_000 + rng.gen_range(0..20_000u64),
            total_shares: 1_000 + rng.gen_range(0..5_000u64),
        },
    }
}

/// The division's top of the table, with the player slotted in when ranked.
///
/// Sorted by rank; a player sharing a rank with a listed fighter comes after them.
pub fn division_rankings(player: &Fighter, rng: &mut impl Rng) -> Vec<RankedFighter> {
    let division = player.division;
    let mut table = vec![RankedFighter {
        rank: 1,
        fighter: champion(division),
        belt: Some(format!("{division} World Champion")),
        is_player: false,
    }];
    for (index, row) in CONTENDERS.iter().enumerate() {
        table.push(RankedFighter {
            rank: index as u32 + 2,
            fighter: contender(*row, division, rng),
            belt: None,
            is_player: false,
        });
    }

    if let Some(rank) = rank_status(player).rank() {
        table.push(RankedFighter { rank, fighter: player.clone(), belt: None, is_player: true });
    }

    table.sort_by_key(|entry| entry.rank);
    table.truncate(RANKED_PLACES as usize);
    table
}

/// Ranked players may challenge fighters within three places, never their own rank.
pub fn check_challenge(player: &Fighter, target_rank: u32) -> Result<(), Declined> {
    let player_rank = rank_status(player).rank().ok_or(Declined::NotRanked)?;
    let gap = player_rank.abs_diff(target_rank);
    if gap == 0 || gap > MAX_CHALLENGE_GAP {
        return Err(Declined::ChallengeOutOfRange {
            player: player_rank,
            target: target_rank,
            max_gap: MAX_CHALLENGE_GAP,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{create_fighter, FightingStyle};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ranked_player(wins: u32, experience: u32, popularity: f32) -> Fighter {
        let mut fighter =
            create_fighter("Contender", 26, Division::Heavyweight, FightingStyle::Slugger).unwrap();
        fighter.wins = wins;
        fighter.experience = experience;
        fighter.popularity = popularity;
        fighter
    }

    #[test]
    fn test_table_without_player() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let table = division_rankings(&ranked_player(2, 0, 10.0), &mut rng);
        assert_eq!(table.len(), 5);
        assert!(table[0].is_champion());
        assert_eq!(table[0].fighter.name, CHAMPION_NAME);
        assert_eq!(table[0].belt.as_deref(), Some("Heavyweight World Champion"));
        assert_eq!(table[1].fighter.name, "Rico Martinez");
        assert!(table.iter().all(|e| !e.is_player));
        for entry in &table[1..] {
            assert!((80.0..95.0).contains(&entry.fighter.power));
            assert!((70..90).contains(&entry.fighter.experience));
        }
    }

    #[test]
    fn test_ranked_player_is_listed() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        // max(6, 20 - 6) = 14, minus 5 and 2 -> #7
        let player = ranked_player(12, 50, 45.0);
        let table = division_rankings(&player, &mut rng);
        let me = table.iter().find(|e| e.is_player).unwrap();
        assert_eq!(me.rank, 7);
        assert_eq!(table.last().unwrap().rank, 7);
    }

    #[test]
    fn test_challenge_window() {
        let player = ranked_player(12, 50, 45.0); // #7
        assert!(check_challenge(&player, 4).is_ok());
        assert!(check_challenge(&player, 10).is_ok());
        assert!(matches!(
            check_challenge(&player, 3),
            Err(Declined::ChallengeOutOfRange { player: 7, target: 3, max_gap: 3 })
        ));
        assert!(check_challenge(&player, 7).is_err());
        assert_eq!(check_challenge(&ranked_player(4, 90, 90.0), 2), Err(Declined::NotRanked));
    }
}
