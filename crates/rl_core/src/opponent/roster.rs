//! Named boxers the player can call out.
//!
//! The roster is static; [`instantiate`] turns an entry into a full
//! [`Fighter`] with some random variance on the derived attributes.

use crate::error::Declined;
use crate::fighter::{clamp_stat, Division, Fighter, SocialMedia};
use rand::Rng;
use serde::Serialize;

/// A roster boxer's fixed record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosterEntry {
    pub name: &'static str,
    pub division: Division,
    pub wins: u32,
    pub losses: u32,
    pub ko: u32,
    pub popularity: f32,
    pub difficulty: &'static str,
}

const fn entry(
    division: Division,
    name: &'static str,
    wins: u32,
    losses: u32,
    ko: u32,
    popularity: f32,
    difficulty: &'static str,
) -> RosterEntry {
    RosterEntry { name, division, wins, losses, ko, popularity, difficulty }
}

use Division::*;

pub const ROSTER: [RosterEntry; 40] = [
    entry(Lightweight, "Gervonta Davis", 28, 0, 26, 95.0, "Champion"),
    entry(Lightweight, "Ryan Garcia", 24, 1, 20, 92.0, "Elite"),
    entry(Lightweight, "Devin Haney", 31, 0, 15, 88.0, "Champion"),
    entry(Lightweight, "Vasyl Lomachenko", 17, 3, 11, 90.0, "Legend"),
    entry(Lightweight, "Shakur Stevenson", 21, 0, 10, 85.0, "Elite"),
    entry(Lightweight, "Isaac Cruz", 25, 2, 17, 75.0, "Contender"),
    entry(Lightweight, "Rolando Romero", 15, 1, 13, 70.0, "Contender"),
    entry(Lightweight, "Frank Martin", 18, 0, 12, 65.0, "Rising"),
    entry(Welterweight, "Errol Spence Jr.", 28, 1, 22, 92.0, "Champion"),
    entry(Welterweight, "Terence Crawford", 40, 0, 31, 95.0, "P4P King"),
    entry(Welterweight, "Jaron Ennis", 31, 0, 28, 85.0, "Elite"),
    entry(Welterweight, "Virgil Ortiz Jr.", 21, 0, 21, 80.0, "Rising Star"),
    entry(Welterweight, "Keith Thurman", 30, 1, 22, 75.0, "Veteran"),
    entry(Welterweight, "Shawn Porter", 31, 4, 17, 78.0, "Veteran"),
    entry(Welterweight, "Yordenis Ugas", 27, 5, 12, 70.0, "Contender"),
    entry(Welterweight, "Danny Garcia", 37, 3, 21, 73.0, "Veteran"),
    entry(Middleweight, "Canelo Alvarez", 60, 2, 39, 100.0, "Superstar"),
    entry(Middleweight, "Gennady Golovkin", 42, 2, 37, 88.0, "Legend"),
    entry(Middleweight, "Jermall Charlo", 32, 0, 22, 82.0, "Champion"),
    entry(Middleweight, "Jaime Munguia", 41, 0, 32, 78.0, "Rising"),
    entry(Middleweight, "Demetrius Andrade", 32, 0, 19, 75.0, "Elite"),
    entry(Middleweight, "Chris Eubank Jr.", 33, 3, 24, 72.0, "Contender"),
    entry(Middleweight, "Erislandy Lara", 29, 3, 17, 68.0, "Veteran"),
    entry(Middleweight, "Austin Williams", 14, 0, 10, 65.0, "Prospect"),
    entry(LightHeavyweight, "Dmitry Bivol", 22, 0, 11, 90.0, "Champion"),
    entry(LightHeavyweight, "Artur Beterbiev", 20, 0, 20, 88.0, "KO King"),
    entry(LightHeavyweight, "Gilberto Ramirez", 46, 1, 30, 75.0, "Contender"),
    entry(LightHeavyweight, "Joe Smith Jr.", 28, 4, 22, 70.0, "Veteran"),
    entry(LightHeavyweight, "Joshua Buatsi", 17, 0, 13, 72.0, "Rising"),
    entry(LightHeavyweight, "Anthony Yarde", 23, 3, 22, 68.0, "Contender"),
    entry(LightHeavyweight, "Callum Johnson", 20, 2, 14, 65.0, "Contender"),
    entry(LightHeavyweight, "Craig Richards", 18, 4, 10, 62.0, "Gatekeeper"),
    entry(Heavyweight, "Tyson Fury", 34, 0, 24, 95.0, "Lineal Champ"),
    entry(Heavyweight, "Oleksandr Usyk", 21, 0, 14, 92.0, "Undisputed"),
    entry(Heavyweight, "Anthony Joshua", 28, 3, 25, 90.0, "Former Champ"),
    entry(Heavyweight, "Deontay Wilder", 43, 3, 42, 88.0, "Bronze Bomber"),
    entry(Heavyweight, "Andy Ruiz Jr.", 35, 2, 22, 75.0, "Former Champ"),
    entry(Heavyweight, "Dillian Whyte", 30, 3, 20, 73.0, "Contender"),
    entry(Heavyweight, "Luis Ortiz", 33, 2, 28, 70.0, "Veteran"),
    entry(Heavyweight, "Joseph Parker", 33, 3, 23, 72.0, "Former Champ"),
];

/// Largest popularity lead a callout target may have
pub const MAX_POPULARITY_GAP: f32 = 40.0;
/// Largest win-count lead a callout target may have
pub const MAX_WINS_GAP: u32 = 15;
/// Floor of a legal callout's acceptance chance
pub const MIN_CALLOUT_ACCEPTANCE: f32 = 0.3;

pub fn division_roster(division: Division) -> impl Iterator<Item = &'static RosterEntry> {
    ROSTER.iter().filter(move |e| e.division == division)
}

/// Case-insensitive lookup by full name.
pub fn find_boxer(name: &str) -> Option<&'static RosterEntry> {
    let name = name.trim();
    ROSTER.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Minimum player wins some tiers insist on.
fn required_wins(difficulty: &str) -> Option<u32> {
    match difficulty {
        "P4P King" => Some(20),
        "Superstar" => Some(25),
        _ => None,
    }
}

/// Rejects matchups that are out of the player's league.
pub fn check_callout(player: &Fighter, boxer: &RosterEntry) -> Result<(), Declined> {
    let out_of_league = |reason: String| Declined::OutOfLeague { name: boxer.name.to_string(), reason };

    let popularity_gap = boxer.popularity - player.popularity;
    if popularity_gap > MAX_POPULARITY_GAP {
        return Err(out_of_league(format!("popularity gap of {popularity_gap:.0}")));
    }
    let wins_gap = boxer.wins.saturating_sub(player.wins);
    if wins_gap > MAX_WINS_GAP {
        return Err(out_of_league(format!("{wins_gap} more wins on their record")));
    }
    if let Some(required) = required_wins(boxer.difficulty) {
        if player.wins < required {
            return Err(out_of_league(format!("a {} needs {required} wins first", boxer.difficulty)));
        }
    }
    Ok(())
}

pub fn callout_acceptance(player: &Fighter, boxer: &RosterEntry) -> f32 {
    (1.0 - (boxer.popularity - player.popularity) / 100.0).max(MIN_CALLOUT_ACCEPTANCE)
}

/// Builds a fighter from a roster entry with 10-30 points of variance.
pub fn instantiate(boxer: &RosterEntry, division: Division, rng: &mut impl Rng) -> Fighter {
    let variation = 10.0 + rng.gen::<f32>() * 20.0;
    let tier_bonus = |tiers: &[&str], bonus: f32| if tiers.contains(&boxer.difficulty) { bonus } else { 0.0 };

    let power = clamp_stat(60.0 + variation + tier_bonus(&["P4P King", "Superstar"], 20.0));
    let speed = clamp_stat(60.0 + variation + tier_bonus(&["Legend"], 15.0));
    let defense = clamp_stat(60.0 + variation + tier_bonus(&["Champion"], 15.0));
    let age = 25 + rng.gen_range(0..10u8);
    let total_posts = 100 + rng.gen_range(0..500u64);

    Fighter {
        name: boxer.name.to_string(),
        age,
        division,
        wins: boxer.wins,
        losses: boxer.losses,
        ko: boxer.ko,
        unranked_wins: 0,
        power,
        speed,
        defense,
        stamina: 100.0,
        technique: clamp_stat(55.0 + variation),
        mental: clamp_stat(55.0 + variation),
        experience: (50 + boxer.wins * 2).min(100),
        popularity: boxer.popularity,
        energy: 100,
        money: 50_000,
        weeks_since_last_fight: 0,
        injuries: Vec::new(),
        facial_damage: 0.0,
        social_media: SocialMedia::from_popularity(boxer.popularity, total_posts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{create_fighter, FightingStyle};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strum::IntoEnumIterator;

    fn player(wins: u32, popularity: f32) -> Fighter {
        let mut fighter =
            create_fighter("Challenger", 25, Division::Welterweight, FightingStyle::Boxer).unwrap();
        fighter.wins = wins;
        fighter.popularity = popularity;
        fighter
    }

    #[test]
    fn test_eight_boxers_per_division() {
        for division in Division::iter() {
            assert_eq!(division_roster(division).count(), 8, "{division}");
        }
    }

    #[test]
    fn test_rookie_is_out_of_league() {
        let crawford = find_boxer("terence crawford").unwrap();
        let err = check_callout(&player(0, 10.0), crawford).unwrap_err();
        assert!(matches!(err, Declined::OutOfLeague { .. }));
    }

    #[test]
    fn test_tier_requires_wins() {
        let king = RosterEntry { wins: 20, ..*find_boxer("Terence Crawford").unwrap() };
        assert!(matches!(
            check_callout(&player(19, 80.0), &king),
            Err(Declined::OutOfLeague { reason, .. }) if reason.contains("20 wins")
        ));
        assert!(check_callout(&player(20, 80.0), &king).is_ok());
        assert!(check_callout(&player(25, 80.0), find_boxer("Terence Crawford").unwrap()).is_ok());
    }

    #[test]
    fn test_wins_gap() {
        let danny = find_boxer("Danny Garcia").unwrap();
        assert!(check_callout(&player(21, 70.0), danny).is_err());
        assert!(check_callout(&player(22, 70.0), danny).is_ok());
    }

    #[test]
    fn test_acceptance_floor() {
        let frank = find_boxer("Frank Martin").unwrap();
        assert!((callout_acceptance(&player(10, 45.0), frank) - 0.8).abs() < 1e-6);
        let canelo = find_boxer("Canelo Alvarez").unwrap();
        assert_eq!(callout_acceptance(&player(0, 10.0), canelo), MIN_CALLOUT_ACCEPTANCE);
        // a less popular boxer than the player is always keen
        assert!(callout_acceptance(&player(30, 90.0), frank) > 1.0);
    }

    #[test]
    fn test_instantiate_applies_tier_bonus() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let canelo = find_boxer("Canelo Alvarez").unwrap();
        let fighter = instantiate(canelo, Division::Middleweight, &mut rng);
        assert!(fighter.power >= 90.0 && fighter.power <= 100.0);
        assert_eq!(fighter.experience, 100);
        assert_eq!(fighter.money, 50_000);
        assert_eq!(fighter.social_media.followers, 1_000_000);
        assert!((70.0..=90.0).contains(&fighter.speed));

        let frank = find_boxer("Frank Martin").unwrap();
        let fighter = instantiate(frank, Division::Lightweight, &mut rng);
        assert_eq!(fighter.experience, 86);
        assert!((25..35).contains(&fighter.age));
    }
}
