// Fighter registration
use crate::error::{CareerError, Result};
use crate::fighter::types::{Division, Fighter, FightingStyle, SocialMedia};

pub const STARTING_POPULARITY: f32 = 10.0;
pub const STARTING_MONEY: u64 = 25_000;
pub const STARTING_FOLLOWERS: u64 = 100;
pub const STARTING_TECHNIQUE: f32 = 60.0;
pub const STARTING_MENTAL: f32 = 60.0;

/// Registers a new fighter with the style's stat preset.
pub fn create_fighter(
    name: &str,
    age: u8,
    division: Division,
    style: FightingStyle,
) -> Result<Fighter> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CareerError::InvalidParameter("fighter name must not be empty".into()));
    }

    let (power, speed, defense) = style.preset();
    tracing::info!(name, %division, %style, "registered fighter");

    Ok(Fighter {
        name: name.to_string(),
        age,
        division,
        wins: 0,
        losses: 0,
        ko: 0,
        unranked_wins: 0,
        power,
        speed,
        defense,
        stamina: 100.0,
        technique: STARTING_TECHNIQUE,
        mental: STARTING_MENTAL,
        experience: 0,
        popularity: STARTING_POPULARITY,
        energy: 100,
        money: STARTING_MONEY,
        weeks_since_last_fight: 0,
        injuries: Vec::new(),
        facial_damage: 0.0,
        social_media: SocialMedia { followers: STARTING_FOLLOWERS, ..SocialMedia::default() },
    })
}
