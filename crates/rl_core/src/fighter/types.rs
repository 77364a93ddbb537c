// Fighter data model
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Upper bound of every 0-100 attribute.
pub const STAT_MAX: f32 = 100.0;

/// Clamps a bounded attribute into 0..=100.
pub fn clamp_stat(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, STAT_MAX)
}

/// Weight class
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Division {
    Lightweight,
    Welterweight,
    Middleweight,
    #[serde(rename = "Light Heavyweight")]
    #[strum(to_string = "Light Heavyweight", serialize = "light_heavyweight")]
    LightHeavyweight,
    Heavyweight,
}

/// Fighting style picked at registration; selects the starting stat preset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FightingStyle {
    #[default]
    Balanced,
    Brawler,
    Boxer,
    Slugger,
    Counterpuncher,
}

impl FightingStyle {
    /// (power, speed, defense)
    pub fn preset(&self) -> (f32, f32, f32) {
        match self {
            FightingStyle::Balanced => (65.0, 70.0, 60.0),
            FightingStyle::Brawler => (75.0, 60.0, 55.0),
            FightingStyle::Boxer => (60.0, 75.0, 65.0),
            FightingStyle::Slugger => (80.0, 50.0, 60.0),
            FightingStyle::Counterpuncher => (65.0, 70.0, 75.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FightingStyle::Balanced => "Balanced Fighter",
            FightingStyle::Brawler => "Brawler (High Power)",
            FightingStyle::Boxer => "Boxer (High Speed)",
            FightingStyle::Slugger => "Slugger (Heavy Hitter)",
            FightingStyle::Counterpuncher => "Counter Puncher (High Defense)",
        }
    }
}

/// Trainable attribute
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatId {
    Power,
    Speed,
    Defense,
    Stamina,
    Technique,
    Mental,
}

impl StatId {
    pub fn training_name(&self) -> &'static str {
        match self {
            StatId::Power => "Power Training",
            StatId::Speed => "Speed Training",
            StatId::Defense => "Defense Training",
            StatId::Stamina => "Cardio Training",
            StatId::Technique => "Technique Training",
            StatId::Mental => "Mental Training",
        }
    }
}

/// Social-media counters. Only ever adjusted through defined operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub followers: u64,
    pub total_posts: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
}

impl SocialMedia {
    /// Counters derived from a public figure's popularity.
    pub fn from_popularity(popularity: f32, total_posts: u64) -> Self {
        let popularity = popularity.max(0.0) as f64;
        Self {
            followers: (popularity * 10_000.0) as u64,
            total_posts,
            total_likes: (popularity * 50_000.0) as u64,
            total_comments: (popularity * 5_000.0) as u64,
            total_shares: (popularity * 2_500.0) as u64,
        }
    }
}

/// A boxer: the player's career record or an opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    // === Identity ===
    pub name: String,
    pub age: u8,
    pub division: Division,

    // === Record ===
    pub wins: u32,
    pub losses: u32,
    pub ko: u32,
    /// Wins against opponents with fewer than five wins
    pub unranked_wins: u32,

    // === Attributes (0-100) ===
    pub power: f32,
    pub speed: f32,
    pub defense: f32,
    pub stamina: f32,
    pub technique: f32,
    pub mental: f32,

    // === Meta Progression ===
    pub experience: u32,
    /// 0-100
    pub popularity: f32,
    /// 0-100
    pub energy: u8,
    pub money: u64,
    pub weeks_since_last_fight: u32,

    // === Damage ===
    pub injuries: Vec<String>,
    /// 0-100
    pub facial_damage: f32,

    pub social_media: SocialMedia,
}

impl Fighter {
    pub fn stat(&self, id: StatId) -> f32 {
        match id {
            StatId::Power => self.power,
            StatId::Speed => self.speed,
            StatId::Defense => self.defense,
            StatId::Stamina => self.stamina,
            StatId::Technique => self.technique,
            StatId::Mental => self.mental,
        }
    }

    /// Sets a trainable attribute, clamped into 0..=100.
    pub fn set_stat(&mut self, id: StatId, value: f32) {
        let value = clamp_stat(value);
        match id {
            StatId::Power => self.power = value,
            StatId::Speed => self.speed = value,
            StatId::Defense => self.defense = value,
            StatId::Stamina => self.stamina = value,
            StatId::Technique => self.technique = value,
            StatId::Mental => self.mental = value,
        }
    }

    /// Re-establishes the 0..=100 bounds on every bounded attribute.
    pub fn clamp_bounded(&mut self) {
        self.power = clamp_stat(self.power);
        self.speed = clamp_stat(self.speed);
        self.defense = clamp_stat(self.defense);
        self.stamina = clamp_stat(self.stamina);
        self.technique = clamp_stat(self.technique);
        self.mental = clamp_stat(self.mental);
        self.popularity = clamp_stat(self.popularity);
        self.facial_damage = clamp_stat(self.facial_damage);
        self.energy = self.energy.min(100);
    }

    /// Average of power, speed, defense and experience; used for odds and acceptance.
    pub fn strength(&self) -> f32 {
        (self.power + self.speed + self.defense + self.experience as f32) / 4.0
    }

    pub fn total_fights(&self) -> u32 {
        self.wins + self.losses
    }

    /// "W-L (K KO)"
    pub fn record_line(&self) -> String {
        format!("{}-{} ({} KO)", self.wins, self.losses, self.ko)
    }

    pub fn win_rate(&self) -> u32 {
        match self.total_fights() {
            0 => 0,
            total => ((self.wins as f32 / total as f32) * 100.0).round() as u32,
        }
    }

    pub fn is_injured(&self) -> bool {
        !self.injuries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_stat_id_parsing() {
        assert_eq!(StatId::from_str("power").unwrap(), StatId::Power);
        assert_eq!(StatId::from_str("Mental").unwrap(), StatId::Mental);
        assert!(StatId::from_str("charisma").is_err());
    }

    #[test]
    fn test_division_names() {
        assert_eq!(Division::LightHeavyweight.to_string(), "Light Heavyweight");
        assert_eq!(Division::from_str("light heavyweight").unwrap(), Division::LightHeavyweight);
        let json = serde_json::to_string(&Division::LightHeavyweight).unwrap();
        assert_eq!(json, "\"Light Heavyweight\"");
    }

    #[test]
    fn test_clamp_stat_bounds() {
        assert_eq!(clamp_stat(-5.0), 0.0);
        assert_eq!(clamp_stat(140.0), 100.0);
        assert_eq!(clamp_stat(f32::NAN), 0.0);
        assert_eq!(clamp_stat(55.5), 55.5);
    }

    #[test]
    fn test_social_media_from_popularity() {
        let social = SocialMedia::from_popularity(80.0, 120);
        assert_eq!(social.followers, 800_000);
        assert_eq!(social.total_likes, 4_000_000);
        assert_eq!(social.total_comments, 400_000);
        assert_eq!(social.total_shares, 200_000);
        assert_eq!(social.total_posts, 120);
    }

    #[test]
    fn test_win_rate_rounds() {
        let mut fighter =
            crate::fighter::create_fighter("Rate Check", 25, Division::Middleweight, FightingStyle::Balanced).unwrap();
        assert_eq!(fighter.win_rate(), 0);
        fighter.wins = 2;
        fighter.losses = 1;
        assert_eq!(fighter.win_rate(), 67);
    }
}
