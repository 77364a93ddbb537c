//! Career Progression Configuration

use serde::{Deserialize, Serialize};

/// Fight results, week clock and matchmaking gates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    // === Matchmaking Gate ===
    /// Energy needed to take a fight (default: 70)
    pub fight_min_energy: u8,
    /// Weeks of rest needed between fights (default: 2)
    pub recovery_weeks: u32,

    // === Week Clock ===
    /// Energy regained per week (default: 25)
    pub weekly_energy: u8,
    /// Chance of an incoming challenge per week (default: 0.3)
    pub challenge_chance: f32,
    /// Popularity the fighter must exceed to draw challenges (default: 50)
    pub challenge_min_popularity: f32,
    /// Facial damage healed per week (default: 10)
    pub weekly_facial_recovery: f32,

    // === Fight Results ===
    /// An opponent with fewer wins than this counts as unranked (default: 5)
    pub unranked_opponent_wins: u32,
    /// Experience for a win before diminishing returns (default: 10)
    pub win_experience: u32,
    /// Floor of the win experience (default: 5)
    pub win_min_experience: u32,
    /// Flat experience for a loss (default: 2)
    pub loss_experience: u32,
    /// Popularity for a win before diminishing returns (default: 8)
    pub win_popularity: f32,
    /// Floor of the win popularity gain (default: 2)
    pub win_min_popularity: f32,
    /// Social base gain range for a win (default: 50..150)
    pub win_social_gain: (f32, f32),
    /// Social base gain range for a loss (default: 10..40)
    pub loss_social_gain: (f32, f32),

    /// Notifications kept in the feed (default: 50)
    pub notification_capacity: usize,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            fight_min_energy: 70,
            recovery_weeks: 2,

            weekly_energy: 25,
            challenge_chance: 0.3,
            challenge_min_popularity: 50.0,
            weekly_facial_recovery: 10.0,

            unranked_opponent_wins: 5,
            win_experience: 10,
            win_min_experience: 5,
            loss_experience: 2,
            win_popularity: 8.0,
            win_min_popularity: 2.0,
            win_social_gain: (50.0, 150.0),
            loss_social_gain: (10.0, 40.0),

            notification_capacity: 50,
        }
    }
}

impl ProgressionConfig {
    pub fn validate(&self) -> Result<(), String> {
        super::check_probability("career.challenge_chance", self.challenge_chance)?;
        if self.fight_min_energy > 100 || self.weekly_energy > 100 {
            return Err("career energy values must be within 0..=100".into());
        }
        if self.win_min_experience > self.win_experience {
            return Err("career.win_min_experience exceeds career.win_experience".into());
        }
        if self.win_min_popularity > self.win_popularity {
            return Err("career.win_min_popularity exceeds career.win_popularity".into());
        }
        for (name, (lo, hi)) in
            [("career.win_social_gain", self.win_social_gain), ("career.loss_social_gain", self.loss_social_gain)]
        {
            if lo < 0.0 || lo >= hi {
                return Err(format!("{name} must be a non-empty, non-negative range"));
            }
        }
        if self.notification_capacity == 0 {
            return Err("career.notification_capacity must be at least 1".into());
        }
        Ok(())
    }
}
