// Division ranking formula
use crate::fighter::types::Fighter;
use serde::{Deserialize, Serialize};

/// Wins needed before a fighter appears in the rankings.
pub const MIN_RANKED_WINS: u32 = 5;
/// Rankings list this many places.
pub const RANKED_PLACES: u32 = 15;
/// Best rank reachable on wins alone.
const WINS_RANK_FLOOR: u32 = 6;
const WINS_RANK_START: u32 = 20;

/// Where the player stands in the division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RankStatus {
    Ranked { rank: u32 },
    Unranked,
}

impl RankStatus {
    pub fn rank(&self) -> Option<u32> {
        match self {
            RankStatus::Ranked { rank } => Some(*rank),
            RankStatus::Unranked => None,
        }
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, RankStatus::Ranked { .. })
    }

    pub fn label(&self) -> String {
        match self {
            RankStatus::Ranked { rank } => format!("Ranked #{rank}"),
            RankStatus::Unranked => "Unranked - Need more wins to qualify".to_string(),
        }
    }
}

/// Raw rank number; `None` below the win requirement.
pub fn raw_rank(fighter: &Fighter) -> Option<u32> {
    if fighter.wins < MIN_RANKED_WINS {
        return None;
    }
    let base = WINS_RANK_START.saturating_sub(fighter.wins / 2).max(WINS_RANK_FLOOR);
    let experience_bonus = fighter.experience / 10;
    let popularity_bonus = (fighter.popularity.max(0.0) as u32) / 20;
    Some(base.saturating_sub(experience_bonus + popularity_bonus).max(1))
}

pub fn rank_status(fighter: &Fighter) -> RankStatus {
    match raw_rank(fighter) {
        Some(rank) if rank <= RANKED_PLACES => RankStatus::Ranked { rank },
        _ => RankStatus::Unranked,
    }
}
