// Betting odds ladder
use crate::fighter::Fighter;
use serde::{Deserialize, Serialize};

/// Decimal odds for both corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    pub player: f32,
    pub opponent: f32,
}

/// (strength differential above which the band applies, player odds, opponent odds)
const FAVOURED_BANDS: [(f32, f32, f32); 2] = [(10.0, 1.5, 2.8), (5.0, 1.7, 2.4)];
/// (strength differential below which the band applies, player odds, opponent odds)
const UNDERDOG_BANDS: [(f32, f32, f32); 2] = [(-10.0, 3.2, 1.3), (-5.0, 2.6, 1.6)];
const EVEN: Odds = Odds { player: 2.0, opponent: 2.0 };

/// Player strength minus opponent strength.
pub fn strength_differential(player: &Fighter, opponent: &Fighter) -> f32 {
    player.strength() - opponent.strength()
}

pub fn odds_for(player: &Fighter, opponent: &Fighter) -> Odds {
    let diff = strength_differential(player, opponent);
    FAVOURED_BANDS
        .iter()
        .find(|(edge, _, _)| diff > *edge)
        .or_else(|| UNDERDOG_BANDS.iter().find(|(edge, _, _)| diff < *edge))
        .map(|&(_, player, opponent)| Odds { player, opponent })
        .unwrap_or(EVEN)
}
