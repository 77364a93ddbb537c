//! Fight offers: purse, acceptance and renegotiation.
//!
//! An offer starts `Pending`. Sending it draws the opponent's answer; a
//! rejected offer may be renegotiated for a bigger purse until the opponent
//! has said no four times, at which point it is withdrawn for good.

use crate::config::NegotiationConfig;
use crate::error::Declined;
use crate::fight::resolve;
use crate::fighter::Fighter;
use crate::negotiation::odds::{odds_for, strength_differential, Odds};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
    Withdrawn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightOffer {
    pub id: u32,
    pub opponent: Fighter,
    pub purse: u64,
    pub odds: Odds,
    /// Chance the opponent says yes to the current terms
    pub acceptance_chance: f32,
    pub status: OfferStatus,
    pub negotiation_rounds: u32,
}

/// Purse before any negotiation, rounded down.
pub fn initial_purse(
    fighter: &Fighter,
    opponent: &Fighter,
    config: &NegotiationConfig,
    rng: &mut impl Rng,
) -> u64 {
    let popularity = (fighter.popularity + opponent.popularity) as f64 / 100.0;
    let skill = (fighter.experience + opponent.experience) as f64 / 100.0;
    let (lo, hi) = config.purse_variance;
    let variance = lo + rng.gen::<f64>() * (hi - lo);
    (config.base_purse * popularity * skill * variance).max(0.0).floor() as u64
}

/// Opponent's willingness to take the fight at `purse`, before renegotiation penalties.
pub fn acceptance_chance(
    fighter: &Fighter,
    opponent: &Fighter,
    purse: u64,
    config: &NegotiationConfig,
) -> f32 {
    let mut chance = config.base_acceptance;

    let popularity_diff = fighter.popularity - opponent.popularity;
    if popularity_diff > config.popularity_gap {
        chance += config.popularity_shift;
    } else if popularity_diff < -config.popularity_gap {
        chance -= config.popularity_shift;
    }

    // an easy night for the opponent makes them keen
    let skill_diff = strength_differential(fighter, opponent);
    if skill_diff < -config.skill_gap {
        chance += config.skill_shift;
    } else if skill_diff > config.skill_gap {
        chance -= config.skill_shift;
    }

    if purse > config.high_purse {
        chance += config.high_purse_bonus;
    } else if purse < config.low_purse {
        chance -= config.low_purse_penalty;
    }

    let (lo, hi) = config.acceptance_bounds;
    chance.clamp(lo, hi)
}

/// `purse` raised by `raise`, rounded down.
pub fn raised_purse(purse: u64, raise: f64) -> u64 {
    // basis points keep 15% of a round number exact
    let basis_points = (raise.max(0.0) * 10_000.0).round() as u128;
    let raised = purse as u128 + purse as u128 * basis_points / 10_000;
    u64::try_from(raised).unwrap_or(u64::MAX)
}

pub fn propose_offer(
    id: u32,
    fighter: &Fighter,
    opponent: Fighter,
    config: &NegotiationConfig,
    rng: &mut impl Rng,
) -> FightOffer {
    let purse = initial_purse(fighter, &opponent, config, rng);
    let odds = odds_for(fighter, &opponent);
    let acceptance_chance = acceptance_chance(fighter, &opponent, purse, config);
    tracing::debug!(id, opponent = %opponent.name, purse, acceptance_chance, "offer proposed");

    FightOffer {
        id,
        opponent,
        purse,
        odds,
        acceptance_chance,
        status: OfferStatus::Pending,
        negotiation_rounds: 0,
    }
}

impl FightOffer {
    pub fn is_open(&self) -> bool {
        matches!(self.status, OfferStatus::Pending | OfferStatus::Rejected)
    }

    /// Sends a pending offer; the opponent answers immediately.
    pub fn send(&mut self, fighter: &Fighter, config: &NegotiationConfig, rng: &mut impl Rng) -> Result<OfferStatus, Declined> {
        if self.status != OfferStatus::Pending {
            return Err(Declined::OfferNotPending);
        }
        self.acceptance_chance = acceptance_chance(fighter, &self.opponent, self.purse, config);
        self.answer(resolve(self.acceptance_chance, rng), config);
        Ok(self.status)
    }

    /// Raises the purse and asks again after a rejection. Each earlier round
    /// makes the opponent warier.
    pub fn renegotiate(&mut self, fighter: &Fighter, config: &NegotiationConfig, rng: &mut impl Rng) -> Result<OfferStatus, Declined> {
        if !self.is_open() {
            return Err(match self.status {
                OfferStatus::Withdrawn => Declined::OfferWithdrawn,
                _ => Declined::OfferNotPending,
            });
        }
        if self.status == OfferStatus::Pending {
            return Err(Declined::OfferNotSent);
        }

        let prior_rounds = self.negotiation_rounds;
        self.purse = raised_purse(self.purse, config.renegotiation_raise);
        self.negotiation_rounds += 1;

        let penalty = prior_rounds as f32 * config.renegotiation_penalty;
        self.acceptance_chance =
            (acceptance_chance(fighter, &self.opponent, self.purse, config) - penalty).max(0.0);
        self.answer(resolve(self.acceptance_chance, rng), config);
        Ok(self.status)
    }

    fn answer(&mut self, accepted: bool, config: &NegotiationConfig) {
        self.status = if accepted {
            OfferStatus::Accepted
        } else if self.negotiation_rounds >= config.max_renegotiations {
            OfferStatus::Withdrawn
        } else {
            OfferStatus::Rejected
        };
        tracing::info!(
            id = self.id,
            opponent = %self.opponent.name,
            purse = self.purse,
            rounds = self.negotiation_rounds,
            status = %self.status,
            "offer answered"
        );
    }
}
