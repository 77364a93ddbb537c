//! Fight state machine.
//!
//! `PreFight -> InRound -> RoundResolved -> (InRound | FightEnded)`
//!
//! A [`FightSession`] owns copies of both fighters for the duration of one
//! fight. Nothing here touches the career record: once the session reaches
//! `FightEnded` the caller folds the [`FightSummary`] back into the Fighter.

use crate::config::FightConfig;
use crate::error::Declined;
use crate::fight::action::{available_actions, success_chance, ActionCategory, FightAction};
use crate::fight::commentary::{ClosingContext, ExchangeContext, Narrator, VictoryMethod};
use crate::fight::resolver::{resolve, roll_injury, Corner, InjuryEvent, Intensity};
use crate::fighter::{clamp_stat, Fighter};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum FightPhase {
    PreFight,
    InRound,
    RoundResolved,
    FightEnded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
#[serde(rename_all = "lowercase")]
pub enum CrowdMood {
    #[default]
    Excited,
    Bored,
    Hostile,
    Electric,
}

impl CrowdMood {
    /// Mood after a round; unchanged when nothing notable happened.
    pub fn after_round(self, category: ActionCategory, success: bool, opponent_scored: bool) -> Self {
        match (category, success) {
            (ActionCategory::Risky, true) => CrowdMood::Electric,
            (ActionCategory::Aggressive, true) => CrowdMood::Excited,
            (ActionCategory::Defensive, false) => CrowdMood::Bored,
            (_, false) if opponent_scored => CrowdMood::Hostile,
            _ => self,
        }
    }
}

/// One corner of the tale of the tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    pub name: String,
    pub record: String,
    pub age: u8,
    pub power: f32,
    pub speed: f32,
    pub defense: f32,
    pub experience: u32,
}

impl From<&Fighter> for TapeEntry {
    fn from(fighter: &Fighter) -> Self {
        Self {
            name: fighter.name.clone(),
            record: fighter.record_line(),
            age: fighter.age,
            power: fighter.power,
            speed: fighter.speed,
            defense: fighter.defense,
            experience: fighter.experience,
        }
    }
}

/// Pre-fight stat comparison, shown once before round 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaleOfTheTape {
    pub player: TapeEntry,
    pub opponent: TapeEntry,
}

/// What happened in one resolved round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u8,
    pub action: FightAction,
    pub success_chance: f32,
    pub success: bool,
    pub player_points: u32,
    pub opponent_points: u32,
    pub stamina_after: f32,
    pub injury: Option<InjuryEvent>,
    pub narrative: String,
    pub crowd_mood: CrowdMood,
}

/// Result handed to career progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightSummary {
    pub won: bool,
    pub method: VictoryMethod,
    pub rounds: u8,
    pub player_score: u32,
    pub opponent_score: u32,
    pub player_injuries: Vec<String>,
    pub opponent_injuries: Vec<String>,
    pub closing_commentary: String,
}

/// Read-only view for a UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightSnapshot {
    pub phase: FightPhase,
    pub round: u8,
    pub player_name: String,
    pub opponent_name: String,
    pub player_score: u32,
    pub opponent_score: u32,
    pub player_stamina: f32,
    pub crowd_mood: CrowdMood,
    pub commentary_tail: Vec<String>,
    pub offered_actions: Vec<FightAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightSession {
    pub player: Fighter,
    pub opponent: Fighter,
    pub phase: FightPhase,
    /// 1-based, never above the configured max
    pub round: u8,
    pub player_score: u32,
    pub opponent_score: u32,
    pub commentary: Vec<String>,
    pub crowd_mood: CrowdMood,
    pub player_injuries: Vec<String>,
    pub opponent_injuries: Vec<String>,
    pub player_facial_damage: f32,
    pub opponent_facial_damage: f32,
    pub offered_actions: Vec<FightAction>,
    pub last_round: Option<RoundReport>,
    /// Set when the fight came from an accepted offer
    pub purse: Option<u64>,
    pub tale: TaleOfTheTape,
    pub summary: Option<FightSummary>,
}

impl FightSession {
    pub fn new(player: Fighter, opponent: Fighter, purse: Option<u64>, narrator: &dyn Narrator) -> Self {
        let tale = TaleOfTheTape { player: (&player).into(), opponent: (&opponent).into() };
        let opening = narrator.opening_line(&player.name);
        tracing::info!(player = %player.name, opponent = %opponent.name, ?purse, "fight booked");

        Self {
            player_facial_damage: player.facial_damage,
            opponent_facial_damage: opponent.facial_damage,
            player,
            opponent,
            phase: FightPhase::PreFight,
            round: 1,
            player_score: 0,
            opponent_score: 0,
            commentary: vec![opening],
            crowd_mood: CrowdMood::Excited,
            player_injuries: Vec::new(),
            opponent_injuries: Vec::new(),
            offered_actions: Vec::new(),
            last_round: None,
            purse,
            tale,
            summary: None,
        }
    }

    /// Books the fight and rings the bell for round 1.
    pub fn start(
        player: Fighter,
        opponent: Fighter,
        purse: Option<u64>,
        config: &FightConfig,
        narrator: &dyn Narrator,
        rng: &mut impl Rng,
    ) -> Self {
        let mut session = Self::new(player, opponent, purse, narrator);
        session.begin(config, rng);
        session
    }

    /// Leaves the tale of the tape and offers the first round's actions.
    /// Does nothing outside `PreFight`.
    pub fn begin(&mut self, config: &FightConfig, rng: &mut impl Rng) {
        if self.phase != FightPhase::PreFight {
            return;
        }
        self.offered_actions = available_actions(self.player.stamina, config, rng);
        self.phase = FightPhase::InRound;
    }

    pub fn is_over(&self) -> bool {
        self.phase == FightPhase::FightEnded
    }

    /// Resolves the current round with the offered action `action_id`.
    ///
    /// Draw order: success, opponent point, injury, narrative.
    pub fn choose_action(
        &mut self,
        action_id: &str,
        config: &FightConfig,
        narrator: &dyn Narrator,
        rng: &mut impl Rng,
    ) -> Result<RoundReport, Declined> {
        match self.phase {
            FightPhase::InRound => {}
            FightPhase::FightEnded => return Err(Declined::NoActiveFight),
            FightPhase::PreFight | FightPhase::RoundResolved => {
                return Err(Declined::FightInProgress)
            }
        }

        let wanted = action_id.trim();
        let action = self
            .offered_actions
            .iter()
            .find(|a| a.id.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| Declined::UnknownAction(wanted.to_string()))?;

        // With nothing affordable the cheapest move still goes through; stamina floors at zero.
        let stamina = self.player.stamina;
        if !action.is_affordable(stamina) && self.offered_actions.iter().any(|a| a.is_affordable(stamina)) {
            return Err(Declined::InsufficientStamina {
                required: action.stamina_cost,
                available: stamina.max(0.0) as u8,
            });
        }

        let chance = success_chance(&self.player, &action, config);
        let success = resolve(chance, rng);
        let opponent_scored = resolve(config.opponent_point_chance, rng);

        let player_points = if success { action.category.points() } else { 0 };
        let opponent_points = u32::from(opponent_scored);
        self.player_score += player_points;
        self.opponent_score += opponent_points;

        self.player.stamina = clamp_stat(stamina - action.stamina_cost as f32);

        let intensity = Intensity::for_round(self.round);
        let injury = roll_injury(&action, success, intensity, config, rng);
        if let Some(event) = &injury {
            self.record_injury(event, config);
        }

        self.crowd_mood = self.crowd_mood.after_round(action.category, success, opponent_scored);

        let exchange = ExchangeContext {
            category: action.category,
            success,
            intensity,
            stamina: self.player.stamina,
        };
        let narrative = narrator.exchange_line(&exchange, rng);
        self.commentary.push(format!("Round {}: {}", self.round, narrative));
        if let Some(event) = &injury {
            self.commentary.push(event.description.clone());
        }

        tracing::debug!(
            round = self.round,
            action = %action.id,
            chance,
            success,
            opponent_scored,
            stamina = self.player.stamina,
            "round resolved"
        );

        let report = RoundReport {
            round: self.round,
            action,
            success_chance: chance,
            success,
            player_points,
            opponent_points,
            stamina_after: self.player.stamina,
            injury,
            narrative,
            crowd_mood: self.crowd_mood,
        };
        self.last_round = Some(report.clone());
        self.phase = FightPhase::RoundResolved;
        Ok(report)
    }

    fn record_injury(&mut self, event: &InjuryEvent, config: &FightConfig) {
        match event.corner {
            Corner::Player => {
                self.player_injuries.push(event.description.clone());
                self.player_facial_damage =
                    clamp_stat(self.player_facial_damage + config.facial_damage_per_injury);
            }
            Corner::Opponent => {
                self.opponent_injuries.push(event.description.clone());
                self.opponent_facial_damage =
                    clamp_stat(self.opponent_facial_damage + config.facial_damage_per_injury);
            }
        }
    }

    /// Moves on from a resolved round: either the next round or the final bell.
    pub fn advance(&mut self, config: &FightConfig, narrator: &dyn Narrator, rng: &mut impl Rng) -> FightPhase {
        if self.phase != FightPhase::RoundResolved {
            return self.phase;
        }

        let out_of_rounds = self.round >= config.max_rounds;
        let exhausted = self.player.stamina <= config.stamina_end_threshold as f32;
        if out_of_rounds || exhausted {
            self.finish(out_of_rounds, narrator, rng);
        } else {
            self.round = (self.round + 1).min(config.max_rounds);
            self.offered_actions = available_actions(self.player.stamina, config, rng);
            self.phase = FightPhase::InRound;
        }
        self.phase
    }

    /// `choose_action` followed by `advance`.
    pub fn play_round(
        &mut self,
        action_id: &str,
        config: &FightConfig,
        narrator: &dyn Narrator,
        rng: &mut impl Rng,
    ) -> Result<RoundReport, Declined> {
        let report = self.choose_action(action_id, config, narrator, rng)?;
        self.advance(config, narrator, rng);
        Ok(report)
    }

    fn victory_method(&self, went_the_distance: bool, won: bool) -> VictoryMethod {
        if went_the_distance {
            return VictoryMethod::Decision;
        }
        let finisher = self.last_round.as_ref().map(|r| (r.action.category, r.success));
        match (won, finisher) {
            (true, Some((ActionCategory::Risky | ActionCategory::Aggressive, true))) => VictoryMethod::Knockout,
            (false, Some((ActionCategory::Risky, false))) => VictoryMethod::Knockout,
            _ => VictoryMethod::TechnicalKnockout,
        }
    }

    fn finish(&mut self, went_the_distance: bool, narrator: &dyn Narrator, rng: &mut impl Rng) {
        let won = self.player_score > self.opponent_score;
        let method = self.victory_method(went_the_distance, won);
        let closing = ClosingContext {
            won,
            method,
            player_name: &self.player.name,
            opponent_name: &self.opponent.name,
            rounds: self.round,
            anyone_injured: !self.player_injuries.is_empty() || !self.opponent_injuries.is_empty(),
        };
        let closing_commentary = narrator.closing_line(&closing, rng);
        self.commentary.push(closing_commentary.clone());

        tracing::info!(
            won,
            ?method,
            rounds = self.round,
            player_score = self.player_score,
            opponent_score = self.opponent_score,
            "fight ended"
        );

        self.summary = Some(FightSummary {
            won,
            method,
            rounds: self.round,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            player_injuries: self.player_injuries.clone(),
            opponent_injuries: self.opponent_injuries.clone(),
            closing_commentary,
        });
        self.offered_actions.clear();
        self.phase = FightPhase::FightEnded;
    }

    pub fn snapshot(&self, tail: usize) -> FightSnapshot {
        let skip = self.commentary.len().saturating_sub(tail);
        FightSnapshot {
            phase: self.phase,
            round: self.round,
            player_name: self.player.name.clone(),
            opponent_name: self.opponent.name.clone(),
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            player_stamina: self.player.stamina,
            crowd_mood: self.crowd_mood,
            commentary_tail: self.commentary[skip..].to_vec(),
            offered_actions: self.offered_actions.clone(),
        }
    }
}
