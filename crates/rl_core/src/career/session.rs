//! Career session context.
//!
//! [`Career`] owns the single Fighter record of a play-through together with
//! the week clock, the seeded RNG and whatever is in flight: the active fight,
//! incoming challenges and fight offers. Every operation runs to completion
//! before the next one; a declined operation leaves the session as it was,
//! apart from the notification explaining why.

use crate::career::notifications::{Notification, NotificationFeed, Tone};
use crate::career::progression::{
    apply_fight_aftermath, apply_fight_result, apply_training_by_name, apply_week_advance,
    check_fight_eligibility, TrainingReport,
};
use crate::career::social::{publish_post, trash_talk, Platform, SocialPost};
use crate::config::CareerConfig;
use crate::error::{Declined, Result};
use crate::fight::{
    resolve, FightSession, FightSnapshot, FightSummary, Narrator, RoundReport, TableNarrator, VictoryMethod,
};
use crate::fighter::{create_fighter, manager_advice, rank_status, Division, Fighter, FightingStyle, RankStatus};
use crate::negotiation::{propose_offer, FightOffer, OfferStatus};
use crate::opponent::{
    callout_acceptance, check_callout, check_challenge, division_rankings, find_boxer, find_scheduled,
    generate_opponent, instantiate, progression_level, RankedFighter,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Commentary lines included in a fight snapshot
pub const COMMENTARY_TAIL: usize = 5;
/// Unanswered challenges kept; older ones lapse
pub const MAX_PENDING_CHALLENGES: usize = 3;

/// Result of choosing a fight action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub result_text: String,
    pub round: RoundReport,
    /// `None` once the final bell has rung
    pub session: Option<FightSnapshot>,
    pub summary: Option<FightSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekReport {
    pub week: u32,
    pub incoming_challenges: Vec<Fighter>,
}

#[derive(Debug)]
pub struct Career {
    fighter: Fighter,
    week: u32,
    config: CareerConfig,
    rng: ChaCha8Rng,
    narrator: Box<dyn Narrator>,
    fight: Option<FightSession>,
    challenges: Vec<Fighter>,
    offers: Vec<FightOffer>,
    next_offer_id: u32,
    notifications: NotificationFeed,
}

impl Career {
    pub fn new(fighter: Fighter, config: CareerConfig, seed: u64) -> Self {
        let notifications = NotificationFeed::with_capacity(config.career.notification_capacity);
        Self {
            fighter,
            week: 1,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            narrator: Box::new(TableNarrator),
            fight: None,
            challenges: Vec::new(),
            offers: Vec::new(),
            next_offer_id: 1,
            notifications,
        }
    }

    /// Registers a fighter and opens a career for them.
    pub fn create(
        name: &str,
        age: u8,
        division: Division,
        style: FightingStyle,
        config: CareerConfig,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        let fighter = create_fighter(name, age, division, style)?;
        let mut career = Self::new(fighter, config, seed);
        career.notify(
            "Welcome to Ring Legends!",
            format!("{} turns pro as a {}", career.fighter.name, style.display_name()),
            Tone::Success,
        );
        Ok(career)
    }

    pub fn with_narrator(mut self, narrator: Box<dyn Narrator>) -> Self {
        self.narrator = narrator;
        self
    }

    // ========== Read access ==========

    pub fn fighter(&self) -> &Fighter {
        &self.fighter
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn config(&self) -> &CareerConfig {
        &self.config
    }

    pub fn active_fight(&self) -> Option<&FightSession> {
        self.fight.as_ref()
    }

    pub fn fight_snapshot(&self) -> Option<FightSnapshot> {
        self.fight.as_ref().map(|f| f.snapshot(COMMENTARY_TAIL))
    }

    pub fn challenges(&self) -> &[Fighter] {
        &self.challenges
    }

    pub fn offers(&self) -> &[FightOffer] {
        &self.offers
    }

    pub fn notifications(&self) -> &NotificationFeed {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    pub fn rank(&self) -> RankStatus {
        rank_status(&self.fighter)
    }

    pub fn advice(&self) -> &'static str {
        manager_advice(&self.fighter)
    }

    pub fn rankings(&mut self) -> Vec<RankedFighter> {
        division_rankings(&self.fighter, &mut self.rng)
    }

    // ========== Helpers ==========

    fn notify(&mut self, title: &str, description: impl Into<String>, tone: Tone) {
        self.notifications.push(Notification::new(title, description, tone));
    }

    fn decline<T>(&mut self, title: &str, reason: Declined) -> std::result::Result<T, Declined> {
        tracing::warn!(fighter = %self.fighter.name, %reason, "{title}");
        self.notify(title, reason.to_string(), Tone::Destructive);
        Err(reason)
    }

    fn ensure_idle(&mut self, title: &str) -> std::result::Result<(), Declined> {
        if self.fight.is_some() {
            return self.decline(title, Declined::FightInProgress);
        }
        Ok(())
    }

    fn ensure_ready_to_fight(&mut self) -> std::result::Result<(), Declined> {
        self.ensure_idle("Fight Unavailable")?;
        if let Err(reason) = check_fight_eligibility(&self.fighter, &self.config.career) {
            return self.decline("Fight Unavailable", reason);
        }
        Ok(())
    }

    /// Opens the fight. Callers have already checked eligibility.
    fn book_fight(&mut self, opponent: Fighter, purse: Option<u64>) -> FightSnapshot {
        let description = format!("{} vs {}", self.fighter.name, opponent.name);
        let session = FightSession::start(
            self.fighter.clone(),
            opponent,
            purse,
            &self.config.fight,
            self.narrator.as_ref(),
            &mut self.rng,
        );
        let snapshot = session.snapshot(COMMENTARY_TAIL);
        self.fight = Some(session);
        self.notify("Fight Night!", description, Tone::Info);
        snapshot
    }

    // ========== Matchmaking ==========

    /// Fights a generated journeyman scaled to the player's record.
    pub fn fight_unranked(&mut self) -> std::result::Result<FightSnapshot, Declined> {
        self.ensure_ready_to_fight()?;
        let level = progression_level(&self.fighter);
        let opponent = generate_opponent(self.fighter.division, level, &mut self.rng);
        Ok(self.book_fight(opponent, None))
    }

    /// Takes up one of the incoming challenges, by challenger name.
    pub fn accept_challenge(&mut self, name: &str) -> std::result::Result<FightSnapshot, Declined> {
        let Some(index) = self.challenges.iter().position(|c| c.name.eq_ignore_ascii_case(name.trim())) else {
            return self.decline("Unknown Challenger", Declined::UnknownOpponent(name.trim().to_string()));
        };
        self.ensure_ready_to_fight()?;
        let opponent = self.challenges.remove(index);
        Ok(self.book_fight(opponent, None))
    }

    /// Calls out a roster boxer of the player's division.
    pub fn callout(&mut self, name: &str) -> std::result::Result<FightSnapshot, Declined> {
        let Some(boxer) = find_boxer(name) else {
            return self.decline("Call-out Rejected", Declined::UnknownOpponent(name.trim().to_string()));
        };
        if boxer.division != self.fighter.division {
            let reason = format!("{} fights at {}", boxer.name, boxer.division);
            return self.decline("Call-out Rejected", Declined::OutOfLeague { name: boxer.name.to_string(), reason });
        }
        if let Err(reason) = check_callout(&self.fighter, boxer) {
            return self.decline("Call-out Rejected", reason);
        }
        self.ensure_ready_to_fight()?;

        if !resolve(callout_acceptance(&self.fighter, boxer), &mut self.rng) {
            return self.decline("Call-out Ignored", Declined::CalloutIgnored { name: boxer.name.to_string() });
        }
        let opponent = instantiate(boxer, self.fighter.division, &mut self.rng);
        self.notify("Fight Accepted!", format!("{} has accepted your challenge! Get ready for war!", boxer.name), Tone::Success);
        Ok(self.book_fight(opponent, None))
    }

    /// Challenges the fighter holding `target_rank` in the division table.
    pub fn challenge_ranked(&mut self, target_rank: u32) -> std::result::Result<FightSnapshot, Declined> {
        if let Err(reason) = check_challenge(&self.fighter, target_rank) {
            return self.decline("Challenge Rejected", reason);
        }
        self.ensure_ready_to_fight()?;
        let table = division_rankings(&self.fighter, &mut self.rng);
        let Some(entry) = table.into_iter().find(|e| e.rank == target_rank && !e.is_player) else {
            return self.decline("Challenge Rejected", Declined::UnknownOpponent(format!("rank #{target_rank}")));
        };
        Ok(self.book_fight(entry.fighter, None))
    }

    // ========== Negotiation ==========

    /// Drafts an offer to one of the scheduled opponents.
    pub fn propose_offer(&mut self, opponent_name: &str) -> std::result::Result<FightOffer, Declined> {
        let Some(opponent) = find_scheduled(self.fighter.division, opponent_name) else {
            return self.decline("Unknown Opponent", Declined::UnknownOpponent(opponent_name.trim().to_string()));
        };
        let id = self.next_offer_id;
        self.next_offer_id += 1;
        let offer = propose_offer(id, &self.fighter, opponent, &self.config.negotiation, &mut self.rng);
        self.offers.push(offer.clone());
        Ok(offer)
    }

    fn offer_index(&mut self, id: u32) -> std::result::Result<usize, Declined> {
        match self.offers.iter().position(|o| o.id == id) {
            Some(index) => Ok(index),
            None => self.decline("Unknown Offer", Declined::UnknownOffer(id)),
        }
    }

    fn announce_answer(&mut self, index: usize, renegotiated: bool) {
        let offer = &self.offers[index];
        let (title, description, tone) = match (offer.status, renegotiated) {
            (OfferStatus::Accepted, false) => (
                "Fight Accepted!",
                format!("{} has accepted your challenge for ${}!", offer.opponent.name, offer.purse),
                Tone::Success,
            ),
            (OfferStatus::Accepted, true) => (
                "Negotiation Successful!",
                format!("{} accepted the new offer of ${}!", offer.opponent.name, offer.purse),
                Tone::Success,
            ),
            (OfferStatus::Withdrawn, _) => (
                "Negotiation Failed",
                "Too many negotiation attempts. The offer has been withdrawn.".to_string(),
                Tone::Destructive,
            ),
            (_, false) => (
                "Fight Rejected",
                format!("{} has declined your offer. Try negotiating or building your reputation.", offer.opponent.name),
                Tone::Destructive,
            ),
            (_, true) => (
                "Negotiation Failed",
                format!("{} rejected the counter-offer.", offer.opponent.name),
                Tone::Destructive,
            ),
        };
        self.notify(title, description, tone);
    }

    pub fn send_offer(&mut self, id: u32) -> std::result::Result<OfferStatus, Declined> {
        let index = self.offer_index(id)?;
        let sent = self.offers[index].send(&self.fighter, &self.config.negotiation, &mut self.rng);
        match sent {
            Ok(status) => {
                self.announce_answer(index, false);
                Ok(status)
            }
            Err(reason) => self.decline("Offer Not Sent", reason),
        }
    }

    pub fn renegotiate_offer(&mut self, id: u32) -> std::result::Result<OfferStatus, Declined> {
        let index = self.offer_index(id)?;
        let answered = self.offers[index].renegotiate(&self.fighter, &self.config.negotiation, &mut self.rng);
        match answered {
            Ok(status) => {
                self.announce_answer(index, true);
                Ok(status)
            }
            Err(reason) => self.decline("Negotiation Failed", reason),
        }
    }

    /// Steps into the ring for an accepted offer; the purse is paid win or lose.
    pub fn fight_offer(&mut self, id: u32) -> std::result::Result<FightSnapshot, Declined> {
        let index = self.offer_index(id)?;
        if self.offers[index].status != OfferStatus::Accepted {
            return self.decline("Offer Not Accepted", Declined::OfferNotAccepted);
        }
        self.ensure_ready_to_fight()?;
        let offer = self.offers.remove(index);
        Ok(self.book_fight(offer.opponent, Some(offer.purse)))
    }

    // ========== Fight ==========

    /// Plays the current round with `action_id`. When the fight ends its
    /// result is folded into the Fighter and the session is dropped.
    pub fn choose_fight_action(&mut self, action_id: &str) -> std::result::Result<ActionOutcome, Declined> {
        let Some(session) = self.fight.as_mut() else {
            return self.decline("No Fight", Declined::NoActiveFight);
        };
        let played = session.play_round(action_id, &self.config.fight, self.narrator.as_ref(), &mut self.rng);
        let round = match played {
            Ok(round) => round,
            Err(reason) => return self.decline("Invalid Move", reason),
        };

        let outcome = if round.success { "SUCCESS!" } else { "FAILED!" };
        let result_text = format!("{} {} {}", round.action.text, outcome, round.narrative);

        let finished = self.fight.as_ref().is_some_and(FightSession::is_over);
        if !finished {
            return Ok(ActionOutcome { result_text, round, session: self.fight_snapshot(), summary: None });
        }

        let summary = self.fight.take().and_then(|session| self.fold_fight(session));
        Ok(ActionOutcome { result_text, round, session: None, summary })
    }

    fn fold_fight(&mut self, session: FightSession) -> Option<FightSummary> {
        let summary = session.summary?;
        let fighter = apply_fight_result(
            &self.fighter,
            &session.opponent,
            summary.won,
            &self.config.career,
            &mut self.rng,
        );
        self.fighter = apply_fight_aftermath(&fighter, &summary, session.purse, &self.config.fight);

        let (title, tone) = if summary.won { ("Victory!", Tone::Success) } else { ("Defeat", Tone::Destructive) };
        let mut description = format!(
            "{} {} {} ({}-{})",
            if summary.won { "Beat" } else { "Lost to" },
            session.opponent.name,
            match summary.method {
                VictoryMethod::Knockout => "by knockout",
                VictoryMethod::TechnicalKnockout => "by TKO",
                VictoryMethod::Decision => "on the scorecards",
            },
            summary.player_score,
            summary.opponent_score
        );
        if let Some(purse) = session.purse {
            description.push_str(&format!(", purse ${purse}"));
        }
        self.notify(title, description, tone);
        Some(summary)
    }

    // ========== Gym, clock, media ==========

    pub fn train_stat(&mut self, stat: &str) -> std::result::Result<TrainingReport, Declined> {
        self.ensure_idle("Training Unavailable")?;
        match apply_training_by_name(&self.fighter, stat, &self.config.training, &mut self.rng) {
            Ok((fighter, report)) => {
                self.fighter = fighter;
                self.notify("Training Complete!", report.message.clone(), Tone::Success);
                Ok(report)
            }
            Err(reason) => self.decline("Training Failed", reason),
        }
    }

    pub fn advance_week(&mut self) -> std::result::Result<WeekReport, Declined> {
        self.ensure_idle("Week Not Advanced")?;
        let (fighter, incoming) = apply_week_advance(&self.fighter, &self.config.career, &mut self.rng);
        self.fighter = fighter;
        self.week += 1;
        tracing::info!(week = self.week, energy = self.fighter.energy, challenges = incoming.len(), "week advanced");

        self.notify("Week Advanced", format!("Week {}: energy {}", self.week, self.fighter.energy), Tone::Info);
        for challenger in &incoming {
            let text = format!("{} ({}) wants to fight you!", challenger.name, challenger.record_line());
            self.notify("Incoming Challenge", text, Tone::Info);
        }
        self.challenges.extend(incoming.iter().cloned());
        let lapsed = self.challenges.len().saturating_sub(MAX_PENDING_CHALLENGES);
        for stale in self.challenges.drain(..lapsed) {
            tracing::debug!(challenger = %stale.name, "challenge lapsed");
        }
        Ok(WeekReport { week: self.week, incoming_challenges: incoming })
    }

    pub fn post(
        &mut self,
        platform: Platform,
        content: &str,
        hashtags: &[String],
    ) -> std::result::Result<SocialPost, Declined> {
        match publish_post(&self.fighter, platform, content, hashtags, &mut self.rng) {
            Ok((fighter, post)) => {
                self.fighter = fighter;
                let mut description = format!("Your {platform} post is now live!");
                if !post.replies.is_empty() {
                    description.push_str(&format!(" {} boxer(s) responded!", post.replies.len()));
                }
                self.notify("Posted Successfully!", description, Tone::Success);
                Ok(post)
            }
            Err(reason) => self.decline("Empty Post", reason),
        }
    }

    /// Posts a random provocation aimed at the media boxers.
    pub fn trash_talk(&mut self, platform: Platform) -> std::result::Result<SocialPost, Declined> {
        let content = trash_talk(&mut self.rng);
        self.post(platform, &content, &["#boxing".to_string()])
    }
}
