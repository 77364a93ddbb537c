//! Fight commentary tables.
//!
//! Narration is flavor only: nothing in the engine reads it back. The session
//! talks to a [`Narrator`] so tests can swap the tables for a stub.

use crate::fight::action::ActionCategory;
use crate::fight::resolver::Intensity;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a fight was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VictoryMethod {
    Knockout,
    TechnicalKnockout,
    Decision,
}

/// Everything the narrator needs to describe one exchange
#[derive(Debug, Clone, Copy)]
pub struct ExchangeContext {
    pub category: ActionCategory,
    pub success: bool,
    pub intensity: Intensity,
    /// Player stamina after the action was paid for
    pub stamina: f32,
}

/// Everything the narrator needs to close the fight
#[derive(Debug, Clone)]
pub struct ClosingContext<'a> {
    pub won: bool,
    pub method: VictoryMethod,
    pub player_name: &'a str,
    pub opponent_name: &'a str,
    pub rounds: u8,
    pub anyone_injured: bool,
}

pub trait Narrator: fmt::Debug {
    fn opening_line(&self, player_name: &str) -> String;
    fn exchange_line(&self, exchange: &ExchangeContext, rng: &mut dyn RngCore) -> String;
    fn closing_line(&self, closing: &ClosingContext<'_>, rng: &mut dyn RngCore) -> String;
}

/// Narrator backed by the built-in string pools
#[derive(Debug, Clone, Copy, Default)]
pub struct TableNarrator;

/// Narrator that never draws from the RNG; for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNarrator;

const OPPONENT_ACTIONS: [&str; 6] = [
    "throws a counter left hook",
    "tries to clinch you",
    "backs away and circles",
    "goes for a body shot",
    "attempts an uppercut",
    "feints and moves laterally",
];

// `{opp}` is replaced by an entry of OPPONENT_ACTIONS.
fn exchange_pool(category: ActionCategory, success: bool) -> &'static [&'static str; 3] {
    match (category, success) {
        (ActionCategory::Aggressive, true) => &[
            "You land a devastating shot! Your opponent staggers back as {opp}. The crowd erupts!",
            "Perfect timing! You connect cleanly while your opponent {opp} but misses!",
            "Boom! Your power shot finds its mark as your opponent {opp} too late!",
        ],
        (ActionCategory::Tactical, true) => &[
            "Smart boxing! You execute perfectly while your opponent {opp}. Clean technique!",
            "Textbook move! Your opponent {opp} but you're already out of range!",
            "Beautiful setup! As your opponent {opp}, you capitalize with precision!",
        ],
        (ActionCategory::Defensive, true) => &[
            "Great defense! Your opponent {opp} but you slip it beautifully and counter!",
            "Perfect timing! You avoid the attack as your opponent {opp} and land your own!",
            "Excellent defense! Your opponent {opp} but hits nothing but air!",
        ],
        (ActionCategory::Risky, true) => &[
            "INCREDIBLE! Your high-risk move pays off huge as your opponent {opp} right into it!",
            "What a gamble! Your opponent {opp} but you connect with a spectacular shot!",
            "Unbelievable! Your opponent {opp} but your risky attack lands perfectly!",
        ],
        (ActionCategory::Aggressive, false) => &[
            "You swing hard but miss! Your opponent {opp} and connects! You're off balance!",
            "Too aggressive! Your opponent {opp} and catches you coming in!",
            "Your power shot misses the mark! Your opponent {opp} and punishes your mistake!",
        ],
        (ActionCategory::Tactical, false) => &[
            "Your opponent reads your move! As you set up, they {opp} and disrupt your plan!",
            "Good idea but poor execution! Your opponent {opp} and beats you to the punch!",
            "Your opponent anticipated that! They {opp} and counter your technique!",
        ],
        (ActionCategory::Defensive, false) => &[
            "Too passive! Your opponent {opp} and finds an opening! You need more offense!",
            "Your defense breaks down! Your opponent {opp} and gets through your guard!",
            "Playing it safe backfires! Your opponent {opp} and takes control!",
        ],
        (ActionCategory::Risky, false) => &[
            "Costly mistake! Your opponent {opp} and makes you pay for the wild attempt!",
            "High risk, no reward! Your opponent {opp} and capitalizes on your opening!",
            "The gamble fails! Your opponent {opp} and punishes your recklessness!",
        ],
    }
}

fn intensity_prefix(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Low | Intensity::Medium => "",
        Intensity::High => "The pace is picking up! ",
        Intensity::Extreme => "Championship rounds now! ",
    }
}

fn expression_pool(exchange: &ExchangeContext) -> &'static [&'static str; 4] {
    if exchange.success {
        match exchange.category {
            ActionCategory::Aggressive | ActionCategory::Risky => &[
                "Your eyes light up with predatory intensity as you taste blood!",
                "A fierce snarl crosses your face as you press the attack!",
                "Your jaw clenches with determination, sensing victory!",
                "A dangerous smile creeps across your bloodied face!",
            ],
            ActionCategory::Tactical => &[
                "Your eyes narrow with focused calculation!",
                "A look of pure concentration crosses your features!",
                "Your face shows the calm confidence of a master tactician!",
                "Your expression remains ice-cold and methodical!",
            ],
            ActionCategory::Defensive => &[
                "Your face shows the satisfaction of a job well done!",
                "A slight smirk appears as you weather the storm!",
                "Your eyes remain alert and ready for the counter!",
                "Your face displays the composure of a seasoned veteran!",
            ],
        }
    } else if exchange.stamina < 30.0 {
        &[
            "Your face shows the desperation of a fighter running on fumes!",
            "Exhaustion is written all over your sweat-drenched features!",
            "Your eyes show the panic of a fighter in deep trouble!",
            "Your face is a mask of pain and fatigue!",
        ]
    } else {
        &[
            "Frustration flashes across your face as the shot misses!",
            "Your expression darkens with the realization of your mistake!",
            "Concern creeps into your eyes as your opponent gains confidence!",
            "Your face shows the strain of a fight slipping away!",
        ]
    }
}

const INJURY_ADDONS: [&str; 4] = [
    " Both fighters showed incredible heart fighting through their injuries!",
    " The physical toll of this fight was evident on both men!",
    " What warrior spirit from both fighters despite the punishment they took!",
    " The doctors will need to check both fighters after this brutal encounter!",
];

// `{p}` player, `{o}` opponent, `{r}` rounds.
fn closing_pool(won: bool, method: VictoryMethod) -> &'static [&'static str; 3] {
    match (won, method) {
        (true, VictoryMethod::Knockout) => &[
            "INCREDIBLE! {p} has done it with a devastating knockout! {o} is down and this one is OVER!",
            "LIGHTS OUT! {p} just delivered a crushing blow that sent {o} crashing to the canvas!",
            "WHAT A KNOCKOUT! {p} just starched {o} with a picture-perfect shot! The arena has erupted!",
        ],
        (true, VictoryMethod::TechnicalKnockout) => &[
            "The referee has stopped this fight! {p} was just too much for {o} tonight!",
            "TKO! The corner has seen enough and thrown in the towel! {p} was breaking down {o} systematically!",
            "Technical knockout! {p} has forced the stoppage with relentless pressure and precision!",
        ],
        (true, VictoryMethod::Decision) => &[
            "What a war! After {r} grueling rounds, {p} takes the victory on the scorecards!",
            "A hard-fought decision victory for {p}! Skill, heart, and determination on display for {r} rounds!",
            "The judges have spoken and {p} is your winner! What a back-and-forth battle!",
        ],
        (false, VictoryMethod::Knockout) => &[
            "Oh no! {p} has been knocked out! {o} landed the perfect shot and {p} couldn't recover!",
            "{p} is down and hurt! The referee is counting and... that's it! {o} has scored a dramatic knockout!",
            "DEVASTATING knockout by {o}! {p} walked into that shot and paid the ultimate price!",
        ],
        (false, VictoryMethod::TechnicalKnockout) => &[
            "The fight has been stopped! {p} took too much punishment and the referee had to step in!",
            "TKO defeat for {p}! The corner made the right call to protect their fighter!",
            "Technical knockout! {p} showed incredible heart but the damage was mounting!",
        ],
        (false, VictoryMethod::Decision) => &[
            "Tough luck for {p} tonight! After {r} hard-fought rounds, the judges saw it for {o}!",
            "A learning experience for {p}! {o} took the decision victory but {p} showed real class!",
            "The scorecards favor {o} tonight! {p} fought valiantly but came up just short!",
        ],
    }
}

fn pick<'a>(pool: &'a [&'a str], rng: &mut dyn RngCore) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

impl Narrator for TableNarrator {
    fn opening_line(&self, player_name: &str) -> String {
        format!(
            "Ladies and gentlemen, welcome to tonight's main event! In the red corner, we have {player_name}!"
        )
    }

    fn exchange_line(&self, exchange: &ExchangeContext, rng: &mut dyn RngCore) -> String {
        let opponent_action = pick(&OPPONENT_ACTIONS, rng);
        let line = pick(exchange_pool(exchange.category, exchange.success), rng)
            .replace("{opp}", opponent_action);
        let expression = pick(expression_pool(exchange), rng);
        format!("{}{} {}", intensity_prefix(exchange.intensity), line, expression)
    }

    fn closing_line(&self, closing: &ClosingContext<'_>, rng: &mut dyn RngCore) -> String {
        let mut line = pick(closing_pool(closing.won, closing.method), rng)
            .replace("{p}", closing.player_name)
            .replace("{o}", closing.opponent_name)
            .replace("{r}", &closing.rounds.to_string());
        if closing.anyone_injured {
            line.push_str(pick(&INJURY_ADDONS, rng));
        }
        line
    }
}

impl Narrator for PlainNarrator {
    fn opening_line(&self, player_name: &str) -> String {
        format!("Main event: {player_name}")
    }

    fn exchange_line(&self, exchange: &ExchangeContext, _rng: &mut dyn RngCore) -> String {
        let outcome = if exchange.success { "lands" } else { "misses" };
        format!("{} {}", exchange.category, outcome)
    }

    fn closing_line(&self, closing: &ClosingContext<'_>, _rng: &mut dyn RngCore) -> String {
        let result = if closing.won { "wins" } else { "loses" };
        format!("{} {} by {:?} after {} rounds", closing.player_name, result, closing.method, closing.rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_exchange_lines_fill_placeholders() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for category in ActionCategory::iter() {
            for success in [true, false] {
                let exchange =
                    ExchangeContext { category, success, intensity: Intensity::Extreme, stamina: 25.0 };
                let line = TableNarrator.exchange_line(&exchange, &mut rng);
                assert!(!line.contains("{opp}"));
                assert!(line.starts_with("Championship rounds now!"));
            }
        }
    }

    #[test]
    fn test_closing_line_with_injuries() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let closing = ClosingContext {
            won: false,
            method: VictoryMethod::Decision,
            player_name: "Kid Danger",
            opponent_name: "Mike Johnson",
            rounds: 10,
            anyone_injured: true,
        };
        let line = TableNarrator.closing_line(&closing, &mut rng);
        assert!(!line.contains("{p}") && !line.contains("{o}") && !line.contains("{r}"));
        assert!(INJURY_ADDONS.iter().any(|addon| line.ends_with(addon)));
    }
}
