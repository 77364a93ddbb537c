//! Ring Legends CLI
//!
//! Headless harness: registers a fighter, then auto-plays either a single
//! fight or a run of career weeks with a fixed seed.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rl_core::config::FightConfig;
use rl_core::fight::{success_chance, FightAction};
use rl_core::fighter::MANAGER_NAME;
use rl_core::{Career, CareerConfig, Division, FightSummary, Fighter, FightingStyle, StatId};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "ring_legends")]
#[command(about = "Play a boxing career from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RNG seed; the same seed replays the same career
    #[arg(long, global = true, default_value_t = 42)]
    seed: u64,

    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Subcommand)]
enum Commands {
    /// Book and auto-play one unranked fight
    Fight {
        #[command(flatten)]
        fighter: FighterArgs,
    },

    /// Auto-play a career for a number of weeks
    Career {
        #[command(flatten)]
        fighter: FighterArgs,

        /// Weeks to simulate
        #[arg(long, default_value_t = 12)]
        weeks: u32,
    },
}

#[derive(clap::Args)]
struct FighterArgs {
    #[arg(long, default_value = "Kid Ring")]
    name: String,

    #[arg(long, default_value_t = 21)]
    age: u8,

    /// e.g. "welterweight", "light_heavyweight"
    #[arg(long, default_value = "middleweight")]
    division: String,

    /// balanced, brawler, boxer, slugger or counterpuncher
    #[arg(long, default_value = "balanced")]
    style: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct FightLog {
    opponent: String,
    commentary: Vec<String>,
    summary: Option<FightSummary>,
}

#[derive(Debug, Serialize)]
struct CareerLog {
    weeks: u32,
    record: String,
    win_rate: u32,
    money: u64,
    rank: String,
    fights: Vec<FightLog>,
    notifications: Vec<String>,
    advice: String,
}

/// Highest expected points among affordable actions that keep stamina above
/// `reserve`; the cheapest action when none does.
fn pick_action<'a>(
    actions: &'a [FightAction],
    fighter: &Fighter,
    config: &FightConfig,
    reserve: f32,
) -> Option<&'a FightAction> {
    let stamina = fighter.stamina;
    let expected = |a: &FightAction| success_chance(fighter, a, config) * a.category.points() as f32;
    actions
        .iter()
        .filter(|a| a.is_affordable(stamina) && stamina - a.stamina_cost as f32 > reserve)
        .max_by(|a, b| expected(a).total_cmp(&expected(b)))
        .or_else(|| actions.iter().min_by_key(|a| a.stamina_cost))
}

/// Weakest of the three core attributes.
fn weakest_stat(career: &Career) -> StatId {
    let fighter = career.fighter();
    [StatId::Power, StatId::Speed, StatId::Defense]
        .into_iter()
        .min_by(|a, b| fighter.stat(*a).total_cmp(&fighter.stat(*b)))
        .unwrap_or(StatId::Power)
}

fn create_career(args: &FighterArgs, seed: u64) -> Result<Career> {
    let division: Division = args
        .division
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown division: {}", args.division))?;
    let style: FightingStyle =
        args.style.parse().map_err(|_| anyhow::anyhow!("unknown style: {}", args.style))?;
    let config = CareerConfig::from_env().context("loading career config")?;
    Ok(Career::create(&args.name, args.age, division, style, config, seed)?)
}

/// Plays the active fight to the final bell.
fn play_fight(career: &mut Career) -> Result<FightLog> {
    let config = career.config().fight.clone();
    let reserve = config.stamina_end_threshold as f32;
    let snapshot = career.fight_snapshot().context("no fight booked")?;
    let mut log = FightLog { opponent: snapshot.opponent_name, commentary: snapshot.commentary_tail, summary: None };

    while let Some(session) = career.active_fight() {
        let action = pick_action(&session.offered_actions, &session.player, &config, reserve)
            .map(|a| a.id.clone())
            .context("no action offered")?;
        let outcome = career.choose_fight_action(&action)?;
        log.commentary.push(format!("Round {}: {}", outcome.round.round, outcome.result_text));
        if let Some(summary) = outcome.summary {
            log.commentary.push(summary.closing_commentary.clone());
            log.summary = Some(summary);
        }
    }
    Ok(log)
}

fn run_fight(args: &FighterArgs, seed: u64) -> Result<FightLog> {
    let mut career = create_career(args, seed)?;
    let recovery = career.config().career.recovery_weeks;
    for _ in 0..recovery {
        career.advance_week()?;
    }
    career.fight_unranked()?;
    play_fight(&mut career)
}

/// One week: fight when allowed, otherwise train the weakest stat, then rest.
fn run_career(args: &FighterArgs, weeks: u32, seed: u64) -> Result<CareerLog> {
    let mut career = create_career(args, seed)?;
    let mut fights = Vec::new();

    for _ in 0..weeks {
        let challenger = career.challenges().first().map(|c| c.name.clone());
        let booked = match challenger {
            Some(name) => career.accept_challenge(&name).or_else(|_| career.fight_unranked()),
            None => career.fight_unranked(),
        };
        if booked.is_ok() {
            fights.push(play_fight(&mut career)?);
        } else {
            let stat = weakest_stat(&career);
            if let Err(reason) = career.train_stat(&stat.to_string()) {
                log::debug!("skipped training: {reason}");
            }
        }
        career.advance_week()?;
    }

    let fighter = career.fighter();
    log::info!("career finished after {weeks} weeks at {}", fighter.record_line());
    Ok(CareerLog {
        weeks: career.week(),
        record: fighter.record_line(),
        win_rate: fighter.win_rate(),
        money: fighter.money,
        rank: career.rank().label(),
        fights,
        notifications: career
            .drain_notifications()
            .into_iter()
            .map(|n| format!("{}: {}", n.title, n.description))
            .collect(),
        advice: career.advice().to_string(),
    })
}

fn print_fight(log: &FightLog) {
    println!("vs {}", log.opponent);
    for line in &log.commentary {
        println!("  {line}");
    }
    if let Some(summary) = &log.summary {
        println!(
            "  => {} by {:?} after {} rounds ({}-{})",
            if summary.won { "WIN" } else { "LOSS" },
            summary.method,
            summary.rounds,
            summary.player_score,
            summary.opponent_score
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fight { fighter } => {
            let log = run_fight(&fighter, cli.seed)?;
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&log)?),
                Format::Text => print_fight(&log),
            }
        }
        Commands::Career { fighter, weeks } => {
            let log = run_career(&fighter, weeks, cli.seed)?;
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&log)?),
                Format::Text => {
                    println!(
                        "Week {}: {} ({}% wins) | ${} | {}",
                        log.weeks, log.record, log.win_rate, log.money, log.rank
                    );
                    for fight in &log.fights {
                        print_fight(fight);
                    }
                    println!("{MANAGER_NAME}: {}", log.advice);
                }
            }
        }
    }
    Ok(())
}
