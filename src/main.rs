//! Headless match runner
//!
//! Drives the round loop end to end with a seeded skirmish stand-in for
//! the unit behavior subsystems, then prints a match summary. Useful for
//! balance checks and for watching the orchestration without a renderer.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use iron_arena::arena::{EntityRef, SimArena};
use iron_arena::core::config::MatchConfig;
use iron_arena::core::error::{ArenaError, Result};
use iron_arena::presentation::{ConsoleDisplay, StaticCamera};
use iron_arena::roster::{MatchSetup, UnitHandle};
use iron_arena::round::{MatchDirector, RoundPhase, TickOutcome};

/// Headless runner for round-based arena matches
#[derive(Parser, Debug)]
#[command(name = "iron-arena")]
#[command(about = "Run a headless round-based arena match")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum simulation ticks before the run stops
    #[arg(long, default_value_t = 500_000)]
    max_ticks: u64,

    /// Stop after this many full-match restarts
    #[arg(long, default_value_t = 1)]
    max_restarts: u32,

    /// Optional TOML file overriding the default match tunables
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// Summary of the final match before the run stopped
#[derive(Serialize)]
struct MatchSummary {
    seed: u64,
    ticks: u64,
    restarts: u32,
    rounds_survived: u32,
    total_points: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let config = match &args.config {
        Some(path) => MatchConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => MatchConfig::default(),
    };
    config.validate().map_err(ArenaError::InvalidConfig)?;

    tracing::info!(seed, "starting headless match");

    let mut camera = StaticCamera::default();
    let mut status = ConsoleDisplay::default();
    let mut ticks: u64 = 0;
    let mut restarts: u32 = 0;

    let summary = loop {
        // A fresh arena and director per match; the previous ones are the
        // discarded state of the restart model
        let setup = MatchSetup::line_formation(&config);
        let mut arena = SimArena::new();
        let mut director =
            MatchDirector::spawn(config.clone(), &setup, &mut arena, &mut camera, &mut status);

        let outcome = loop {
            ticks += 1;
            if director.phase == RoundPhase::Playing {
                skirmish_tick(&mut arena, &director, &mut rng);
            }
            match director.tick(&mut arena, &mut camera, &mut status) {
                TickOutcome::Running => {}
                TickOutcome::RestartMatch => break Some(()),
            }
            if ticks >= args.max_ticks {
                tracing::warn!(ticks, "max tick count reached, stopping mid-match");
                break None;
            }
        };

        // round_number sits two past the last completed round: one for the
        // Starting-phase advance, one for the round the defenders lost
        let summary = MatchSummary {
            seed,
            ticks,
            restarts,
            rounds_survived: director.round_number.saturating_sub(2),
            total_points: director.score.total_points(),
        };

        match outcome {
            Some(()) => {
                restarts += 1;
                if restarts >= args.max_restarts {
                    break MatchSummary { restarts, ..summary };
                }
            }
            None => break summary,
        }
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("seed:            {}", summary.seed);
        println!("ticks:           {}", summary.ticks);
        println!("restarts:        {}", summary.restarts);
        println!("rounds survived: {}", summary.rounds_survived);
        println!("total points:    {}", summary.total_points);
    }

    Ok(())
}

/// Stand-in for the excluded unit behavior subsystems
///
/// Each Playing tick, every live unit with an enabled, cooled-down weapon
/// fires at a random live enemy. Honors the same sub-component flags the
/// real movement/combat systems would, so the orchestration sees
/// realistic eliminations.
fn skirmish_tick(arena: &mut SimArena, director: &MatchDirector, rng: &mut StdRng) {
    exchange_fire(arena, &director.defenders, &director.opponents, rng);
    exchange_fire(arena, &director.opponents, &director.defenders, rng);
}

fn exchange_fire(
    arena: &mut SimArena,
    shooters: &[UnitHandle],
    targets: &[UnitHandle],
    rng: &mut StdRng,
) {
    let live_targets: Vec<EntityRef> = targets
        .iter()
        .filter(|t| t.is_alive(arena))
        .map(|t| t.entity)
        .collect();

    for shooter in shooters {
        let entity = arena.get_mut(shooter.entity);
        entity.cool_weapon();
        if live_targets.is_empty() || !entity.try_fire() {
            continue;
        }

        let damage = rng.gen_range(2.0..6.0);
        let target = live_targets[rng.gen_range(0..live_targets.len())];
        arena.get_mut(target).apply_damage(damage);
    }
}
