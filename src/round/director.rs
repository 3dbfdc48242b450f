//! Match director - the tick-driven round state machine
//!
//! Each round walks Starting -> Playing -> Ending. Starting and Ending
//! hold for a configured number of ticks; Playing re-checks the win
//! condition once per tick with no timeout. An external scheduler calls
//! `tick` once per simulation step; nothing here suspends on its own.

use serde::{Deserialize, Serialize};

use crate::arena::entity::EntityKind;
use crate::arena::table::{EntityRef, SimArena};
use crate::core::config::MatchConfig;
use crate::core::types::{Faction, Tick};
use crate::presentation::{CameraRig, StatusDisplay};
use crate::roster::handle::{MatchSetup, UnitHandle};
use crate::round::score::ScoreBoard;
use crate::round::verdict::{evaluate_round, RoundVerdict};

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Units reset and locked, round banner up, holding for the start delay
    Starting,
    /// Controls released; waiting on the win condition
    Playing,
    /// Controls revoked, summary up, holding for the end delay
    Ending,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Match continues; call `tick` again next simulation step
    Running,
    /// Defenders lost the round just ended. Discard the director and the
    /// arena and rebuild both; that teardown is the match restart.
    RestartMatch,
}

/// Owns the roster and all per-match state, and sequences the rounds
///
/// The roster, round counter, and scoreboard have exactly one writer:
/// this struct, driven from a single task. A match restart is modeled by
/// dropping the director rather than by any in-place rewind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDirector {
    pub config: MatchConfig,
    pub defenders: Vec<UnitHandle>,
    pub opponents: Vec<UnitHandle>,
    /// Monotonic within a match; already advanced past the round being
    /// played once Starting has announced it
    pub round_number: u32,
    pub score: ScoreBoard,
    pub phase: RoundPhase,
    /// Ticks left in the current timed hold (Starting / Ending only)
    wait_remaining: u32,
    /// Verdict that closed the current Ending phase
    last_verdict: RoundVerdict,
    elapsed_ticks: Tick,
}

impl MatchDirector {
    /// Spawn the full roster, register camera targets, and enter the
    /// first Starting phase
    ///
    /// Spawning happens exactly once per match; every later round reuses
    /// the same entities via reset and reconfigure.
    pub fn spawn(
        config: MatchConfig,
        setup: &MatchSetup,
        arena: &mut SimArena,
        camera: &mut dyn CameraRig,
        status: &mut dyn StatusDisplay,
    ) -> Self {
        let defenders: Vec<UnitHandle> = setup
            .defenders
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let entity = arena.spawn(
                    crate::core::types::UnitId::new(),
                    EntityKind::DefenderTank,
                    spec.spawn_pose,
                );
                UnitHandle::new(Faction::Defenders, spec, i as u32 + 1, entity)
            })
            .collect();

        let opponents: Vec<UnitHandle> = setup
            .opponents
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let entity = arena.spawn(
                    crate::core::types::UnitId::new(),
                    EntityKind::OpponentTank,
                    spec.spawn_pose,
                );
                UnitHandle::new(Faction::Opponents, spec, i as u32 + 1, entity)
            })
            .collect();

        let mut director = Self {
            config,
            defenders,
            opponents,
            round_number: 1,
            score: ScoreBoard::new(),
            phase: RoundPhase::Starting,
            wait_remaining: 0,
            last_verdict: RoundVerdict::RoundContinues,
            elapsed_ticks: 0,
        };

        // Defenders keep fixed stats for the whole match
        let (speed, health, reload) = (
            director.config.defender_speed,
            director.config.defender_health,
            director.config.defender_reload,
        );
        for unit in &mut director.defenders {
            unit.configure(arena, speed, health, reload);
        }

        // The camera follows the defender roster
        let targets: Vec<EntityRef> = director.defenders.iter().map(|u| u.entity).collect();
        camera.set_targets(&targets);

        tracing::info!(
            defenders = director.defenders.len(),
            opponents = director.opponents.len(),
            "roster spawned"
        );

        director.begin_starting(arena, camera, status);
        director
    }

    /// Advance the match by one simulation tick
    pub fn tick(
        &mut self,
        arena: &mut SimArena,
        camera: &mut dyn CameraRig,
        status: &mut dyn StatusDisplay,
    ) -> TickOutcome {
        self.elapsed_ticks += 1;

        match self.phase {
            RoundPhase::Starting => {
                if self.wait_remaining > 0 {
                    self.wait_remaining -= 1;
                    return TickOutcome::Running;
                }
                self.begin_playing(arena, status);
                TickOutcome::Running
            }
            RoundPhase::Playing => {
                let verdict = evaluate_round(&self.defenders, &self.opponents, arena);
                if verdict.is_round_over() {
                    self.begin_ending(arena, status, verdict);
                }
                TickOutcome::Running
            }
            RoundPhase::Ending => {
                if self.wait_remaining > 0 {
                    self.wait_remaining -= 1;
                    return TickOutcome::Running;
                }
                if self.last_verdict == RoundVerdict::DefendersEliminated {
                    tracing::info!(
                        rounds_survived = self.round_number.saturating_sub(2),
                        total_points = self.score.total_points(),
                        "defenders wiped, requesting match restart"
                    );
                    return TickOutcome::RestartMatch;
                }
                self.begin_starting(arena, camera, status);
                TickOutcome::Running
            }
        }
    }

    pub fn elapsed_ticks(&self) -> Tick {
        self.elapsed_ticks
    }

    /// Round setup: rescale opponents, reset and lock everyone, snap the
    /// camera, announce the round, advance the counter, arm the hold
    fn begin_starting(
        &mut self,
        arena: &mut SimArena,
        camera: &mut dyn CameraRig,
        status: &mut dyn StatusDisplay,
    ) {
        let round = self.round_number;

        // Linear difficulty ramp: faster, tougher, quicker-firing each
        // round. Reload is clamped at configure once the ramp crosses the
        // minimum.
        let speed = self.config.opponent_base_speed * round as f32;
        let health = self.config.opponent_base_health * round as f32;
        let reload = self.config.opponent_base_reload - round as f32;
        for unit in &mut self.opponents {
            unit.configure(arena, speed, health, reload);
        }

        for unit in self.defenders.iter().chain(self.opponents.iter()) {
            unit.reset(arena);
            unit.disable_control(arena);
        }

        camera.set_start_framing();

        status.set_text(&format!("ROUND {round}"));
        tracing::debug!(round, "round starting");
        self.round_number += 1;

        self.phase = RoundPhase::Starting;
        self.wait_remaining = self.config.start_delay_ticks;
    }

    /// Hand control to the units and wait on the win condition
    fn begin_playing(&mut self, arena: &mut SimArena, status: &mut dyn StatusDisplay) {
        for unit in self.defenders.iter().chain(self.opponents.iter()) {
            unit.enable_control(arena);
        }
        status.set_text("");
        self.phase = RoundPhase::Playing;
    }

    /// Round teardown: revoke control, score the round, publish the
    /// summary, arm the end hold
    fn begin_ending(
        &mut self,
        arena: &mut SimArena,
        status: &mut dyn StatusDisplay,
        verdict: RoundVerdict,
    ) {
        for unit in self.defenders.iter().chain(self.opponents.iter()) {
            unit.disable_control(arena);
        }

        let defenders_won = verdict == RoundVerdict::OpponentsEliminated;
        // round_number was advanced during Starting; undo that to score
        // the round actually played
        let ended_round = self.round_number - 1;
        let points = self.score.award_for_round_end(ended_round, defenders_won);

        let winners = if defenders_won {
            &mut self.defenders
        } else {
            &mut self.opponents
        };
        for unit in winners.iter_mut() {
            if arena.get(unit.entity).active {
                unit.wins += 1;
            }
        }

        let message = if defenders_won {
            format!("ALL ENEMIES DESTROYED!\n+{points} POINTS\nGET READY FOR THE NEXT ROUND!")
        } else {
            format!(
                "GAME OVER.\nYOUR TOTAL POINTS ARE: {}",
                self.score.total_points()
            )
        };
        status.set_text(&message);

        tracing::info!(
            round = ended_round,
            defenders_won,
            points,
            total_points = self.score.total_points(),
            "round ended"
        );

        self.last_verdict = verdict;
        self.phase = RoundPhase::Ending;
        self.wait_remaining = self.config.end_delay_ticks;
    }
}
