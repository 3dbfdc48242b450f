//! Full match flow integration tests
//!
//! Drives the director the way a host scheduler would: one tick call per
//! simulation step, with eliminations scripted by deactivating entities.

use iron_arena::arena::SimArena;
use iron_arena::core::config::MatchConfig;
use iron_arena::presentation::{ConsoleDisplay, StaticCamera};
use iron_arena::roster::MatchSetup;
use iron_arena::round::{MatchDirector, RoundPhase, TickOutcome};

fn quick_config() -> MatchConfig {
    MatchConfig {
        start_delay_ticks: 3,
        end_delay_ticks: 5,
        defender_count: 2,
        opponent_count: 3,
        ..MatchConfig::default()
    }
}

struct Host {
    arena: SimArena,
    camera: StaticCamera,
    status: ConsoleDisplay,
    director: MatchDirector,
}

impl Host {
    fn new(config: MatchConfig) -> Self {
        let setup = MatchSetup::line_formation(&config);
        let mut arena = SimArena::new();
        let mut camera = StaticCamera::default();
        let mut status = ConsoleDisplay::default();
        let director = MatchDirector::spawn(config, &setup, &mut arena, &mut camera, &mut status);
        Self {
            arena,
            camera,
            status,
            director,
        }
    }

    fn tick(&mut self) -> TickOutcome {
        self.director
            .tick(&mut self.arena, &mut self.camera, &mut self.status)
    }

    fn tick_until(&mut self, phase: RoundPhase) -> u32 {
        let mut ticks = 0;
        while self.director.phase != phase {
            assert_eq!(self.tick(), TickOutcome::Running);
            ticks += 1;
            assert!(ticks < 10_000, "never reached {phase:?}");
        }
        ticks
    }

    fn kill_opponents(&mut self) {
        for i in 0..self.director.opponents.len() {
            let entity = self.director.opponents[i].entity;
            self.arena.get_mut(entity).deactivate();
        }
    }

    fn kill_defenders(&mut self) {
        for i in 0..self.director.defenders.len() {
            let entity = self.director.defenders[i].entity;
            self.arena.get_mut(entity).deactivate();
        }
    }

    /// Win the currently announced round and stop at the next Starting
    fn win_round(&mut self) {
        self.tick_until(RoundPhase::Playing);
        self.kill_opponents();
        self.tick_until(RoundPhase::Ending);
        self.tick_until(RoundPhase::Starting);
    }
}

#[test]
fn test_phases_run_in_order_for_a_full_round() {
    let mut host = Host::new(quick_config());

    assert_eq!(host.director.phase, RoundPhase::Starting);
    assert_eq!(host.status.current, "ROUND 1");

    let held = host.tick_until(RoundPhase::Playing);
    assert_eq!(held, 4); // 3 hold ticks + the transition tick
    assert!(host.status.current.is_empty());

    // Round continues while both sides live; many ticks pass
    for _ in 0..50 {
        assert_eq!(host.tick(), TickOutcome::Running);
        assert_eq!(host.director.phase, RoundPhase::Playing);
    }

    host.kill_opponents();
    host.tick();
    assert_eq!(host.director.phase, RoundPhase::Ending);
}

#[test]
fn test_score_accumulates_across_won_rounds() {
    let mut host = Host::new(quick_config());

    // Rounds 1..=3 won: 0 + 1000 + 2000 points
    host.win_round();
    assert_eq!(host.director.score.total_points(), 0);
    host.win_round();
    assert_eq!(host.director.score.total_points(), 1000);
    host.win_round();
    assert_eq!(host.director.score.total_points(), 3000);

    assert_eq!(host.status.current, "ROUND 4");
    assert!(host.director.defenders.iter().all(|u| u.wins == 3));
}

#[test]
fn test_opponent_difficulty_ramps_monotonically() {
    let mut host = Host::new(quick_config());
    let entity = host.director.opponents[0].entity;

    let mut last_health = 0.0;
    let mut last_speed = 0.0;
    for _ in 0..4 {
        let e = host.arena.get(entity);
        assert!(e.health.starting > last_health);
        assert!(e.mobility.speed > last_speed);
        last_health = e.health.starting;
        last_speed = e.mobility.speed;
        host.win_round();
    }
}

#[test]
fn test_reload_ramp_bottoms_out_at_minimum() {
    let config = MatchConfig {
        opponent_base_reload: 3.0,
        ..quick_config()
    };
    let mut host = Host::new(config);
    let entity = host.director.opponents[0].entity;

    // Round 1: 3.0 - 1 = 2.0; by round 3 the raw ramp goes to zero and
    // the clamp holds the effective reload at exactly 1
    assert_eq!(host.arena.get(entity).weapon.reload_time, 2.0);
    host.win_round();
    assert_eq!(host.arena.get(entity).weapon.reload_time, 1.0);
    host.win_round();
    assert_eq!(host.arena.get(entity).weapon.reload_time, 1.0);
}

#[test]
fn test_units_come_back_reset_after_each_round() {
    let mut host = Host::new(quick_config());
    host.tick_until(RoundPhase::Playing);

    // Scatter everyone and kill the opponents
    for i in 0..host.director.defenders.len() {
        let unit = host.director.defenders[i].clone();
        let e = host.arena.get_mut(unit.entity);
        e.pose.position.x += 57.0;
        e.pose.heading = 13.0;
    }
    host.kill_opponents();
    host.tick_until(RoundPhase::Ending);
    host.tick_until(RoundPhase::Starting);

    for unit in host
        .director
        .defenders
        .iter()
        .chain(host.director.opponents.iter())
    {
        let e = host.arena.get(unit.entity);
        assert_eq!(e.pose, unit.spawn_pose);
        assert!(e.active);
        assert_eq!(e.health.current, e.health.starting);
        assert!(!e.mobility.enabled, "controls stay locked during Starting");
    }
}

#[test]
fn test_defender_wipe_restarts_the_whole_match() {
    let mut host = Host::new(quick_config());

    // Bank some points first
    host.win_round();
    host.win_round();
    assert_eq!(host.director.score.total_points(), 1000);

    host.tick_until(RoundPhase::Playing);
    host.kill_defenders();
    host.tick_until(RoundPhase::Ending);
    assert!(host
        .status
        .current
        .contains("YOUR TOTAL POINTS ARE: 1000"));

    let mut outcome = TickOutcome::Running;
    for _ in 0..10 {
        outcome = host.tick();
        if outcome == TickOutcome::RestartMatch {
            break;
        }
    }
    assert_eq!(outcome, TickOutcome::RestartMatch);

    // Host rebuilds; fresh state all around
    let rebuilt = Host::new(quick_config());
    assert_eq!(rebuilt.director.round_number, 2);
    assert_eq!(rebuilt.status.current, "ROUND 1");
    assert_eq!(rebuilt.director.score.total_points(), 0);
    assert!(rebuilt.director.defenders.iter().all(|u| u.wins == 0));
}

#[test]
fn test_simultaneous_wipe_is_a_defender_loss() {
    let mut host = Host::new(quick_config());
    host.tick_until(RoundPhase::Playing);

    host.kill_defenders();
    host.kill_opponents();
    host.tick();

    assert_eq!(host.director.phase, RoundPhase::Ending);
    assert!(host.status.current.starts_with("GAME OVER."));
}

#[test]
fn test_entity_refs_stable_across_many_rounds() {
    let mut host = Host::new(quick_config());
    let refs: Vec<_> = host
        .director
        .defenders
        .iter()
        .chain(host.director.opponents.iter())
        .map(|u| u.entity)
        .collect();
    let spawned = host.arena.len();

    for _ in 0..5 {
        host.win_round();
    }

    // Spawning happened exactly once; the same entities are reused
    assert_eq!(host.arena.len(), spawned);
    let refs_after: Vec<_> = host
        .director
        .defenders
        .iter()
        .chain(host.director.opponents.iter())
        .map(|u| u.entity)
        .collect();
    assert_eq!(refs, refs_after);
}
