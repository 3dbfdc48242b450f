//! Property tests for the two numeric contracts: the reload clamp and
//! the round scoring formula.

use proptest::prelude::*;

use iron_arena::arena::{EntityKind, SimArena};
use iron_arena::core::types::{Faction, Pose, TintColor, UnitId};
use iron_arena::roster::{UnitHandle, UnitSpec, MIN_RELOAD_TIME};
use iron_arena::round::{ScoreBoard, POINTS_PER_ROUND};

fn configured_reload(reload_time: f32) -> f32 {
    let mut arena = SimArena::new();
    let spec = UnitSpec {
        tint: TintColor::rgb(0xd2, 0x3b, 0x2d),
        spawn_pose: Pose::default(),
    };
    let entity = arena.spawn(UnitId::new(), EntityKind::OpponentTank, spec.spawn_pose);
    let mut handle = UnitHandle::new(Faction::Opponents, &spec, 1, entity);
    handle.configure(&mut arena, 1.0, 10.0, reload_time);
    arena.get(entity).weapon.reload_time
}

proptest! {
    #[test]
    fn reload_below_one_becomes_exactly_one(reload in -1_000.0f32..1.0) {
        prop_assert_eq!(configured_reload(reload), MIN_RELOAD_TIME);
    }

    #[test]
    fn reload_at_or_above_one_is_unchanged(reload in 1.0f32..1_000.0) {
        prop_assert_eq!(configured_reload(reload), reload);
    }

    #[test]
    fn win_award_follows_the_formula(round in 1u32..10_000) {
        let mut score = ScoreBoard::new();
        let points = score.award_for_round_end(round, true);
        prop_assert_eq!(points, (round - 1) * POINTS_PER_ROUND);
        prop_assert_eq!(score.total_points(), points);
    }

    #[test]
    fn loss_award_is_always_zero(round in 1u32..10_000) {
        let mut score = ScoreBoard::new();
        prop_assert_eq!(score.award_for_round_end(round, false), 0);
        prop_assert_eq!(score.total_points(), 0);
    }

    #[test]
    fn total_is_monotonic_over_any_outcome_sequence(
        outcomes in prop::collection::vec((1u32..500, any::<bool>()), 0..64)
    ) {
        let mut score = ScoreBoard::new();
        let mut previous = 0;
        let mut awarded_sum = 0;

        for (round, won) in outcomes {
            awarded_sum += score.award_for_round_end(round, won);
            prop_assert!(score.total_points() >= previous);
            previous = score.total_points();
        }

        // Re-querying is idempotent and the total is the sum of awards
        prop_assert_eq!(score.total_points(), awarded_sum);
        prop_assert_eq!(score.total_points(), previous);
    }
}
