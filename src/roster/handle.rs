//! Per-unit roster records
//!
//! A `UnitHandle` pairs a roster identity (faction, tint, player index,
//! win count) with the entity ref of its live instance. Handles are
//! created once at match spawn and discarded only on a full restart.

use serde::{Deserialize, Serialize};

use crate::arena::table::{EntityRef, SimArena};
use crate::core::config::MatchConfig;
use crate::core::types::{Faction, Pose, TintColor, UnitId, Vec2};

/// Defender tint palette, cycled by spawn order
const DEFENDER_TINTS: [TintColor; 4] = [
    TintColor::rgb(0x2d, 0x7d, 0xd2),
    TintColor::rgb(0x1f, 0xb2, 0xa6),
    TintColor::rgb(0x7a, 0x5c, 0xd6),
    TintColor::rgb(0x3b, 0xc9, 0x5f),
];

/// Opponent tint palette, cycled by spawn order
const OPPONENT_TINTS: [TintColor; 4] = [
    TintColor::rgb(0xd2, 0x3b, 0x2d),
    TintColor::rgb(0xe0, 0x7a, 0x1f),
    TintColor::rgb(0xb2, 0x1f, 0x6e),
    TintColor::rgb(0x8f, 0x2d, 0x2d),
];

/// Blueprint for one roster slot: tint plus where it spawns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub tint: TintColor,
    pub spawn_pose: Pose,
}

/// Roster blueprint for one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSetup {
    pub defenders: Vec<UnitSpec>,
    pub opponents: Vec<UnitSpec>,
}

impl MatchSetup {
    /// Two opposing spawn lines: defenders along the south edge facing
    /// north, opponents mirrored on the north edge
    pub fn line_formation(config: &MatchConfig) -> Self {
        Self {
            defenders: spawn_line(config.defender_count, -20.0, 90.0, &DEFENDER_TINTS),
            opponents: spawn_line(config.opponent_count, 20.0, 270.0, &OPPONENT_TINTS),
        }
    }
}

fn spawn_line(count: u32, y: f32, heading: f32, tints: &[TintColor]) -> Vec<UnitSpec> {
    let spacing = 8.0;
    let origin_x = -(count.saturating_sub(1) as f32) * spacing / 2.0;
    (0..count)
        .map(|i| UnitSpec {
            tint: tints[i as usize % tints.len()],
            spawn_pose: Pose::new(Vec2::new(origin_x + i as f32 * spacing, y), heading),
        })
        .collect()
}

/// Per-unit record: identity, spawn transform, and the live entity ref
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitHandle {
    pub id: UnitId,
    pub faction: Faction,
    pub tint: TintColor,
    /// Reapplied on every round reset
    pub spawn_pose: Pose,
    /// 1-based, unique within the faction, immutable after spawn
    pub player_index: u32,
    /// Rounds this unit's controller has won
    pub wins: u32,
    /// Colored "PLAYER N" text, computed by configure
    pub label: String,
    /// Assigned once at match spawn, never replaced mid-match
    pub entity: EntityRef,
}

impl UnitHandle {
    pub fn new(faction: Faction, spec: &UnitSpec, player_index: u32, entity: EntityRef) -> Self {
        Self {
            id: UnitId::new(),
            faction,
            tint: spec.tint,
            spawn_pose: spec.spawn_pose,
            player_index,
            wins: 0,
            label: String::new(),
            entity,
        }
    }

    /// Derived liveness: whether the live instance is active in the sim
    pub fn is_alive(&self, arena: &SimArena) -> bool {
        arena.get(self.entity).active
    }
}
