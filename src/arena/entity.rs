//! Simulation entities and their controlled sub-components
//!
//! The round loop never drives movement or combat itself; it only flips
//! the enable flags, applies stats, and power-cycles entities on reset.
//! Whatever system actually moves and fires the units lives outside this
//! crate and reads these sub-components.

use serde::{Deserialize, Serialize};

use crate::core::types::{Pose, TintColor};

/// What kind of prefab an entity was spawned from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    DefenderTank,
    OpponentTank,
}

/// Movement sub-component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mobility {
    /// World units per tick
    pub speed: f32,
    /// 1-based controller identity, kept consistent across sub-components
    pub player_number: u32,
    pub enabled: bool,
}

/// Weapon sub-component; `reload_time` gates fire rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Ticks between shots
    pub reload_time: f32,
    /// Ticks until the weapon is ready again (0 = ready)
    pub cooldown: f32,
    pub player_number: u32,
    pub enabled: bool,
}

/// Health sub-component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthPool {
    pub starting: f32,
    pub current: f32,
}

impl HealthPool {
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

/// World-space status overlay (name plate, health bar)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOverlay {
    pub visible: bool,
}

/// One paintable surface of the entity's model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub tint: TintColor,
}

/// One live simulation entity
///
/// `active` doubles as the liveness flag: a destroyed unit is deactivated,
/// not removed, so entity refs stay valid for the whole match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimEntity {
    pub kind: EntityKind,
    pub pose: Pose,
    pub active: bool,
    pub mobility: Mobility,
    pub weapon: Weapon,
    pub health: HealthPool,
    pub overlay: StatusOverlay,
    pub surfaces: Vec<Surface>,
}

impl SimEntity {
    pub fn new(kind: EntityKind, pose: Pose) -> Self {
        let untinted = TintColor::rgb(0x80, 0x80, 0x80);
        Self {
            kind,
            pose,
            active: true,
            mobility: Mobility {
                speed: 0.0,
                player_number: 0,
                enabled: false,
            },
            weapon: Weapon {
                reload_time: 1.0,
                cooldown: 0.0,
                player_number: 0,
                enabled: false,
            },
            health: HealthPool {
                starting: 1.0,
                current: 1.0,
            },
            overlay: StatusOverlay { visible: false },
            // Hull, turret, tracks
            surfaces: vec![Surface { tint: untinted }; 3],
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Reactivation clears per-round transient state, mirroring a power
    /// cycle of the live object
    pub fn activate(&mut self) {
        self.active = true;
        self.health.current = self.health.starting;
        self.weapon.cooldown = 0.0;
    }

    /// Apply damage; a depleted entity is deactivated in place
    pub fn apply_damage(&mut self, amount: f32) {
        self.health.current -= amount;
        if self.health.is_depleted() {
            self.deactivate();
        }
    }

    /// Advance the weapon cooldown by one tick
    pub fn cool_weapon(&mut self) {
        self.weapon.cooldown = (self.weapon.cooldown - 1.0).max(0.0);
    }

    /// Fire if the weapon is enabled and off cooldown; returns whether a
    /// shot was taken
    pub fn try_fire(&mut self) -> bool {
        if !self.active || !self.weapon.enabled || self.weapon.cooldown > 0.0 {
            return false;
        }
        self.weapon.cooldown = self.weapon.reload_time;
        true
    }
}
