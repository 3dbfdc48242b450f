//! Unit lifecycle operations: configure, enable/disable control, reset
//!
//! Each handle manages exactly one live entity. All operations assume the
//! entity has been spawned; callers sequence spawn before any lifecycle
//! call, and a dangling ref is a programming error rather than a
//! recoverable condition.

use crate::arena::table::SimArena;
use crate::roster::handle::UnitHandle;

/// Reload times below this are clamped up to it; a zero or negative
/// reload would mean an always-ready weapon
pub const MIN_RELOAD_TIME: f32 = 1.0;

impl UnitHandle {
    /// Apply stat parameters to the entity's sub-components and paint it
    ///
    /// Propagates `player_index` to every controlled sub-component so
    /// identity stays consistent across them, computes the colored
    /// "PLAYER N" label, and tints every surface in place. Called once at
    /// spawn for defenders and once per round for opponents.
    pub fn configure(&mut self, arena: &mut SimArena, speed: f32, health: f32, reload_time: f32) {
        let entity = arena.get_mut(self.entity);

        entity.mobility.speed = speed;
        entity.mobility.player_number = self.player_index;

        entity.weapon.reload_time = if reload_time < MIN_RELOAD_TIME {
            MIN_RELOAD_TIME
        } else {
            reload_time
        };
        entity.weapon.player_number = self.player_index;

        entity.health.starting = health;
        entity.health.current = health;

        for surface in &mut entity.surfaces {
            surface.tint = self.tint;
        }

        self.label = format!(
            "<color=#{}>PLAYER {}</color>",
            self.tint.as_hex(),
            self.player_index
        );
    }

    /// Lock the unit out of the simulation: movement and weapon off,
    /// overlay hidden. Idempotent.
    pub fn disable_control(&self, arena: &mut SimArena) {
        let entity = arena.get_mut(self.entity);
        entity.mobility.enabled = false;
        entity.weapon.enabled = false;
        entity.overlay.visible = false;
    }

    /// Hand the unit back to its controller. Idempotent.
    pub fn enable_control(&self, arena: &mut SimArena) {
        let entity = arena.get_mut(self.entity);
        entity.mobility.enabled = true;
        entity.weapon.enabled = true;
        entity.overlay.visible = true;
    }

    /// Put the unit back into its default state for a new round
    ///
    /// Restores the exact spawn pose, then runs a deactivate/reactivate
    /// cycle so transient per-round state (current health, weapon
    /// cooldown) is cleared. Entity ownership is untouched.
    pub fn reset(&self, arena: &mut SimArena) {
        let entity = arena.get_mut(self.entity);
        entity.pose = self.spawn_pose;
        entity.deactivate();
        entity.activate();
    }
}
