//! Entity table - stable-index storage for live simulation entities
//!
//! Spawning appends and never removes, so an `EntityRef` stays valid for
//! the lifetime of the arena. Destroyed units flip to inactive in place;
//! tearing the whole arena down is the only way to reclaim slots, which
//! happens on a full match restart.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::arena::entity::{EntityKind, SimEntity};
use crate::core::types::{Pose, UnitId};

/// Stable index of a spawned entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef(pub u32);

/// Owns every spawned entity for one match
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SimArena {
    entities: Vec<SimEntity>,
    registry: AHashMap<UnitId, EntityRef>,
}

impl SimArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate an entity of the given kind at `pose`
    ///
    /// This is the spawn provider for the match director; it is called
    /// once per roster unit at match start.
    pub fn spawn(&mut self, unit_id: UnitId, kind: EntityKind, pose: Pose) -> EntityRef {
        let entity_ref = EntityRef(self.entities.len() as u32);
        self.entities.push(SimEntity::new(kind, pose));
        self.registry.insert(unit_id, entity_ref);
        entity_ref
    }

    /// Look up a unit's entity ref by id
    pub fn lookup(&self, unit_id: UnitId) -> Option<EntityRef> {
        self.registry.get(&unit_id).copied()
    }

    /// Borrow an entity. A dangling ref is a programming error: refs are
    /// only minted by `spawn` and nothing is ever removed, so the index
    /// is valid by construction.
    pub fn get(&self, entity_ref: EntityRef) -> &SimEntity {
        &self.entities[entity_ref.0 as usize]
    }

    pub fn get_mut(&mut self, entity_ref: EntityRef) -> &mut SimEntity {
        &mut self.entities[entity_ref.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityRef, &SimEntity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityRef(i as u32), e))
    }
}
