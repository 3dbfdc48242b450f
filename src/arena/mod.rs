//! Simulation entity arena
//!
//! Replaces raw live object references with stable indices into an owned
//! entity table, so round resets can power-cycle units without any
//! dangling state.

pub mod entity;
pub mod table;

pub use entity::{EntityKind, HealthPool, Mobility, SimEntity, StatusOverlay, Surface, Weapon};
pub use table::{EntityRef, SimArena};
