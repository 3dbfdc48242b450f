//! Iron Arena - round-based arena combat match orchestrator
//!
//! Spawns a fixed roster of defender and opponent units, then drives a
//! repeating Starting -> Playing -> Ending round cycle: rounds are won by
//! eliminating the other faction, points accumulate per round, and a
//! defender wipe restarts the whole match. Unit behavior, rendering, and
//! input are external collaborators; this crate owns only the
//! orchestration.

pub mod arena;
pub mod core;
pub mod presentation;
pub mod roster;
pub mod round;
