//! Roster records and per-unit lifecycle management

pub mod handle;
pub mod lifecycle;

pub use handle::{MatchSetup, UnitHandle, UnitSpec};
pub use lifecycle::MIN_RELOAD_TIME;
