//! Round win-condition evaluation

use serde::{Deserialize, Serialize};

use crate::arena::table::SimArena;
use crate::roster::handle::UnitHandle;

/// Outcome of one win-condition check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundVerdict {
    /// The player-side faction has no survivors; the match is over
    DefendersEliminated,
    /// The computer-side faction has no survivors; defenders won the round
    OpponentsEliminated,
    /// Both factions still have at least one survivor
    RoundContinues,
}

impl RoundVerdict {
    pub fn is_round_over(&self) -> bool {
        !matches!(self, RoundVerdict::RoundContinues)
    }
}

/// Count survivors in each faction and report elimination
///
/// A simultaneous wipe resolves to `DefendersEliminated`: the check order
/// is a fixed policy, kept deterministic so same-tick double kills always
/// end the match the same way.
pub fn evaluate_round(
    defenders: &[UnitHandle],
    opponents: &[UnitHandle],
    arena: &SimArena,
) -> RoundVerdict {
    let defenders_left = defenders.iter().filter(|u| u.is_alive(arena)).count();
    let opponents_left = opponents.iter().filter(|u| u.is_alive(arena)).count();

    if defenders_left == 0 {
        return RoundVerdict::DefendersEliminated;
    }
    if opponents_left == 0 {
        return RoundVerdict::OpponentsEliminated;
    }
    RoundVerdict::RoundContinues
}
