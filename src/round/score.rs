//! Cumulative match scoring

use serde::{Deserialize, Serialize};

/// Points multiplier per completed round
pub const POINTS_PER_ROUND: u32 = 1000;

/// Running point total for one match
///
/// Lives as long as the match: persists across rounds, discarded with the
/// director on a full restart. Awarding is the only mutation, so the
/// total never decreases.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    total_points: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    /// Score the round that just ended and return the points added
    ///
    /// A defender win for round N is worth `(N - 1) * 1000`; a loss adds
    /// nothing (the cumulative total is still reported in the end
    /// message).
    pub fn award_for_round_end(&mut self, round_number: u32, defenders_won: bool) -> u32 {
        if !defenders_won {
            return 0;
        }
        let points = round_number.saturating_sub(1) * POINTS_PER_ROUND;
        self.total_points += points;
        points
    }
}
