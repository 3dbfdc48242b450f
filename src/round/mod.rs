//! Round sequencing: win evaluation, scoring, and the match director

pub mod director;
pub mod score;
pub mod verdict;

pub use director::{MatchDirector, RoundPhase, TickOutcome};
pub use score::{ScoreBoard, POINTS_PER_ROUND};
pub use verdict::{evaluate_round, RoundVerdict};
