//! # Challenge Module
//!
//! Head-to-head, team and round-robin comparisons plus leaderboards, all
//! built on precomputed [`SessionResults`](crate::stats::SessionResults) —
//! raw series are never touched again here.
//!
//! - `types` - stroke comparison rows, winners, the shared outcome shape
//! - `head_to_head` - 1v1 stroke-by-stroke comparison
//! - `team` - 2v2 on team-averaged stroke values
//! - `round_robin` - free-for-all pairings, points and standings
//! - `ranking` - per-category and overall ("generale") leaderboards

pub mod head_to_head;
pub mod ranking;
pub mod round_robin;
pub mod team;
pub mod types;

use thiserror::Error;

pub use head_to_head::head_to_head;
pub use ranking::{category_leaderboard, overall_leaderboard, LeaderboardEntry, OverallRow};
pub use round_robin::{round_robin, Matchup, RoundRobinOutcome, Standing};
pub use team::{challenge_2v2, team_head_to_head, TeamPair};
pub use types::{ChallengeOutcome, Medal, StrokeComparison, Winner};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    #[error("a 2v2 challenge needs exactly 4 sessions, got {found}")]
    TeamSessionCount { found: usize },

    #[error("a round-robin needs at least 2 sessions, got {found}")]
    NotEnoughEntrants { found: usize },
}
