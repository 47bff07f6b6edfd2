//! 2v2 comparison
//!
//! Team values are per-stroke means of the two teammates' averages, then the
//! same strictly-greater comparison as 1v1. A team is always built through
//! an explicit constructor: either two distinct sessions or a visible solo
//! fallback — there is no silent duplication of a missing teammate.

use crate::challenge::types::{compare_stroke_values, ChallengeOutcome};
use crate::challenge::ChallengeError;
use crate::stats::{mean, SessionResults, StrokeName};

/// One team of two session results.
#[derive(Debug, Clone, Copy)]
pub struct TeamPair<'a> {
    first: &'a SessionResults,
    second: &'a SessionResults,
}

impl<'a> TeamPair<'a> {
    pub fn new(first: &'a SessionResults, second: &'a SessionResults) -> Self {
        TeamPair { first, second }
    }

    /// Degraded one-player team: the same session counts twice, so the team
    /// averages equal the player's own. Callers opt into this explicitly.
    pub fn solo(only: &'a SessionResults) -> Self {
        TeamPair { first: only, second: only }
    }

    pub fn display_name(&self) -> String {
        if std::ptr::eq(self.first, self.second) {
            self.first.session.player_name.clone()
        } else {
            format!(
                "{} & {}",
                self.first.session.player_name, self.second.session.player_name
            )
        }
    }

    /// Per-stroke team value: mean of the two members' stroke averages.
    fn stroke_values(&self) -> Vec<(StrokeName, f64)> {
        self.first
            .stats
            .iter()
            .zip(&self.second.stats)
            .map(|(a, b)| (a.stroke, mean(&[a.ave, b.ave])))
            .collect()
    }

    /// Team percent-of-ideal: mean of the members' percents (display only).
    fn percent_of_ideal(&self) -> f64 {
        mean(&[self.first.percent_of_ideal, self.second.percent_of_ideal])
    }
}

/// Compare two teams stroke by stroke on team-averaged values.
pub fn team_head_to_head(team_a: &TeamPair<'_>, team_b: &TeamPair<'_>) -> ChallengeOutcome {
    let (rows, strokes_a, strokes_b, winner) =
        compare_stroke_values(&team_a.stroke_values(), &team_b.stroke_values());
    ChallengeOutcome {
        name_a: team_a.display_name(),
        name_b: team_b.display_name(),
        rows,
        strokes_a,
        strokes_b,
        winner,
        percent_a: team_a.percent_of_ideal(),
        percent_b: team_b.percent_of_ideal(),
    }
}

/// Convenience 2v2 entry point over a flat list: the first two results form
/// team A, the last two team B. Errors unless exactly four sessions are
/// supplied; use [`TeamPair::solo`] directly for a deliberate short-handed
/// comparison.
pub fn challenge_2v2(results: &[SessionResults]) -> Result<ChallengeOutcome, ChallengeError> {
    match results {
        [a1, a2, b1, b2] => {
            Ok(team_head_to_head(&TeamPair::new(a1, a2), &TeamPair::new(b1, b2)))
        }
        _ => Err(ChallengeError::TeamSessionCount { found: results.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::types::Winner;
    use crate::testutil::results_with_strokes;

    #[test]
    fn team_values_are_pairwise_stroke_means() {
        let a1 = results_with_strokes("Anna", [8, 8, 8, 8, 8, 8]);
        let a2 = results_with_strokes("Bruno", [4, 4, 4, 4, 4, 4]);
        let b1 = results_with_strokes("Carla", [5, 5, 5, 5, 5, 5]);
        let b2 = results_with_strokes("Dario", [5, 5, 5, 5, 5, 5]);

        let outcome = team_head_to_head(&TeamPair::new(&a1, &a2), &TeamPair::new(&b1, &b2));
        // Team A averages 6 on every stroke vs 5 for team B.
        for row in &outcome.rows {
            assert_eq!(row.side_a, 6.0);
            assert_eq!(row.side_b, 5.0);
        }
        assert_eq!(outcome.winner, Winner::SideA);
        assert_eq!(outcome.name_a, "Anna & Bruno");
    }

    #[test]
    fn convenience_entry_requires_exactly_four_sessions() {
        let r = results_with_strokes("Anna", [5, 5, 5, 5, 5, 5]);
        let three = vec![r.clone(), r.clone(), r.clone()];
        assert_eq!(
            challenge_2v2(&three).unwrap_err(),
            ChallengeError::TeamSessionCount { found: 3 }
        );
        let four = vec![r.clone(), r.clone(), r.clone(), r];
        assert!(challenge_2v2(&four).is_ok());
    }

    #[test]
    fn solo_pair_counts_the_player_twice() {
        let a = results_with_strokes("Anna", [8, 8, 8, 8, 8, 8]);
        let b1 = results_with_strokes("Carla", [5, 5, 5, 5, 5, 5]);
        let b2 = results_with_strokes("Dario", [9, 9, 9, 9, 9, 9]);

        let outcome = team_head_to_head(&TeamPair::solo(&a), &TeamPair::new(&b1, &b2));
        for row in &outcome.rows {
            assert_eq!(row.side_a, 8.0, "solo team average equals the player's own");
            assert_eq!(row.side_b, 7.0);
        }
        assert_eq!(outcome.name_a, "Anna");
    }
}
