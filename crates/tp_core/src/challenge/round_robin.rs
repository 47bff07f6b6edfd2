//! Round-robin (free-for-all)
//!
//! Every unique pairing is scored exactly like a 1v1 match. Standings award
//! 2 points for a win and 1 each for a draw, ordered by points and then by
//! the player's own percent-of-ideal.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::challenge::head_to_head::stroke_values;
use crate::challenge::types::{compare_stroke_values, Medal, Winner};
use crate::challenge::ChallengeError;
use crate::stats::SessionResults;

/// One pairing's result. `a` and `b` index into the entrant list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Matchup {
    pub a: usize,
    pub b: usize,
    pub strokes_a: u8,
    pub strokes_b: u8,
    pub winner: Winner,
}

/// Final table row for one entrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Standing {
    /// Index into the entrant list passed to [`round_robin`].
    pub entry: usize,
    pub player_id: String,
    pub player_name: String,
    pub points: u8,
    pub wins: u8,
    pub draws: u8,
    pub losses: u8,
    pub percent_of_ideal: f64,
    /// Medal for the podium ranks, `None` from fourth place on.
    pub medal: Option<Medal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoundRobinOutcome {
    pub matchups: Vec<Matchup>,
    /// Ordered best first.
    pub standings: Vec<Standing>,
}

/// Run all C(n,2) pairings and build the standings.
pub fn round_robin(entries: &[SessionResults]) -> Result<RoundRobinOutcome, ChallengeError> {
    if entries.len() < 2 {
        return Err(ChallengeError::NotEnoughEntrants { found: entries.len() });
    }

    let values: Vec<_> = entries.iter().map(stroke_values).collect();
    let mut matchups = Vec::with_capacity(entries.len() * (entries.len() - 1) / 2);
    let mut points = vec![0u8; entries.len()];
    let mut wins = vec![0u8; entries.len()];
    let mut draws = vec![0u8; entries.len()];
    let mut losses = vec![0u8; entries.len()];

    for a in 0..entries.len() {
        for b in (a + 1)..entries.len() {
            let (_, strokes_a, strokes_b, winner) = compare_stroke_values(&values[a], &values[b]);
            match winner {
                Winner::SideA => {
                    points[a] += 2;
                    wins[a] += 1;
                    losses[b] += 1;
                }
                Winner::SideB => {
                    points[b] += 2;
                    wins[b] += 1;
                    losses[a] += 1;
                }
                Winner::Draw => {
                    points[a] += 1;
                    points[b] += 1;
                    draws[a] += 1;
                    draws[b] += 1;
                }
            }
            matchups.push(Matchup { a, b, strokes_a, strokes_b, winner });
        }
    }

    let mut standings: Vec<Standing> = entries
        .iter()
        .enumerate()
        .map(|(i, r)| Standing {
            entry: i,
            player_id: r.session.player_id.clone(),
            player_name: r.session.player_name.clone(),
            points: points[i],
            wins: wins[i],
            draws: draws[i],
            losses: losses[i],
            percent_of_ideal: r.percent_of_ideal,
            medal: None,
        })
        .collect();

    // Points first, percent-of-ideal as the tie-breaker.
    standings.sort_by(|x, y| {
        y.points.cmp(&x.points).then(
            y.percent_of_ideal
                .partial_cmp(&x.percent_of_ideal)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
    for (rank, standing) in standings.iter_mut().enumerate() {
        standing.medal = Medal::for_rank(rank);
    }

    Ok(RoundRobinOutcome { matchups, standings })
}
