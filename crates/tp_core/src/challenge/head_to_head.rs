//! 1v1 comparison

use crate::challenge::types::{compare_stroke_values, ChallengeOutcome};
use crate::stats::{SessionResults, StrokeName};

pub(crate) fn stroke_values(results: &SessionResults) -> Vec<(StrokeName, f64)> {
    results.stats.iter().map(|s| (s.stroke, s.ave)).collect()
}

/// Compare two sessions stroke by stroke.
///
/// Each of the six strokes goes to the side with the strictly greater
/// average; the overall winner is the side with more stroke wins. A 3–3
/// split (or six draws) is an overall draw.
pub fn head_to_head(a: &SessionResults, b: &SessionResults) -> ChallengeOutcome {
    let (rows, strokes_a, strokes_b, winner) =
        compare_stroke_values(&stroke_values(a), &stroke_values(b));
    ChallengeOutcome {
        name_a: a.session.player_name.clone(),
        name_b: b.session.player_name.clone(),
        rows,
        strokes_a,
        strokes_b,
        winner,
        percent_a: a.percent_of_ideal,
        percent_b: b.percent_of_ideal,
    }
}
