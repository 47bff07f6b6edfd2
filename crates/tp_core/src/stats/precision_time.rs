//! Precision-over-time series
//!
//! Up to 10 synthetic points pairing the i-th forehand, backhand and
//! combined series of a session. Missing values contribute 0 rather than
//! dropping the point.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{PrecisionTimeStrategy, TestSession};
use crate::stats::formulas::mean;
use crate::stats::stroke::{stroke_scores, StrokeName};

/// One synthetic time point. `index` is 1-based for chart axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrecisionTimePoint {
    pub index: u8,
    pub fh: f64,
    pub bh: f64,
    pub combined: f64,
    pub mean: f64,
}

/// Build the precision-time series for a session.
///
/// `len = min(fh_count, bh_count, combined_count, 10)`.
///
/// Strategy A takes the i-th series of each stroke directly. Strategy B,
/// for points with `i < floor(fh_count / 2)`, averages the consecutive
/// FH pair `[2i, 2i+1]` (same for BH) and falls back to A's direct
/// indexing past that range. Either way each point's `mean` is the mean of
/// its three values.
pub fn compute_precision_time(
    session: &TestSession,
    strategy: PrecisionTimeStrategy,
) -> Vec<PrecisionTimePoint> {
    let fh = stroke_scores(&session.series, StrokeName::Forehand);
    let bh = stroke_scores(&session.series, StrokeName::Backhand);
    let combined = stroke_scores(&session.series, StrokeName::Combined);

    let len = fh.len().min(bh.len()).min(combined.len()).min(10);
    let score_at = |scores: &[u8], i: usize| scores.get(i).map_or(0.0, |&s| f64::from(s));

    let mut points = Vec::with_capacity(len);
    for i in 0..len {
        let paired = strategy == PrecisionTimeStrategy::B && i < fh.len() / 2;
        let (fh_val, bh_val) = if paired {
            (
                mean(&[score_at(&fh, 2 * i), score_at(&fh, 2 * i + 1)]),
                mean(&[score_at(&bh, 2 * i), score_at(&bh, 2 * i + 1)]),
            )
        } else {
            (score_at(&fh, i), score_at(&bh, i))
        };
        let combined_val = score_at(&combined, i);
        points.push(PrecisionTimePoint {
            index: (i + 1) as u8,
            fh: fh_val,
            bh: bh_val,
            combined: combined_val,
            mean: mean(&[fh_val, bh_val, combined_val]),
        });
    }
    points
}
