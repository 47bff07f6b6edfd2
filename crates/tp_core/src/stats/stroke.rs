//! Per-stroke aggregates
//!
//! Six canonical strokes in a fixed order that doubles as the radar axis
//! order. The comparison tables and the area formula both rely on this
//! order never changing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{GroundstrokeDirection, SeriesResult, StdDevMode, TestSession};
use crate::stats::formulas::{mean, std_dev};

/// Canonical strokes, in radar axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrokeName {
    Serve,
    Forehand,
    Combined,
    Return,
    Backhand,
    Volley,
}

impl StrokeName {
    /// Radar axis order: serve, forehand, combined, return, backhand, volley.
    pub const ALL: [StrokeName; 6] = [
        StrokeName::Serve,
        StrokeName::Forehand,
        StrokeName::Combined,
        StrokeName::Return,
        StrokeName::Backhand,
        StrokeName::Volley,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrokeName::Serve => "Servizio",
            StrokeName::Forehand => "Forehand",
            StrokeName::Combined => "Combined",
            StrokeName::Return => "Return",
            StrokeName::Backhand => "Backhand",
            StrokeName::Volley => "Volley",
        }
    }
}

impl fmt::Display for StrokeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregates for one stroke: the raw scores in series order plus their
/// mean and standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrokeStats {
    pub stroke: StrokeName,
    pub label: String,
    pub scores: Vec<u8>,
    pub ave: f64,
    pub dev: f64,
}

/// Scores for one stroke, sorted by series index.
///
/// Serve and combined match by test type alone; forehand and backhand are
/// the two direction halves of the groundstroke sub-test.
pub(crate) fn stroke_scores(series: &[SeriesResult], stroke: StrokeName) -> Vec<u8> {
    let mut selected: Vec<(u8, u8)> = series
        .iter()
        .filter_map(|s| {
            let keep = match (stroke, s) {
                (StrokeName::Serve, SeriesResult::Serve { .. }) => true,
                (StrokeName::Combined, SeriesResult::Combined { .. }) => true,
                (StrokeName::Return, SeriesResult::Return { .. }) => true,
                (StrokeName::Volley, SeriesResult::Volley { .. }) => true,
                (StrokeName::Forehand, SeriesResult::Groundstrokes { direction, .. }) => {
                    *direction == GroundstrokeDirection::FhCross
                }
                (StrokeName::Backhand, SeriesResult::Groundstrokes { direction, .. }) => {
                    *direction == GroundstrokeDirection::BhCross
                }
                _ => false,
            };
            keep.then(|| (s.series_index(), s.score()))
        })
        .collect();
    selected.sort_by_key(|(idx, _)| *idx);
    selected.into_iter().map(|(_, score)| score).collect()
}

/// Compute the six per-stroke aggregates for a session, in radar order.
pub fn compute_stroke_stats(session: &TestSession, mode: StdDevMode) -> Vec<StrokeStats> {
    StrokeName::ALL
        .iter()
        .map(|&stroke| {
            let scores = stroke_scores(&session.series, stroke);
            let as_f64: Vec<f64> = scores.iter().map(|&s| f64::from(s)).collect();
            StrokeStats {
                stroke,
                label: stroke.label().to_string(),
                ave: mean(&as_f64),
                dev: std_dev(&as_f64, mode),
                scores,
            }
        })
        .collect()
}
