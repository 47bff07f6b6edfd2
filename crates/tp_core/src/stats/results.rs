//! Per-session aggregation
//!
//! `compute_session_results` is cheap and is called on every read; results
//! are never persisted and never shared, so callers may mutate their copy
//! freely without affecting anyone else.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{PrecisionTimeStrategy, StdDevMode, TestSession};
use crate::stats::formulas::{percent_of_ideal, radar_area};
use crate::stats::precision_time::{compute_precision_time, PrecisionTimePoint};
use crate::stats::stroke::{compute_stroke_stats, StrokeStats};

/// Everything derived from one session: the six stroke aggregates, the
/// radar values/area, the percent-of-ideal score and the precision-time
/// series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SessionResults {
    pub session: TestSession,
    pub stats: Vec<StrokeStats>,
    pub radar_values: Vec<f64>,
    pub radar_area: f64,
    pub percent_of_ideal: f64,
    pub precision_time: Vec<PrecisionTimePoint>,
}

/// Derive the full result set for a session.
///
/// Both configuration flags are explicit parameters; there is no ambient
/// settings state anywhere in the engine.
pub fn compute_session_results(
    session: &TestSession,
    mode: StdDevMode,
    strategy: PrecisionTimeStrategy,
) -> SessionResults {
    let stats = compute_stroke_stats(session, mode);
    let radar_values: Vec<f64> = stats.iter().map(|s| s.ave).collect();
    let area = radar_area(&radar_values);
    let percent = percent_of_ideal(&radar_values);
    log::debug!(
        "session {} aggregated: area {:.3}, {:.1}% of ideal",
        session.id,
        area,
        percent
    );
    SessionResults {
        session: session.clone(),
        stats,
        radar_area: area,
        percent_of_ideal: percent,
        precision_time: compute_precision_time(session, strategy),
        radar_values,
    }
}
