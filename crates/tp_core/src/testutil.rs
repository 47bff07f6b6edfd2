//! Shared builders for unit tests.

use chrono::NaiveDate;

use crate::models::{Category, SeriesResult, TestSession, TestType};
use crate::protocol::catalog::{catalog_for, SeriesKind};
use crate::protocol::strip::STRIPS;
use crate::stats::{compute_session_results, SessionResults};

/// Full 56-series session with constant per-stroke scores, given in radar
/// order `[serve, forehand, combined, return, backhand, volley]`. The serve
/// strips rotate legally (T, T, body, body, wide, wide).
pub fn session_with_strokes(player_name: &str, scores: [u8; 6]) -> TestSession {
    let [serve, forehand, combined, return_, backhand, volley] = scores;
    let mut session = TestSession::new(
        format!("player-{}", player_name.to_lowercase().replace(' ', "-")),
        player_name,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        Category::Seconda,
        "Coach",
    );
    session.completed = true;

    for test_type in TestType::ALL {
        for spec in catalog_for(test_type) {
            let series = match spec.kind {
                SeriesKind::Groundstrokes { direction } => SeriesResult::Groundstrokes {
                    series_index: spec.series_index,
                    score: match direction {
                        crate::models::GroundstrokeDirection::FhCross => forehand,
                        crate::models::GroundstrokeDirection::BhCross => backhand,
                    },
                    direction,
                },
                SeriesKind::Combined { direction } => SeriesResult::Combined {
                    series_index: spec.series_index,
                    score: combined,
                    direction,
                },
                SeriesKind::Return { side } => {
                    SeriesResult::Return { series_index: spec.series_index, score: return_, side }
                }
                SeriesKind::Serve { serve_type, side } => SeriesResult::Serve {
                    series_index: spec.series_index,
                    score: serve,
                    serve_type,
                    side,
                    target_strip: STRIPS[spec.series_index as usize / 2],
                },
                SeriesKind::Volley { direction } => SeriesResult::Volley {
                    series_index: spec.series_index,
                    score: volley,
                    direction,
                },
            };
            session.series.push(series);
        }
    }
    session
}

/// Aggregated results for a constant-score session, default settings.
pub fn results_with_strokes(player_name: &str, scores: [u8; 6]) -> SessionResults {
    let session = session_with_strokes(player_name, scores);
    compute_session_results(&session, Default::default(), Default::default())
}
