//! Wizard-flow tests for the protocol module
//!
//! Simulates a coach recording a complete session slot by slot, exactly the
//! way the data-entry wizard drives the catalog and the strip rule.

use super::*;
use crate::models::{Category, SeriesResult, TestSession, TestType};
use crate::protocol::catalog::SeriesKind;
use chrono::NaiveDate;

/// Record every catalog slot in order, picking the first allowed strip for
/// each serve series.
fn record_full_session() -> TestSession {
    let mut session = TestSession::new(
        "p1",
        "Wizard Player",
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        Category::Prima,
        "Coach",
    );

    for test_type in TestType::ALL {
        for spec in catalog_for(test_type) {
            let series = match spec.kind {
                SeriesKind::Groundstrokes { direction } => SeriesResult::Groundstrokes {
                    series_index: spec.series_index,
                    score: 7,
                    direction,
                },
                SeriesKind::Combined { direction } => SeriesResult::Combined {
                    series_index: spec.series_index,
                    score: 6,
                    direction,
                },
                SeriesKind::Return { side } => {
                    SeriesResult::Return { series_index: spec.series_index, score: 5, side }
                }
                SeriesKind::Serve { serve_type, side } => {
                    let chosen = allowed_strips(&session.serve_strips())[0];
                    SeriesResult::Serve {
                        series_index: spec.series_index,
                        score: 8,
                        serve_type,
                        side,
                        target_strip: chosen,
                    }
                }
                SeriesKind::Volley { direction } => SeriesResult::Volley {
                    series_index: spec.series_index,
                    score: 9,
                    direction,
                },
            };
            session.series.push(series);
        }
    }
    session.completed = true;
    session
}

#[test]
fn recorded_session_covers_the_whole_protocol() {
    let session = record_full_session();
    assert_eq!(session.series.len(), TOTAL_SERIES);
    assert_eq!(
        session.series.iter().map(|s| usize::from(crate::protocol::catalog::SHOTS_PER_SERIES)).sum::<usize>(),
        TOTAL_SHOTS
    );
    validate_complete_session(&session).expect("wizard-recorded session is valid");
}

#[test]
fn greedy_strip_picking_never_violates_the_rotation() {
    let session = record_full_session();
    let strips = session.serve_strips();
    assert_eq!(strips.len(), 6);
    for i in 2..strips.len() {
        assert!(
            !(strips[i] == strips[i - 1] && strips[i - 1] == strips[i - 2]),
            "three identical strips in a row at serve {i}"
        );
    }
}

#[test]
fn dropping_one_series_fails_completeness_only() {
    let mut session = record_full_session();
    session.series.pop();
    assert!(validate_series(&session.series).is_ok(), "still structurally valid");
    assert_eq!(
        validate_complete_session(&session),
        Err(ProtocolError::IncompleteSession { expected: TOTAL_SERIES, found: TOTAL_SERIES - 1 })
    );
}

#[test]
fn every_catalog_slot_is_unique() {
    let mut seen = std::collections::HashSet::new();
    for test_type in TestType::ALL {
        for spec in catalog_for(test_type) {
            assert!(seen.insert((test_type, spec.series_index)), "duplicate slot in catalog");
        }
    }
    assert_eq!(seen.len(), TOTAL_SERIES);
}
