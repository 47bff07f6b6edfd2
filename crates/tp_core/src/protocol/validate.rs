//! Structural validation of recorded series
//!
//! Aggregation itself never fails (missing data degrades to zeros), so
//! structural problems have to be caught before a session is stored or
//! handed to a UI. These checks compare recorded series against the catalog:
//! score range, index bounds, duplicates, alternation-rule conformance and
//! the serve-strip rotation.

use thiserror::Error;

use crate::models::{SeriesResult, TargetStrip, TestSession, TestType};
use crate::protocol::catalog::{catalog_for, SHOTS_PER_SERIES, TOTAL_SERIES};
use crate::protocol::strip::is_strip_allowed;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("{test_type:?} series {series_index}: score {score} exceeds {max} shots")]
    ScoreOutOfRange { test_type: TestType, series_index: u8, score: u8, max: u8 },

    #[error("{test_type:?} series index {series_index} out of range (catalog has {count})")]
    SeriesIndexOutOfRange { test_type: TestType, series_index: u8, count: usize },

    #[error("duplicate series: {test_type:?} index {series_index}")]
    DuplicateSeries { test_type: TestType, series_index: u8 },

    #[error("{test_type:?} series {series_index} does not match the catalog slot \"{expected}\"")]
    VariantMismatch { test_type: TestType, series_index: u8, expected: String },

    #[error("serve series {series_index}: strip {strip} is the third identical choice in a row")]
    StripRotationViolation { series_index: u8, strip: TargetStrip },

    #[error("incomplete session: {found} of {expected} series recorded")]
    IncompleteSession { expected: usize, found: usize },
}

/// Validate a batch of recorded series against the catalog.
///
/// Accepts partial sessions: every recorded series must be well-formed, but
/// nothing has to be complete. Use [`validate_complete_session`] to also
/// require all 56 slots.
pub fn validate_series(series: &[SeriesResult]) -> Result<(), ProtocolError> {
    let mut seen: Vec<(TestType, u8)> = Vec::with_capacity(series.len());

    for result in series {
        let test_type = result.test_type();
        let series_index = result.series_index();
        let catalog = catalog_for(test_type);

        if result.score() > SHOTS_PER_SERIES {
            return Err(ProtocolError::ScoreOutOfRange {
                test_type,
                series_index,
                score: result.score(),
                max: SHOTS_PER_SERIES,
            });
        }
        let spec = catalog.get(series_index as usize).ok_or(
            ProtocolError::SeriesIndexOutOfRange { test_type, series_index, count: catalog.len() },
        )?;
        if !spec.matches(result) {
            return Err(ProtocolError::VariantMismatch {
                test_type,
                series_index,
                expected: spec.label.clone(),
            });
        }
        if seen.contains(&(test_type, series_index)) {
            return Err(ProtocolError::DuplicateSeries { test_type, series_index });
        }
        seen.push((test_type, series_index));
    }

    validate_strip_rotation(series)
}

/// Validate series and additionally require every catalog slot to be filled.
pub fn validate_complete_session(session: &TestSession) -> Result<(), ProtocolError> {
    validate_series(&session.series)?;
    if session.series.len() != TOTAL_SERIES {
        return Err(ProtocolError::IncompleteSession {
            expected: TOTAL_SERIES,
            found: session.series.len(),
        });
    }
    Ok(())
}

fn validate_strip_rotation(series: &[SeriesResult]) -> Result<(), ProtocolError> {
    let mut serves: Vec<(u8, TargetStrip)> = series
        .iter()
        .filter_map(|s| match s {
            SeriesResult::Serve { series_index, target_strip, .. } => {
                Some((*series_index, *target_strip))
            }
            _ => None,
        })
        .collect();
    serves.sort_by_key(|(idx, _)| *idx);

    let mut history: Vec<TargetStrip> = Vec::with_capacity(serves.len());
    for (series_index, strip) in serves {
        if !is_strip_allowed(&history, strip) {
            return Err(ProtocolError::StripRotationViolation { series_index, strip });
        }
        history.push(strip);
    }
    Ok(())
}
