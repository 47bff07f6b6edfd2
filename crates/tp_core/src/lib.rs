//! # tp_core - Tennis Precision Test Scoring Engine
//!
//! This library turns recorded tennis-precision test sessions (56 scored
//! series across five sub-tests) into aggregate statistics, radar-chart
//! metrics and comparative rankings, with a JSON API for easy integration
//! with UI shells.
//!
//! ## Features
//! - Fixed protocol catalog with alternation rules and the serve-strip
//!   rotation constraint
//! - Pure statistics: mean, standard deviation, radar polygon area,
//!   percent-of-ideal, precision-over-time
//! - 1v1 / 2v2 / round-robin challenges and category leaderboards
//! - CSV export and a file-backed session store

pub mod api;
pub mod challenge;
pub mod export;
pub mod models;
pub mod protocol;
pub mod stats;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export the aggregation entry points
pub use stats::{
    compute_precision_time, compute_session_results, compute_stroke_stats, mean, percent_of_ideal,
    percent_to_stars, radar_area, std_dev, PrecisionTimePoint, SessionResults, StrokeName,
    StrokeStats, IDEAL_AREA,
};

// Re-export the model types sessions are built from
pub use models::{
    Category, Player, PlayerProfile, PrecisionTimeStrategy, SeriesResult, Settings, StdDevMode,
    TargetStrip, TestSession, TestType,
};

// Re-export protocol surface
pub use protocol::{
    catalog_for, is_strip_allowed, validate_complete_session, validate_series, ProtocolError,
    SeriesSpec, TOTAL_SERIES,
};

// Re-export comparison engine
pub use challenge::{
    category_leaderboard, challenge_2v2, head_to_head, overall_leaderboard, round_robin,
    team_head_to_head, ChallengeError, ChallengeOutcome, Medal, RoundRobinOutcome, Standing,
    TeamPair, Winner,
};

// Re-export store and export surfaces
pub use export::{history_csv, session_csv, ExportError};
pub use store::{AppState, SessionStore, StoreError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_end_to_end_session_scoring() {
        let session = testutil::session_with_strokes("Smoke Test", [8, 7, 5, 4, 6, 9]);
        let request = json!({
            "schema_version": 1,
            "session": serde_json::to_value(&session).unwrap(),
            "validate": true,
        });

        let result = api::session_results_json(&request.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["success"], true);
        let results = &parsed["data"]["results"];
        assert_eq!(results["radar_values"], json!([8.0, 7.0, 5.0, 4.0, 6.0, 9.0]));
        let pct = results["percent_of_ideal"].as_f64().unwrap();
        assert!(pct > 0.0 && pct < 100.0);
    }

    #[test]
    fn test_determinism() {
        let session = testutil::session_with_strokes("Det Test", [7, 7, 7, 7, 7, 7]);
        let request = json!({
            "schema_version": 1,
            "session": serde_json::to_value(&session).unwrap(),
        })
        .to_string();

        let result1 = api::session_results_json(&request);
        let result2 = api::session_results_json(&request);
        assert_eq!(result1, result2, "same session should produce same result");
    }
}
