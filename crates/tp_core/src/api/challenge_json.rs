//! Challenges and rankings over JSON

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::{check_schema_version, codes, ApiError, ApiResponse};
use crate::challenge::{
    category_leaderboard, challenge_2v2, head_to_head, overall_leaderboard, round_robin,
    ChallengeOutcome, LeaderboardEntry, OverallRow, RoundRobinOutcome,
};
use crate::models::{Category, Settings, TestSession};
use crate::stats::{compute_session_results, SessionResults};

/// Shared request shape for all comparison endpoints.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChallengeRequest {
    pub schema_version: u8,
    pub sessions: Vec<TestSession>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ChallengeResponse {
    pub schema_version: u8,
    pub outcome: ChallengeOutcome,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct RoundRobinResponse {
    pub schema_version: u8,
    pub outcome: RoundRobinOutcome,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LeaderboardRequest {
    pub schema_version: u8,
    pub sessions: Vec<TestSession>,
    #[serde(default)]
    pub settings: Settings,
    /// When set, the per-category board is returned for this category only.
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct LeaderboardResponse {
    pub schema_version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_board: Option<Vec<LeaderboardEntry>>,
    pub overall: Vec<OverallRow>,
}

fn parse_challenge(request_json: &str) -> Result<Vec<SessionResults>, ApiError> {
    let request: ChallengeRequest = serde_json::from_str(request_json).map_err(|e| {
        error!("failed to parse ChallengeRequest: {e}");
        ApiError::new(codes::INVALID_JSON, format!("invalid JSON: {e}"))
    })?;
    check_schema_version(request.schema_version)?;
    let results = request
        .sessions
        .iter()
        .map(|s| {
            compute_session_results(
                s,
                request.settings.std_dev_mode,
                request.settings.precision_time_strategy,
            )
        })
        .collect();
    Ok(results)
}

/// 1v1 comparison of exactly two sessions.
pub fn head_to_head_json(request_json: &str) -> String {
    info!("processing 1v1 challenge request");
    let results = match parse_challenge(request_json) {
        Ok(parsed) => parsed,
        Err(e) => return ApiResponse::<ChallengeResponse>::error(e).to_json(),
    };
    match results.as_slice() {
        [a, b] => {
            let outcome = head_to_head(a, b);
            ApiResponse::success(ChallengeResponse {
                schema_version: crate::SCHEMA_VERSION,
                outcome,
            })
            .to_json()
        }
        other => ApiResponse::<ChallengeResponse>::error(ApiError::new(
            codes::CHALLENGE_INVALID,
            format!("a 1v1 challenge needs exactly 2 sessions, got {}", other.len()),
        ))
        .to_json(),
    }
}

/// 2v2 comparison: first two sessions form team A, last two team B.
pub fn team_challenge_json(request_json: &str) -> String {
    info!("processing 2v2 challenge request");
    let results = match parse_challenge(request_json) {
        Ok(parsed) => parsed,
        Err(e) => return ApiResponse::<ChallengeResponse>::error(e).to_json(),
    };
    match challenge_2v2(&results) {
        Ok(outcome) => ApiResponse::success(ChallengeResponse {
            schema_version: crate::SCHEMA_VERSION,
            outcome,
        })
        .to_json(),
        Err(e) => {
            ApiResponse::<ChallengeResponse>::error(ApiError::new(
                codes::CHALLENGE_INVALID,
                e.to_string(),
            ))
            .to_json()
        }
    }
}

/// Free-for-all round-robin over all supplied sessions.
pub fn round_robin_json(request_json: &str) -> String {
    info!("processing round-robin request");
    let results = match parse_challenge(request_json) {
        Ok(parsed) => parsed,
        Err(e) => return ApiResponse::<RoundRobinResponse>::error(e).to_json(),
    };
    match round_robin(&results) {
        Ok(outcome) => ApiResponse::success(RoundRobinResponse {
            schema_version: crate::SCHEMA_VERSION,
            outcome,
        })
        .to_json(),
        Err(e) => ApiResponse::<RoundRobinResponse>::error(ApiError::new(
            codes::CHALLENGE_INVALID,
            e.to_string(),
        ))
        .to_json(),
    }
}

/// Category and overall leaderboards in one call.
pub fn leaderboard_json(request_json: &str) -> String {
    info!("processing leaderboard request");
    let request: LeaderboardRequest = match serde_json::from_str(request_json) {
        Ok(r) => r,
        Err(e) => {
            error!("failed to parse LeaderboardRequest: {e}");
            return ApiResponse::<LeaderboardResponse>::error(ApiError::new(
                codes::INVALID_JSON,
                format!("invalid JSON: {e}"),
            ))
            .to_json();
        }
    };
    if let Err(e) = check_schema_version(request.schema_version) {
        return ApiResponse::<LeaderboardResponse>::error(e).to_json();
    }

    let results: Vec<SessionResults> = request
        .sessions
        .iter()
        .map(|s| {
            compute_session_results(
                s,
                request.settings.std_dev_mode,
                request.settings.precision_time_strategy,
            )
        })
        .collect();

    let category_board = request.category.map(|cat| category_leaderboard(&results, cat));
    let overall = overall_leaderboard(&results);
    ApiResponse::success(LeaderboardResponse {
        schema_version: crate::SCHEMA_VERSION,
        category_board,
        overall,
    })
    .to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::session_with_strokes;
    use serde_json::json;

    fn challenge_request(sessions: &[TestSession]) -> String {
        json!({
            "schema_version": 1,
            "sessions": serde_json::to_value(sessions).unwrap(),
        })
        .to_string()
    }

    #[test]
    fn one_v_one_reports_stroke_wins() {
        let sessions =
            [session_with_strokes("Anna", [8; 6]), session_with_strokes("Bruno", [5; 6])];
        let out = head_to_head_json(&challenge_request(&sessions));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["data"]["outcome"]["strokes_a"], 6);
        assert_eq!(v["data"]["outcome"]["winner"], "side_a");
    }

    #[test]
    fn one_v_one_with_three_sessions_is_invalid() {
        let sessions = [
            session_with_strokes("Anna", [8; 6]),
            session_with_strokes("Bruno", [5; 6]),
            session_with_strokes("Carla", [6; 6]),
        ];
        let out = head_to_head_json(&challenge_request(&sessions));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["error"]["code"], "CHALLENGE_INVALID");
    }

    #[test]
    fn team_challenge_needs_four_sessions() {
        let sessions = [
            session_with_strokes("Anna", [8; 6]),
            session_with_strokes("Bruno", [5; 6]),
            session_with_strokes("Carla", [6; 6]),
        ];
        let out = team_challenge_json(&challenge_request(&sessions));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["error"]["code"], "CHALLENGE_INVALID");
    }

    #[test]
    fn round_robin_returns_standings_with_medals() {
        let sessions = [
            session_with_strokes("Anna", [8; 6]),
            session_with_strokes("Bruno", [6; 6]),
            session_with_strokes("Carla", [4; 6]),
        ];
        let out = round_robin_json(&challenge_request(&sessions));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["success"], true);
        let standings = v["data"]["outcome"]["standings"].as_array().unwrap();
        assert_eq!(standings.len(), 3);
        assert_eq!(standings[0]["player_name"], "Anna");
        assert_eq!(standings[0]["medal"], "gold");
    }

    #[test]
    fn leaderboard_includes_overall_and_optional_category() {
        let mut s1 = session_with_strokes("Anna", [8; 6]);
        s1.category = Category::Prima;
        let s2 = session_with_strokes("Bruno", [6; 6]);
        let request = json!({
            "schema_version": 1,
            "sessions": [s1, s2],
            "category": "prima",
        })
        .to_string();
        let out = leaderboard_json(&request);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["data"]["category_board"].as_array().unwrap().len(), 1);
        assert_eq!(v["data"]["overall"].as_array().unwrap().len(), 2);
    }
}
