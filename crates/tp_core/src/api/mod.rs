//! # API Module
//!
//! String-in/string-out JSON entry points for embedding the engine in a UI
//! shell. Every request carries a `schema_version`; every response is an
//! [`ApiResponse`] envelope that either holds data or a coded error, so a
//! caller never has to handle a panic or a bare serde failure.

pub mod challenge_json;
pub mod session_json;

use schemars::JsonSchema;
use serde::Serialize;

pub use challenge_json::{
    head_to_head_json, leaderboard_json, round_robin_json, team_challenge_json,
    ChallengeRequest, LeaderboardRequest,
};
pub use session_json::{
    session_csv_json, session_results_json, SessionResultsRequest, SessionResultsResponse,
};

/// Coded API error, stable across refactors so UI shells can match on it.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        ApiError { code: code.to_string(), message: message.into() }
    }
}

/// Response envelope: `data` on success, `error` otherwise.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse { success: true, data: Some(data), error: None }
    }

    pub fn error(error: ApiError) -> Self {
        ApiResponse { success: false, data: None, error: Some(error) }
    }

    /// Serialize the envelope; an envelope that cannot serialize degrades to
    /// an empty object rather than panicking.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub(crate) mod codes {
    pub const INVALID_JSON: &str = "INVALID_JSON";
    pub const SCHEMA_VERSION_MISMATCH: &str = "SCHEMA_VERSION_MISMATCH";
    pub const PROTOCOL_VIOLATION: &str = "PROTOCOL_VIOLATION";
    pub const CHALLENGE_INVALID: &str = "CHALLENGE_INVALID";
    pub const EXPORT_FAILED: &str = "EXPORT_FAILED";
}

/// Shared schema-version guard.
pub(crate) fn check_schema_version(found: u8) -> Result<(), ApiError> {
    if found == crate::SCHEMA_VERSION {
        Ok(())
    } else {
        Err(ApiError::new(
            codes::SCHEMA_VERSION_MISMATCH,
            format!("expected schema_version {}, got {found}", crate::SCHEMA_VERSION),
        ))
    }
}
