//! Session results over JSON

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::{check_schema_version, codes, ApiError, ApiResponse};
use crate::export::session_csv;
use crate::models::{Settings, TestSession};
use crate::protocol::validate_series;
use crate::stats::{compute_session_results, SessionResults};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SessionResultsRequest {
    pub schema_version: u8,
    pub session: TestSession,
    #[serde(default)]
    pub settings: Settings,
    /// Reject structurally invalid series instead of aggregating them.
    #[serde(default)]
    pub validate: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SessionResultsResponse {
    pub schema_version: u8,
    pub results: SessionResults,
}

fn parse_request(request_json: &str) -> Result<SessionResultsRequest, ApiError> {
    let request: SessionResultsRequest = serde_json::from_str(request_json).map_err(|e| {
        error!("failed to parse SessionResultsRequest: {e}");
        ApiError::new(codes::INVALID_JSON, format!("invalid JSON: {e}"))
    })?;
    check_schema_version(request.schema_version)?;
    if request.validate {
        validate_series(&request.session.series)
            .map_err(|e| ApiError::new(codes::PROTOCOL_VIOLATION, e.to_string()))?;
    }
    Ok(request)
}

/// Aggregate one session and return the full result set.
///
/// # Arguments
/// * `request_json` - JSON string containing a [`SessionResultsRequest`]
///
/// # Returns
/// JSON string containing `ApiResponse<SessionResultsResponse>`
pub fn session_results_json(request_json: &str) -> String {
    info!("processing session results request");
    let request = match parse_request(request_json) {
        Ok(r) => r,
        Err(e) => return ApiResponse::<SessionResultsResponse>::error(e).to_json(),
    };

    let results = compute_session_results(
        &request.session,
        request.settings.std_dev_mode,
        request.settings.precision_time_strategy,
    );
    info!(
        "session {} scored {:.1}% of ideal",
        results.session.id, results.percent_of_ideal
    );
    ApiResponse::success(SessionResultsResponse {
        schema_version: crate::SCHEMA_VERSION,
        results,
    })
    .to_json()
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SessionCsvResponse {
    pub schema_version: u8,
    pub csv: String,
}

/// Aggregate one session and render the single-session CSV sheet.
pub fn session_csv_json(request_json: &str) -> String {
    info!("processing session CSV request");
    let request = match parse_request(request_json) {
        Ok(r) => r,
        Err(e) => return ApiResponse::<SessionCsvResponse>::error(e).to_json(),
    };

    let results = compute_session_results(
        &request.session,
        request.settings.std_dev_mode,
        request.settings.precision_time_strategy,
    );
    match session_csv(&results) {
        Ok(csv) => {
            ApiResponse::success(SessionCsvResponse { schema_version: crate::SCHEMA_VERSION, csv })
                .to_json()
        }
        Err(e) => {
            error!("CSV export failed: {e}");
            ApiResponse::<SessionCsvResponse>::error(ApiError::new(
                codes::EXPORT_FAILED,
                e.to_string(),
            ))
            .to_json()
        }
    }
}
