//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::RawCalculationInput;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Engine self-check passed
/// - **503 Service Unavailable**: Engine returned an unexpected result
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "engine": { "status": "ok", "message": "1 year at 10%: 1000000 -> 1100000" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let engine_check = check_engine(&state);
    let healthy = engine_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            engine: engine_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Runs a known calculation through the full pipeline.
fn check_engine(state: &AppState) -> CheckStatus {
    let probe = RawCalculationInput {
        principal: "1000000",
        rate: "10",
        years: "1",
        ..Default::default()
    };

    match state.calculator.calculate(&probe) {
        Ok(calculation) if (calculation.result.final_amount.value() - 1_100_000.0).abs() < 1e-6 => {
            CheckStatus {
                status: "ok".to_string(),
                message: Some("1 year at 10%: 1000000 -> 1100000".to_string()),
            }
        }
        Ok(calculation) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!(
                "Unexpected final amount: {}",
                calculation.result.final_amount
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Engine error: {}", e)),
        },
    }
}
