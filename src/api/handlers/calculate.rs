//! Handler for the calculation endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::calculate::{CalculateRequest, CalculateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Computes compound interest for raw form values.
///
/// # Endpoint
///
/// `POST /api/calculate`
///
/// # Request Body
///
/// ```json
/// {
///   "principal": "$ 1,000,000",
///   "rate": "10",
///   "years": "1",
///   "months": "",
///   "days": null
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "principal": 1000000.0,
///   "rate_percent": 10.0,
///   "period": { "years": 1, "months": 0, "days": 0 },
///   "elapsed_years": 1.0,
///   "interest_earned": 100000.0,
///   "final_amount": 1100000.0,
///   "formatted": {
///     "principal": "$ 1.000.000,00",
///     "interest_earned": "$ 100.000,00",
///     "final_amount": "$ 1.100.000,00"
///   },
///   "message": "El interés ganado será: $ 100.000,00 COP"
/// }
/// ```
///
/// # Errors
///
/// All errors are `400 Bad Request`:
///
/// - `validation_error` - body is not valid JSON or a field is too long
/// - `invalid_number` - principal or rate is not a number
/// - `no_period` - years, months and days are all blank or zero
/// - `out_of_range` - a period field exceeds the configured maximum
pub async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let input = state.calculator.normalize(&payload.as_raw())?;
    state.period_bounds.check(&input.period)?;

    let calculation = state.calculator.evaluate(input);

    Ok(Json(CalculateResponse::from(&calculation)))
}
