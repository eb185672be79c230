//! API route configuration.

use crate::api::handlers::calculate_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Calculator API routes.
///
/// # Endpoints
///
/// - `POST /calculate` - Compute compound interest from raw form values
pub fn calculator_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_handler))
}
