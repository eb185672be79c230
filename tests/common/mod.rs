#![allow(dead_code)]

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use compound_interest::api::handlers::{calculate_handler, health_handler, not_found_handler};
use compound_interest::application::services::CalculatorService;
use compound_interest::state::AppState;
use compound_interest::utils::period_bounds::PeriodBounds;

pub fn create_test_state() -> AppState {
    AppState::new(CalculatorService::new(), PeriodBounds::default())
}

pub fn create_test_state_with_bounds(bounds: PeriodBounds) -> AppState {
    AppState::new(CalculatorService::new(), bounds)
}

/// Router with the API handlers but without rate limiting, which needs
/// socket connect info that the in-memory test transport does not provide.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/calculate", post(calculate_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

pub fn test_server() -> TestServer {
    TestServer::new(test_router(create_test_state())).unwrap()
}
