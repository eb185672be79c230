use crate::application::services::CalculatorService;
use crate::utils::period_bounds::PeriodBounds;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub calculator: CalculatorService,
    pub period_bounds: PeriodBounds,
}

impl AppState {
    pub fn new(calculator: CalculatorService, period_bounds: PeriodBounds) -> Self {
        Self {
            calculator,
            period_bounds,
        }
    }
}
