//! HTTP request handlers for API endpoints.

pub mod calculate;
pub mod health;
pub mod not_found;

pub use calculate::calculate_handler;
pub use health::health_handler;
pub use not_found::not_found_handler;
