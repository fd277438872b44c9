//! HTTP API module for the Daily Rate Engine.
//!
//! This module provides the REST endpoints for querying daily rates,
//! simulating stay billing, and maintaining the rate table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RateQueryRequest;
pub use response::{ApiError, ApiErrorResponse, RateResponse, SimulationResponse};
pub use state::AppState;
