//! HTTP request handlers for the Daily Rate Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::RateCalculator;
use crate::config::{NewRateConfig, RateConfigSource};

use super::request::RateQueryRequest;
use super::response::{ApiError, ApiErrorResponse, RateResponse, SimulationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/calculate", post(calculate_handler))
        .route("/simulate", post(simulate_handler))
        .route(
            "/rate-configs",
            get(list_configs_handler).post(create_config_handler),
        )
        .route(
            "/rate-configs/:id",
            get(get_config_handler)
                .put(update_config_handler)
                .delete(delete_config_handler),
        )
        .with_state(state)
}

/// Converts a JSON body rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for GET /health.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /calculate endpoint.
///
/// Returns the daily rate for a stay.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateQueryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id).into_response(),
    };

    let configs = state.store().snapshot();
    let daily_rate = RateCalculator::new(&configs).rate(
        request.payment_type,
        request.bed_type,
        request.days,
    );

    info!(
        correlation_id = %correlation_id,
        payment_type = %request.payment_type,
        bed_type = %request.bed_type,
        days = request.days,
        daily_rate = %daily_rate,
        "Daily rate calculated"
    );
    (StatusCode::OK, Json(RateResponse { daily_rate })).into_response()
}

/// Handler for POST /simulate endpoint.
///
/// Returns the billing breakdown for a stay, optionally with its audit trace.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateQueryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id).into_response(),
    };

    let start_time = Instant::now();
    let configs = state.store().snapshot();
    let audited = RateCalculator::new(&configs).simulate_audited(
        request.payment_type,
        request.bed_type,
        request.days,
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        payment_type = %request.payment_type,
        bed_type = %request.bed_type,
        days = request.days,
        total_amount = %audited.simulation.total_amount,
        duration_us = duration.as_micros(),
        "Simulation completed successfully"
    );

    let response = SimulationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        result: audited.simulation,
        audit_trace: request.include_audit.then_some(audited.audit_trace),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for GET /rate-configs.
async fn list_configs_handler(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.store().list())).into_response()
}

/// Handler for GET /rate-configs/:id.
async fn get_config_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store().get(&id) {
        Ok(config) => (StatusCode::OK, Json(config)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /rate-configs.
async fn create_config_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewRateConfig>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let new_config = match payload {
        Ok(Json(config)) => config,
        Err(rejection) => return rejection_response(rejection, correlation_id).into_response(),
    };

    match state.store().create(new_config) {
        Ok(config) => (StatusCode::CREATED, Json(config)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rate configuration rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /rate-configs/:id.
async fn update_config_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewRateConfig>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let new_config = match payload {
        Ok(Json(config)) => config,
        Err(rejection) => return rejection_response(rejection, correlation_id).into_response(),
    };

    match state.store().update(&id, new_config) {
        Ok(config) => (StatusCode::OK, Json(config)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                config_id = %id,
                error = %err,
                "Rate configuration update rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /rate-configs/:id.
async fn delete_config_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store().delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::RateSimulation;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/rates").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        router
            .oneshot(
                builder
                    .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());
        let response = send(router, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_calculate_returns_tier_rate() {
        let router = create_router(create_test_state());
        let response = send(
            router,
            "POST",
            "/calculate",
            Some(r#"{"payment_type":"PRIVATE","bed_type":"STANDARD","days":45}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let rate: RateResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(rate.daily_rate, dec("315.00"));
    }

    #[tokio::test]
    async fn test_simulate_returns_breakdown() {
        let router = create_router(create_test_state());
        let response = send(
            router,
            "POST",
            "/simulate",
            Some(r#"{"payment_type":"SUS","bed_type":"STANDARD","days":10}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: SimulationResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.result.total_amount, dec("1800.00"));
        assert_eq!(body.result.tier.as_deref(), Some("1+ dias"));
        assert!(body.audit_trace.is_none());
    }

    #[tokio::test]
    async fn test_simulate_with_audit() {
        let router = create_router(create_test_state());
        let response = send(
            router,
            "POST",
            "/simulate",
            Some(r#"{"payment_type":"PRIVATE","bed_type":"ICU","days":20,"include_audit":true}"#),
        )
        .await;

        let body: SimulationResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.result.daily_rate, dec("720.00"));
        assert_eq!(body.audit_trace.unwrap().steps.len(), 3);
    }

    #[tokio::test]
    async fn test_simulate_unconfigured_pair_is_zero() {
        let router = create_router(create_test_state());
        let response = send(
            router,
            "POST",
            "/simulate",
            Some(r#"{"payment_type":"INSURANCE","bed_type":"ICU","days":10}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: SimulationResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.result, RateSimulation::zero());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = send(router, "POST", "/calculate", Some("{invalid json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_unknown_payment_type_returns_validation_error() {
        let router = create_router(create_test_state());
        let response = send(
            router,
            "POST",
            "/calculate",
            Some(r#"{"payment_type":"CASH","bed_type":"STANDARD","days":3}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_days_returns_validation_error() {
        let router = create_router(create_test_state());
        let response = send(
            router,
            "POST",
            "/simulate",
            Some(r#"{"payment_type":"SUS","bed_type":"STANDARD"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("days"));
    }

    #[tokio::test]
    async fn test_get_unknown_config_returns_404() {
        let router = create_router(create_test_state());
        let response = send(router, "GET", "/rate-configs/unknown", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
