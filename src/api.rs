//! HTTP API for yield prediction
//!
//! Provides REST endpoints over the serving core using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check with artifact-loaded state
//! - `GET /model-info` - Model type, feature list, metrics, status
//! - `POST /predict` - Predict crop yield
//!
//! ## Example
//!
//! ```rust,ignore
//! use cosecha::api::{create_router, AppState};
//! use cosecha::predict::ServingContext;
//!
//! let state = AppState::new(ServingContext::empty());
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::input::{
    PredictionInput, FEATURE_NAMES, HUMIDITY_RANGE, RAINFALL_RANGE, TEMPERATURE_RANGE,
};
use crate::metrics::MetricsRecord;
use crate::predict::{PredictionResult, ServingContext};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    ctx: Arc<ServingContext>,
}

impl AppState {
    /// Wrap a serving context for handler sharing
    #[must_use]
    pub fn new(ctx: ServingContext) -> Self {
        Self { ctx: Arc::new(ctx) }
    }
}

fn default_rainfall() -> f64 {
    150.0
}

fn default_temperature() -> f64 {
    28.0
}

fn default_humidity() -> f64 {
    65.0
}

/// Request schema for `/predict`.
///
/// Numeric fields carry typical-case defaults so a caller can omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Crop type (e.g. wheat, rice, corn)
    pub crop: String,
    /// Soil type (e.g. loamy, clay, sandy)
    pub soil_type: String,
    /// Region (e.g. north-india, south-india)
    pub region: String,
    /// Season (e.g. kharif, rabi, zaid)
    pub season: String,
    /// Rainfall in mm, [0, 500]
    #[serde(default = "default_rainfall")]
    pub rainfall: f64,
    /// Temperature in °C, [0, 50]
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Humidity in %, [0, 100]
    #[serde(default = "default_humidity")]
    pub humidity: f64,
}

/// Error response schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of what was rejected
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" when the process answers
    pub status: String,
    /// Whether a trained model artifact is loaded
    pub model_loaded: bool,
    /// Whether the encoder table artifact is loaded
    pub encoders_loaded: bool,
}

/// Model information response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    /// Model type label from the artifact
    pub model_type: String,
    /// Feature vector layout the model expects
    pub features: Vec<String>,
    /// Loaded training metrics
    pub metrics: MetricsRecord,
    /// "active" when a model is loaded, "not_loaded" otherwise
    pub status: String,
}

fn check_range(name: &str, value: f64, (min, max): (f64, f64)) -> Result<(), String> {
    if value < min || value > max || !value.is_finite() {
        return Err(format!("{name} must be between {min} and {max}, got {value}"));
    }
    Ok(())
}

fn validate_request(request: &PredictRequest) -> Result<PredictionInput, String> {
    for (name, value) in [
        ("crop", &request.crop),
        ("soil_type", &request.soil_type),
        ("region", &request.region),
        ("season", &request.season),
    ] {
        if value.trim().is_empty() {
            return Err(format!("{name} must not be empty"));
        }
    }

    check_range("rainfall", request.rainfall, RAINFALL_RANGE)?;
    check_range("temperature", request.temperature, TEMPERATURE_RANGE)?;
    check_range("humidity", request.humidity, HUMIDITY_RANGE)?;

    Ok(PredictionInput {
        crop: request.crop.clone(),
        soil_type: request.soil_type.clone(),
        region: request.region.clone(),
        season: request.season.clone(),
        rainfall: request.rainfall,
        temperature: request.temperature,
        humidity: request.humidity,
    })
}

/// Yield prediction handler (`POST /predict`).
///
/// Validation failures are the only non-200 outcome; once the input is
/// accepted the orchestrator always produces a result.
pub(crate) async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictionResult>, (StatusCode, Json<ErrorResponse>)> {
    let input = validate_request(&request)
        .map_err(|error| (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })))?;

    let mut rng = rand::thread_rng();
    Ok(Json(state.ctx.predict(&input, &mut rng)))
}

/// Health check handler (`GET /health`)
pub(crate) async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.ctx.model_loaded(),
        encoders_loaded: state.ctx.encoders_loaded(),
    })
}

/// Model info handler (`GET /model-info`).
///
/// Reports artifact state without invoking prediction logic.
pub(crate) async fn model_info_handler(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    let status = if state.ctx.model_loaded() {
        "active"
    } else {
        "not_loaded"
    };

    Json(ModelInfoResponse {
        model_type: state
            .ctx
            .model_type()
            .unwrap_or("LinearRegression")
            .to_string(),
        features: FEATURE_NAMES.iter().map(ToString::to_string).collect(),
        metrics: state.ctx.metrics().clone(),
        status: status.to_string(),
    })
}

/// Create the API router with all endpoints configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/model-info", get(model_info_handler))
        .route("/predict", post(predict_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
