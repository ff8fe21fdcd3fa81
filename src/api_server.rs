// Axum API Server Module
//
// Purpose: JSON back-end for the web dashboard. Parses form fields, runs the
// BMI engine and keeps the session history of saved calculations.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::engine::{Assessment, Recommendation, BANDS};
use crate::error::{BmiError, InvalidInput, InvalidMeasurement};
use crate::history::{HistoryEntry, SessionHistory};
use crate::utils::formatting::{format_bmi, gauge_fraction, result_line, GAUGE_MAX_BMI};
use crate::utils::parsing::parse_decimal;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub history: Arc<RwLock<SessionHistory>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!("Session history limit: {}", config.history_limit);
        let history = SessionHistory::new(config.history_limit);

        Self {
            config: Arc::new(config),
            history: Arc::new(RwLock::new(history)),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Calculation endpoints
        .route("/api/bmi", get(assess_query).post(assess_json))
        .route("/api/bands", get(list_bands))

        // Session history
        .route(
            "/api/history",
            get(get_history).post(save_history).delete(clear_history),
        )

        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// `GET /api/bmi?weight=70&height=1,75`
async fn assess_query(
    query: Result<Query<BmiQuery>, QueryRejection>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let Query(params) = query?;
    let weight_kg = parse_decimal("weight", params.weight.as_deref().unwrap_or(""))?;
    let height_m = parse_decimal("height", params.height.as_deref().unwrap_or(""))?;
    respond(weight_kg, height_m)
}

/// `POST /api/bmi` with `{"weight": "70", "height": "1,75"}` (numbers also accepted)
async fn assess_json(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let Json(payload) = payload?;
    let (weight_kg, height_m) = payload.resolve()?;
    respond(weight_kg, height_m)
}

fn respond(weight_kg: f64, height_m: f64) -> Result<Json<AssessmentResponse>, AppError> {
    let assessment = crate::engine::assess(weight_kg, height_m)?;

    tracing::debug!("Assessed weight={} height={} -> {:.2}", weight_kg, height_m, assessment.bmi);
    Ok(Json(AssessmentResponse::from(&assessment)))
}

async fn list_bands() -> impl IntoResponse {
    let bands: Vec<serde_json::Value> = BANDS
        .iter()
        .map(|band| {
            serde_json::json!({
                "lower_bound": band.lower_bound,
                "classification": band.classification,
                "label": band.classification.label(),
                "indicator": band.classification.indicator(),
                "background_color": band.classification.background_color(),
                "accent_color": band.classification.accent_color(),
                "recommendation": band.recommendation,
            })
        })
        .collect();

    Json(serde_json::json!({
        "bands": bands,
        "gauge_max": GAUGE_MAX_BMI,
    }))
}

async fn get_history(State(state): State<AppState>) -> impl IntoResponse {
    let history = state.history.read().await;

    Json(serde_json::json!({
        "rows": history.len(),
        "limit": history.limit(),
        "data": history.entries(),
    }))
}

async fn save_history(
    State(state): State<AppState>,
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HistoryEntry>), AppError> {
    let Json(payload) = payload?;
    let (weight_kg, height_m) = payload.resolve()?;
    let assessment = crate::engine::assess(weight_kg, height_m)?;

    let entry = state.history.write().await.record(&assessment, weight_kg, height_m);
    tracing::info!("Saved calculation to history: {} ({})", entry.bmi, entry.classification);

    Ok((StatusCode::CREATED, Json(entry)))
}

async fn clear_history(State(state): State<AppState>) -> impl IntoResponse {
    let mut history = state.history.write().await;
    let cleared = history.len();
    history.clear();
    tracing::info!("Cleared {} history entries", cleared);

    Json(serde_json::json!({ "cleared": cleared }))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Missing parameters are reported as invalid input, not as an extractor error.
#[derive(Deserialize, Debug)]
struct BmiQuery {
    weight: Option<String>,
    height: Option<String>,
}

/// A form field sent either as typed text or as a JSON number.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum FieldValue {
    Number(f64),
    Text(String),
}

/// Absent and `null` fields both arrive as `None` and fail like empty text.
fn resolve_field(value: &Option<FieldValue>, field: &'static str) -> Result<f64, InvalidInput> {
    match value {
        Some(FieldValue::Number(value)) => Ok(*value),
        Some(FieldValue::Text(raw)) => parse_decimal(field, raw),
        None => parse_decimal(field, ""),
    }
}

#[derive(Deserialize, Debug)]
struct BmiRequest {
    #[serde(default)]
    weight: Option<FieldValue>,
    #[serde(default)]
    height: Option<FieldValue>,
}

impl BmiRequest {
    fn resolve(&self) -> Result<(f64, f64), InvalidInput> {
        Ok((resolve_field(&self.weight, "weight")?, resolve_field(&self.height, "height")?))
    }
}

/// Everything the dashboard needs to render a result card.
#[derive(Serialize, Debug)]
pub struct AssessmentResponse {
    pub bmi: f64,
    pub bmi_display: String,
    pub classification: crate::engine::Classification,
    pub label: &'static str,
    pub indicator: &'static str,
    pub background_color: &'static str,
    pub accent_color: &'static str,
    pub recommendation: Recommendation,
    pub gauge: f64,
    pub summary: String,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(a: &Assessment) -> Self {
        Self {
            bmi: a.bmi,
            bmi_display: format_bmi(a.bmi),
            classification: a.classification,
            label: a.classification.label(),
            indicator: a.classification.indicator(),
            background_color: a.classification.background_color(),
            accent_color: a.classification.accent_color(),
            recommendation: a.recommendation,
            gauge: gauge_fraction(a.bmi),
            summary: result_line(a),
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub struct AppError(BmiError);

impl From<BmiError> for AppError {
    fn from(err: BmiError) -> Self {
        AppError(err)
    }
}

impl From<InvalidInput> for AppError {
    fn from(err: InvalidInput) -> Self {
        AppError(err.into())
    }
}

impl From<InvalidMeasurement> for AppError {
    fn from(err: InvalidMeasurement) -> Self {
        AppError(err.into())
    }
}

/// Undecodable bodies and query strings (bad JSON, wrong field types, missing
/// content type) are invalid input too.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(InvalidInput { field: "body", raw: rejection.body_text() }.into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(InvalidInput { field: "query", raw: rejection.body_text() }.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            BmiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            BmiError::InvalidMeasurement(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::debug!("Rejected request: {}", self.0);

        let body = Json(serde_json::json!({
            "error": self.0.user_message(),
            "kind": self.0.kind(),
            "detail": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}
