//! JSON REST handlers for the light controller.
//!
//! Response bodies mirror what each command changed: `/api/auto` reports the
//! new mode, `/api/manual` the new power state and mode, `/api/threshold`
//! the stored (clamped) cutoff.

use axum::Json;
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use lumo_app::ports::{AmbientSensor, EventPublisher, LightSwitch};
use lumo_domain::error::{LumoError, ValidationError};
use lumo_domain::status::StatusSnapshot;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `/api/auto`. A missing flag means "enable".
#[derive(Deserialize)]
pub struct AutoRequest {
    #[serde(default = "default_flag")]
    pub enabled: bool,
}

/// Request body for `/api/manual`. A missing flag means "turn on".
#[derive(Deserialize)]
pub struct ManualRequest {
    #[serde(default = "default_flag")]
    pub turn_on: bool,
}

/// Request body for `/api/threshold`.
#[derive(Deserialize)]
pub struct ThresholdRequest {
    #[serde(default)]
    pub value: Option<f64>,
}

fn default_flag() -> bool {
    true
}

/// Response body for `/api/auto`.
#[derive(Serialize)]
pub struct AutoResponse {
    pub auto: bool,
}

/// Response body for `/api/manual`.
#[derive(Serialize)]
pub struct ManualResponse {
    pub is_on: bool,
    pub auto: bool,
}

/// Response body for `/api/threshold`.
#[derive(Serialize)]
pub struct ThresholdResponse {
    pub darkness_threshold: f64,
}

/// Build the `/api` sub-router.
pub fn routes<S, A, P>() -> Router<AppState<S, A, P>>
where
    S: LightSwitch + 'static,
    A: AmbientSensor + 'static,
    P: EventPublisher + 'static,
{
    Router::new()
        .route("/status", get(status::<S, A, P>))
        .route("/auto", post(set_auto::<S, A, P>))
        .route("/manual", post(set_manual::<S, A, P>))
        .route("/threshold", post(set_threshold::<S, A, P>))
}

/// `GET /api/status`
pub async fn status<S, A, P>(State(state): State<AppState<S, A, P>>) -> Json<StatusSnapshot>
where
    S: LightSwitch + 'static,
    A: AmbientSensor + 'static,
    P: EventPublisher + 'static,
{
    Json(state.controller.status())
}

/// `POST /api/auto`
pub async fn set_auto<S, A, P>(
    State(state): State<AppState<S, A, P>>,
    Json(req): Json<AutoRequest>,
) -> Result<Json<AutoResponse>, ApiError>
where
    S: LightSwitch + 'static,
    A: AmbientSensor + 'static,
    P: EventPublisher + 'static,
{
    let auto = state.controller.set_auto(req.enabled).await?;
    Ok(Json(AutoResponse { auto }))
}

/// `POST /api/manual`
pub async fn set_manual<S, A, P>(
    State(state): State<AppState<S, A, P>>,
    Json(req): Json<ManualRequest>,
) -> Result<Json<ManualResponse>, ApiError>
where
    S: LightSwitch + 'static,
    A: AmbientSensor + 'static,
    P: EventPublisher + 'static,
{
    state.controller.set_manual(req.turn_on).await?;
    let snapshot = state.controller.status();
    Ok(Json(ManualResponse {
        is_on: snapshot.is_on,
        auto: snapshot.auto,
    }))
}

/// `POST /api/threshold`
pub async fn set_threshold<S, A, P>(
    State(state): State<AppState<S, A, P>>,
    Json(req): Json<ThresholdRequest>,
) -> Result<Json<ThresholdResponse>, ApiError>
where
    S: LightSwitch + 'static,
    A: AmbientSensor + 'static,
    P: EventPublisher + 'static,
{
    let value = req
        .value
        .ok_or_else(|| ApiError::from(LumoError::from(ValidationError::MissingThreshold)))?;
    let stored = state.controller.set_threshold(value).await?;
    Ok(Json(ThresholdResponse {
        darkness_threshold: stored.value(),
    }))
}
