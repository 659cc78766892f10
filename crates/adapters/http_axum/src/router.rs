//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use lumo_app::ports::{AmbientSensor, EventPublisher, LightSwitch};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API under `/api` plus a `/health` probe. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<S, A, P>(state: AppState<S, A, P>) -> Router
where
    S: LightSwitch + 'static,
    A: AmbientSensor + 'static,
    P: EventPublisher + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use lumo_app::controller::LightController;
    use lumo_domain::error::{HardwareError, LumoError, SensorError};
    use lumo_domain::event::Event;
    use lumo_domain::level::LightLevel;
    use lumo_domain::threshold::DarknessThreshold;

    #[derive(Default)]
    struct StubSwitch {
        on: Mutex<bool>,
    }

    impl LightSwitch for StubSwitch {
        async fn turn_on(&self) -> Result<(), HardwareError> {
            *self.on.lock().unwrap() = true;
            Ok(())
        }

        async fn turn_off(&self) -> Result<(), HardwareError> {
            *self.on.lock().unwrap() = false;
            Ok(())
        }

        fn is_on(&self) -> bool {
            *self.on.lock().unwrap()
        }
    }

    struct StubSensor;

    impl AmbientSensor for StubSensor {
        async fn read(&self) -> Result<LightLevel, SensorError> {
            Ok(LightLevel::new(0.5))
        }
    }

    struct NullBus;

    impl EventPublisher for NullBus {
        async fn publish(&self, _event: Event) -> Result<(), LumoError> {
            Ok(())
        }
    }

    fn app() -> Router {
        let controller = Arc::new(LightController::new(
            StubSwitch::default(),
            StubSensor,
            NullBus,
            DarknessThreshold::default(),
            true,
        ));
        build(AppState::new(controller))
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_report_full_status_shape() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["is_on"], false);
        assert_eq!(body["auto"], true);
        assert!(body["sensor_value"].is_null());
        assert!((body["darkness_threshold"].as_f64().unwrap() - 0.3).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_default_to_enabled_when_auto_body_is_empty() {
        let resp = app()
            .oneshot(json_post("/api/auto", "{}"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["auto"], true);
    }

    #[tokio::test]
    async fn should_disable_auto_on_request() {
        let resp = app()
            .oneshot(json_post("/api/auto", r#"{"enabled":false}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["auto"], false);
    }

    #[tokio::test]
    async fn should_turn_on_and_leave_auto_mode_on_manual_command() {
        let app = app();

        let resp = app
            .clone()
            .oneshot(json_post("/api/manual", r#"{"turn_on":true}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["is_on"], true);
        assert_eq!(body["auto"], false);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(resp).await;
        assert_eq!(body["is_on"], true);
        assert_eq!(body["auto"], false);
    }

    #[tokio::test]
    async fn should_clamp_threshold_in_response() {
        let resp = app()
            .oneshot(json_post("/api/threshold", r#"{"value":3.456}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert!((body["darkness_threshold"].as_f64().unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_reject_threshold_without_value() {
        let resp = app()
            .oneshot(json_post("/api/threshold", "{}"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "threshold value is required");
    }

    #[tokio::test]
    async fn should_reject_threshold_with_non_numeric_value() {
        let resp = app()
            .oneshot(json_post("/api/threshold", r#"{"value":"dark"}"#))
            .await
            .unwrap();

        assert!(resp.status().is_client_error());
    }
}
