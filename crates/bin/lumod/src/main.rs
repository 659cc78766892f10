//! # lumod — lumo daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`lumo.toml` + `LUMO_*` environment overrides)
//! - Initialize tracing
//! - Construct the virtual hardware (relay + ambient sensor)
//! - Construct the light controller, injecting hardware via port traits
//! - Spawn the auto-mode poll loop and the event-log subscriber
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use lumo_adapter_http_axum::router;
use lumo_adapter_http_axum::state::AppState;
use lumo_adapter_virtual::{FixedLevelSensor, TimeOfDaySensor, VirtualRelay, VirtualSensor};
use lumo_app::controller::LightController;
use lumo_app::event_bus::InProcessEventBus;
use lumo_domain::threshold::DarknessThreshold;

mod config;

use config::{Config, SensorKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Virtual hardware
    let relay = VirtualRelay::default();
    let sensor = match config.sensor.kind {
        SensorKind::TimeOfDay => {
            let (evening, morning) = config.sensor.dark_window()?;
            VirtualSensor::TimeOfDay(TimeOfDaySensor::new(evening, morning))
        }
        SensorKind::Fixed => VirtualSensor::Fixed(FixedLevelSensor::new(config.sensor.level)),
    };

    // Event bus, with a subscriber that logs every state change
    let event_bus = Arc::new(InProcessEventBus::new(256));
    let mut events = event_bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(id = %event.id, at = %event.timestamp, "{}", event.kind);
        }
    });

    // Controller
    let threshold = DarknessThreshold::new(config.controller.darkness_threshold)?;
    let controller = Arc::new(LightController::new(
        relay,
        sensor,
        Arc::clone(&event_bus),
        threshold,
        config.controller.auto,
    ));

    // Auto-mode poll loop
    let poll_interval = Duration::from_secs(config.controller.poll_interval_secs);
    tokio::spawn({
        let controller = Arc::clone(&controller);
        async move { controller.run_auto_loop(poll_interval).await }
    });

    // HTTP
    let app = router::build(AppState::new(controller));
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "lumod listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("lumod shutdown complete");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
