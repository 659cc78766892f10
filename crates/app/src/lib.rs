//! # lumo-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - [`LightSwitch`](ports::LightSwitch) — the light switching hardware
//!   - [`AmbientSensor`](ports::AmbientSensor) — the ambient light sensor
//!   - [`EventPublisher`](ports::EventPublisher) — state-change fan-out
//! - Provide the [`LightController`](controller::LightController) use-case
//!   service: auto-mode evaluation, manual overrides, threshold updates,
//!   status snapshots
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `lumo-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod controller;
pub mod event_bus;
pub mod ports;
