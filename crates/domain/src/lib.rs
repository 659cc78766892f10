//! # lumo-domain
//!
//! Pure domain model for the lumo smart-light controller.
//!
//! ## Responsibilities
//! - Define the **light level** (normalized ambient reading) and the
//!   **darkness threshold** it is compared against
//! - Define the **status snapshot** — the wire-level value object the
//!   controller reports and the panel renders
//! - Define **events** (state-change records)
//! - Error conventions shared by every layer
//! - Contain all invariant enforcement (threshold clamping, darkness
//!   comparison)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod event;
pub mod level;
pub mod status;
pub mod threshold;
