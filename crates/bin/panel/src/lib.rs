//! # lumo-panel
//!
//! Terminal control panel for the lumo daemon.
//!
//! ## Responsibilities
//! - Poll `GET /api/status` on a fixed interval and render the reported state
//! - Issue control commands (enable auto mode, manual on/off, set darkness
//!   threshold), each followed by a status re-fetch
//! - Keep a diagnostic log of failed requests; a failure never clobbers the
//!   last rendered state
//!
//! ## Layout
//! - [`client`] — the HTTP client for the daemon's JSON API
//! - [`app`] — panel state and key dispatch
//! - [`ui`] — rendering into ratatui widgets

pub mod app;
pub mod client;
pub mod ui;
