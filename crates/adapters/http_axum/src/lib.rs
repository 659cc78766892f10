//! # lumo-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the controller's **REST JSON API**
//!   (`/api/status`, `/api/auto`, `/api/manual`, `/api/threshold`)
//! - Map HTTP requests into controller calls (driving adapter)
//! - Map controller results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `lumo-app` (for the controller and port traits) and
//! `lumo-domain` (for the types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
