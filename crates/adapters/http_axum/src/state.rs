//! Shared application state for axum handlers.

use std::sync::Arc;

use lumo_app::controller::LightController;

/// Application state shared across all axum handlers.
///
/// Generic over the switch, sensor, and publisher port types to avoid
/// dynamic dispatch. `Clone` is implemented manually so the port types
/// themselves do not need to be `Clone` — only the `Arc` is cloned.
pub struct AppState<S, A, P> {
    /// The light controller service.
    pub controller: Arc<LightController<S, A, P>>,
}

impl<S, A, P> Clone for AppState<S, A, P> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

impl<S, A, P> AppState<S, A, P> {
    /// Create the state from a shared controller.
    ///
    /// The controller is taken pre-wrapped in an `Arc` because the
    /// composition root also hands it to the auto-mode loop task.
    #[must_use]
    pub fn new(controller: Arc<LightController<S, A, P>>) -> Self {
        Self { controller }
    }
}
