use std::sync::Arc;
use std::time::Duration;

use passport_core::TIP_ROTATION_PERIOD;
use services::{ProgressEvents, ProgressService};

pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressService>;
    fn events(&self) -> ProgressEvents;

    fn tip_rotation_period(&self) -> Duration {
        TIP_ROTATION_PERIOD
    }
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressService>,
    events: ProgressEvents,
    tip_rotation_period: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
            events: app.events(),
            tip_rotation_period: app.tip_rotation_period(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn events(&self) -> ProgressEvents {
        self.events.clone()
    }

    #[must_use]
    pub fn tip_rotation_period(&self) -> Duration {
        self.tip_rotation_period
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
