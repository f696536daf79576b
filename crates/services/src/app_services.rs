use std::sync::Arc;

use passport_core::model::{RegionCatalog, RegionImages};
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::events::ProgressEvents;
use crate::passport_service::PassportService;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over one store and one signal hub.
#[derive(Clone)]
pub struct AppServices {
    events: ProgressEvents,
    progress: Arc<ProgressService>,
    passport: Arc<PassportService>,
}

impl AppServices {
    /// Build services over an already opened store.
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        let catalog = RegionCatalog::explorer_passport();
        let events = ProgressEvents::new();
        let progress = Arc::new(ProgressService::new(
            Arc::clone(&storage.kv),
            catalog.clone(),
            Arc::new(RegionImages::bundled()),
        ));
        let passport = Arc::new(PassportService::new(
            Arc::clone(&storage.kv),
            catalog,
            events.clone(),
        ));

        Self {
            events,
            progress,
            passport,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage))
    }

    #[must_use]
    pub fn events(&self) -> ProgressEvents {
        self.events.clone()
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn passport(&self) -> Arc<PassportService> {
        Arc::clone(&self.passport)
    }
}
