use std::sync::Arc;

use passport_core::model::{
    CURRENT_USER_KEY, POINTS_KEY, RegionCatalog, RegionId, STAMPS_KEY, SessionContext, StampId,
    StampRecord, USER_NAME_KEY,
};
use storage::repository::KeyValueStore;

use crate::error::{ProgressError, ReadError};
use crate::events::{ProgressEvents, ProgressSignal};
use crate::points::parse_points;
use crate::reader::StorageReader;

/// Writes progress on behalf of the scan, rewards and sign-in flows.
///
/// Every successful write publishes the matching signal so open screens reload.
#[derive(Clone)]
pub struct PassportService {
    reader: StorageReader,
    catalog: RegionCatalog,
    events: ProgressEvents,
}

impl PassportService {
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        catalog: RegionCatalog,
        events: ProgressEvents,
    ) -> Self {
        Self {
            reader: StorageReader::new(store),
            catalog,
            events,
        }
    }

    /// Record the signed-in user for subsequent reads.
    ///
    /// A missing display name clears any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::EmptyEmail` for a blank email, or
    /// `ProgressError::Storage` if the session keys cannot be written.
    pub async fn sign_in(
        &self,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<SessionContext, ProgressError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ProgressError::EmptyEmail);
        }

        let display_name = display_name.map(str::trim).filter(|name| !name.is_empty());

        let store = self.reader.store();
        store.set(CURRENT_USER_KEY, email).await?;
        match display_name {
            Some(name) => store.set(USER_NAME_KEY, name).await?,
            None => store.remove(USER_NAME_KEY).await?,
        }

        tracing::info!(email, "signed in");
        self.events.publish(ProgressSignal::StampsUpdated);
        self.events.publish(ProgressSignal::PointsUpdated);
        Ok(SessionContext::new(
            Some(email.to_string()),
            display_name.map(str::to_string),
        ))
    }

    /// Forget the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the session keys cannot be removed.
    pub async fn sign_out(&self) -> Result<(), ProgressError> {
        let store = self.reader.store();
        store.remove(CURRENT_USER_KEY).await?;
        store.remove(USER_NAME_KEY).await?;
        self.events.publish(ProgressSignal::StampsUpdated);
        self.events.publish(ProgressSignal::PointsUpdated);
        Ok(())
    }

    /// Append a stamp to a region and return the region's new count.
    ///
    /// Entries for other regions are kept as stored, whatever their shape. Only
    /// a value that is not a JSON object at all is replaced by a fresh record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Region` for ids outside the catalog, or a
    /// storage/encoding error if the record cannot be written.
    pub async fn record_stamp(
        &self,
        session: &SessionContext,
        region: &RegionId,
        stamp: StampId,
    ) -> Result<usize, ProgressError> {
        self.catalog.require(region)?;

        let mut record = match self.reader.read_json::<StampRecord>(session, STAMPS_KEY).await {
            Ok(record) => record.unwrap_or_default(),
            Err(ReadError::Malformed { key, source }) => {
                tracing::warn!(key = %key, error = %source, "replacing malformed stamp record");
                StampRecord::new()
            }
            Err(ReadError::Storage(err)) => return Err(err.into()),
        };
        record.push(region.clone(), stamp);

        let encoded = record.to_json()?;
        self.reader
            .store()
            .set(&session.namespaced_key(STAMPS_KEY), &encoded)
            .await?;

        self.events.publish(ProgressSignal::StampsUpdated);
        Ok(record.collected_in(region))
    }

    /// Add loyalty points and return the new balance. Saturates at `u64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the balance cannot be read or written.
    pub async fn add_points(
        &self,
        session: &SessionContext,
        delta: u64,
    ) -> Result<u64, ProgressError> {
        let current = self
            .reader
            .read(session, POINTS_KEY)
            .await?
            .and_then(|raw| parse_points(&raw))
            .unwrap_or(0);
        let total = current.saturating_add(delta);

        self.reader
            .store()
            .set(&session.namespaced_key(POINTS_KEY), &total.to_string())
            .await?;

        self.events.publish(ProgressSignal::PointsUpdated);
        Ok(total)
    }
}
