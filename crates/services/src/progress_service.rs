use std::sync::Arc;

use passport_core::model::{
    ImageLookup, POINTS_KEY, RegionCatalog, RegionImages, STAMPS_KEY, SessionContext, StampRecord,
};
use passport_core::{AggregateProgress, DerivedRegionView, build_progress};
use storage::repository::KeyValueStore;

use crate::error::ReadError;
use crate::points::parse_points;
use crate::reader::StorageReader;

/// Everything the home screen shows after one reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeProgress {
    pub session: SessionContext,
    pub regions: Vec<DerivedRegionView>,
    pub aggregate: AggregateProgress,
    pub points: u64,
    pub restricted: bool,
}

/// Builds the home screen projection from the local store.
///
/// Never fails: missing data reads as empty, and corrupt or unreadable data
/// is logged and replaced with the empty projection.
#[derive(Clone)]
pub struct ProgressService {
    reader: StorageReader,
    catalog: RegionCatalog,
    images: Arc<dyn ImageLookup + Send + Sync>,
}

impl ProgressService {
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        catalog: RegionCatalog,
        images: Arc<dyn ImageLookup + Send + Sync>,
    ) -> Self {
        Self {
            reader: StorageReader::new(store),
            catalog,
            images,
        }
    }

    /// Service over the bundled regions and images.
    #[must_use]
    pub fn explorer(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(
            store,
            RegionCatalog::explorer_passport(),
            Arc::new(RegionImages::bundled()),
        )
    }

    #[must_use]
    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Resolve the current session from the store.
    pub async fn session(&self) -> SessionContext {
        self.reader.session().await
    }

    /// Load the session and build the full projection.
    pub async fn load_home(&self) -> HomeProgress {
        let session = self.reader.session().await;
        self.load_home_for(session).await
    }

    /// Build the projection for an explicit session.
    ///
    /// Restricted sessions skip storage entirely and read as zero progress.
    pub async fn load_home_for(&self, session: SessionContext) -> HomeProgress {
        let restricted = session.is_restricted();
        if restricted {
            return self.empty_projection(session, true);
        }

        let record = match self.read_stamps(&session).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stamps; showing empty progress");
                return self.empty_projection(session, false);
            }
        };
        let points = self.read_points(&session).await;

        let (regions, aggregate) =
            build_progress(&self.catalog, record.as_ref(), self.images.as_ref(), false);
        HomeProgress {
            session,
            regions,
            aggregate,
            points,
            restricted,
        }
    }

    /// Read and decode the session's stamp record.
    ///
    /// # Errors
    ///
    /// Returns `ReadError` if the stored record is malformed or the store fails.
    pub async fn read_stamps(
        &self,
        session: &SessionContext,
    ) -> Result<Option<StampRecord>, ReadError> {
        self.reader.read_json(session, STAMPS_KEY).await
    }

    /// Loyalty points for the session; 0 when missing, unparsable or unreadable.
    pub async fn read_points(&self, session: &SessionContext) -> u64 {
        let raw = match self.reader.read(session, POINTS_KEY).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read points");
                return 0;
            }
        };
        let Some(raw) = raw else {
            return 0;
        };
        parse_points(&raw).unwrap_or_else(|| {
            tracing::warn!(raw = %raw, "unparsable points value; using 0");
            0
        })
    }

    fn empty_projection(&self, session: SessionContext, restricted: bool) -> HomeProgress {
        let (regions, aggregate) =
            build_progress(&self.catalog, None, self.images.as_ref(), restricted);
        HomeProgress {
            session,
            regions,
            aggregate,
            points: 0,
            restricted,
        }
    }
}
