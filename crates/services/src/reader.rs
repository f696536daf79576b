use std::sync::Arc;

use serde::de::DeserializeOwned;

use passport_core::model::{CURRENT_USER_KEY, SessionContext, USER_NAME_KEY};
use storage::repository::{KeyValueStore, StorageError};

use crate::error::ReadError;

/// Reads session-scoped values out of the local key-value store.
#[derive(Clone)]
pub struct StorageReader {
    store: Arc<dyn KeyValueStore>,
}

impl StorageReader {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Resolve the session from the unnamespaced session keys.
    ///
    /// Storage failures degrade to an anonymous session.
    pub async fn session(&self) -> SessionContext {
        let email = self.raw_or_none(CURRENT_USER_KEY).await;
        let name = self.raw_or_none(USER_NAME_KEY).await;
        SessionContext::new(email, name)
    }

    /// Fetch the raw string stored under the session's namespaced `key`.
    ///
    /// An empty stored string reads as absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub async fn read(
        &self,
        session: &SessionContext,
        key: &str,
    ) -> Result<Option<String>, StorageError> {
        let full_key = session.namespaced_key(key);
        if session.user_email().is_none() {
            tracing::debug!(key, "no current user; reading bare key");
        }
        let value = self.store.get(&full_key).await?;
        Ok(value.filter(|raw| !raw.is_empty()))
    }

    /// Fetch and decode a JSON value stored under the session's namespaced `key`.
    ///
    /// # Errors
    ///
    /// Returns `ReadError::Malformed` if the stored text does not decode as `T`,
    /// or `ReadError::Storage` if the store cannot be read.
    pub async fn read_json<T: DeserializeOwned>(
        &self,
        session: &SessionContext,
        key: &str,
    ) -> Result<Option<T>, ReadError> {
        let Some(raw) = self.read(session, key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| ReadError::Malformed {
                key: session.namespaced_key(key),
                source,
            })
    }

    async fn raw_or_none(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read session key");
                None
            }
        }
    }
}
