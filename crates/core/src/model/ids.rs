use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a region, e.g. `abu-dhabi`.
///
/// Region ids are the keys of the persisted stamp record, so they stay plain
/// strings on the wire.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Creates a new `RegionId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a collected stamp.
///
/// Stamp ids are written by other screens and are opaque here: only the
/// number of entries per region matters, so any JSON value is accepted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StampId(serde_json::Value);

impl StampId {
    /// Creates a new `StampId` from a textual id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(serde_json::Value::String(id.into()))
    }

    /// Returns the id as text when it was stored as a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    #[must_use]
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionId({})", self.0)
    }
}

impl fmt::Debug for StampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StampId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for StampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(text) => write!(f, "{text}"),
            other => write!(f, "{other}"),
        }
    }
}
