use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::ids::{RegionId, StampId};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StampRecordError {
    #[error("malformed stamp record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A user's collected stamps, keyed by region id.
///
/// Persisted as a JSON object. Only the top level is checked: each entry is
/// kept as raw JSON, so foreign ids and odd values survive a rewrite. An
/// entry counts only when it is an array; `null` or any other shape reads
/// as no stamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StampRecord {
    regions: BTreeMap<RegionId, Value>,
}

impl StampRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns `StampRecordError::Malformed` if the input is not valid JSON or
    /// its top-level value is not an object.
    pub fn from_json(raw: &str) -> Result<Self, StampRecordError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encode into the stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns `StampRecordError::Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String, StampRecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of entries for a region. Duplicates count.
    #[must_use]
    pub fn collected_in(&self, id: &RegionId) -> usize {
        self.regions
            .get(id)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Append a stamp. An entry that is not an array is replaced by a new one.
    pub fn push(&mut self, region: RegionId, stamp: StampId) {
        let entry = self
            .regions
            .entry(region)
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(stamps) => stamps.push(stamp.into_value()),
            other => *other = Value::Array(vec![stamp.into_value()]),
        }
    }

    /// True when no region holds a stamp.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions
            .values()
            .all(|entry| entry.as_array().is_none_or(Vec::is_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_entries_including_duplicates() {
        let record = StampRecord::from_json(r#"{"dubai":["s1","s1","s2"]}"#).unwrap();
        assert_eq!(record.collected_in(&RegionId::new("dubai")), 3);
        assert_eq!(record.collected_in(&RegionId::new("ajman")), 0);
    }

    #[test]
    fn rejects_only_non_object_top_level() {
        assert!(StampRecord::from_json("null").is_err());
        assert!(StampRecord::from_json("[]").is_err());
        assert!(StampRecord::from_json(r#""dubai""#).is_err());
        assert!(StampRecord::from_json("{not json").is_err());
    }

    #[test]
    fn unknown_ids_with_any_shape_are_ignored() {
        let record = StampRecord::from_json(r#"{"dubai":["a","b"],"atlantis":3}"#).unwrap();
        assert_eq!(record.collected_in(&RegionId::new("dubai")), 2);
        assert_eq!(record.collected_in(&RegionId::new("atlantis")), 0);
    }

    #[test]
    fn null_or_non_array_entries_count_as_empty() {
        let record =
            StampRecord::from_json(r#"{"abu-dhabi":null,"dubai":["a"],"sharjah":"x"}"#).unwrap();
        assert_eq!(record.collected_in(&RegionId::new("abu-dhabi")), 0);
        assert_eq!(record.collected_in(&RegionId::new("dubai")), 1);
        assert_eq!(record.collected_in(&RegionId::new("sharjah")), 0);
        assert!(!record.is_empty());

        let nothing = StampRecord::from_json(r#"{"abu-dhabi":null,"fujairah":{}}"#).unwrap();
        assert!(nothing.is_empty());
    }

    #[test]
    fn push_appends_and_encodes_as_object() {
        let mut record = StampRecord::new();
        assert!(record.is_empty());
        record.push(RegionId::new("sharjah"), StampId::new("heart-of-sharjah"));
        assert!(!record.is_empty());
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"sharjah":["heart-of-sharjah"]}"#
        );
    }

    #[test]
    fn push_keeps_foreign_entries_and_repairs_its_own() {
        let mut record =
            StampRecord::from_json(r#"{"ajman":null,"atlantis":"legacy","dubai":["a"]}"#).unwrap();
        record.push(RegionId::new("ajman"), StampId::new("fort"));
        record.push(RegionId::new("dubai"), StampId::new("b"));
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"ajman":["fort"],"atlantis":"legacy","dubai":["a","b"]}"#
        );
    }
}
