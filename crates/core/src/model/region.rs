use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::RegionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegionError {
    #[error("region id cannot be empty")]
    EmptyId,

    #[error("region name cannot be empty")]
    EmptyName,

    #[error("duplicate region id: {0}")]
    DuplicateId(RegionId),

    #[error("unknown region: {0}")]
    UnknownRegion(RegionId),
}

/// Stamp slots every bundled region offers.
pub const DEFAULT_STAMP_SLOTS: u32 = 5;

/// Bundled regions in carousel order.
const EXPLORER_REGIONS: [(&str, &str); 7] = [
    ("abu-dhabi", "Abu Dhabi"),
    ("dubai", "Dubai"),
    ("sharjah", "Sharjah"),
    ("ajman", "Ajman"),
    ("umm-al-quwain", "Umm Al Quwain"),
    ("fujairah", "Fujairah"),
    ("ras-al-khaimah", "Ras Al Khaimah"),
];

//
// ─── DEFINITION ────────────────────────────────────────────────────────────────
//

/// A region with a fixed quota of collectible stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionDefinition {
    id: RegionId,
    name: String,
    total_stamp_slots: u32,
}

impl RegionDefinition {
    /// Create a region definition with a trimmed id and name.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::EmptyId` or `RegionError::EmptyName` when either is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        total_stamp_slots: u32,
    ) -> Result<Self, RegionError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(RegionError::EmptyId);
        }
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RegionError::EmptyName);
        }

        Ok(Self {
            id: RegionId::new(id),
            name,
            total_stamp_slots,
        })
    }

    #[must_use]
    pub fn id(&self) -> &RegionId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn total_stamp_slots(&self) -> u32 {
        self.total_stamp_slots
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Ordered, duplicate-free set of region definitions.
///
/// Declaration order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCatalog {
    regions: Vec<RegionDefinition>,
}

impl RegionCatalog {
    /// Build a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::DuplicateId` if two definitions share an id.
    pub fn new(regions: Vec<RegionDefinition>) -> Result<Self, RegionError> {
        let mut seen = HashSet::with_capacity(regions.len());
        for region in &regions {
            if !seen.insert(region.id().clone()) {
                return Err(RegionError::DuplicateId(region.id().clone()));
            }
        }
        Ok(Self { regions })
    }

    /// The seven bundled passport regions, five stamp slots each.
    #[must_use]
    pub fn explorer_passport() -> Self {
        let regions = EXPLORER_REGIONS
            .iter()
            .map(|(id, name)| RegionDefinition {
                id: RegionId::new(*id),
                name: (*name).to_string(),
                total_stamp_slots: DEFAULT_STAMP_SLOTS,
            })
            .collect();
        Self { regions }
    }

    #[must_use]
    pub fn regions(&self) -> &[RegionDefinition] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionDefinition> {
        self.regions.iter()
    }

    #[must_use]
    pub fn get(&self, id: &RegionId) -> Option<&RegionDefinition> {
        self.regions.iter().find(|region| region.id() == id)
    }

    /// Resolve a region id, failing for ids outside the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::UnknownRegion` if no definition has this id.
    pub fn require(&self, id: &RegionId) -> Result<&RegionDefinition, RegionError> {
        self.get(id)
            .ok_or_else(|| RegionError::UnknownRegion(id.clone()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::explorer_passport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_rejects_blank_fields() {
        assert_eq!(
            RegionDefinition::new("  ", "Dubai", 5).unwrap_err(),
            RegionError::EmptyId
        );
        assert_eq!(
            RegionDefinition::new("dubai", "", 5).unwrap_err(),
            RegionError::EmptyName
        );
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err = RegionCatalog::new(vec![
            RegionDefinition::new("dubai", "Dubai", 5).unwrap(),
            RegionDefinition::new("dubai", "Dubai again", 3).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, RegionError::DuplicateId(RegionId::new("dubai")));
    }

    #[test]
    fn explorer_passport_has_seven_regions_in_order() {
        let catalog = RegionCatalog::explorer_passport();
        let ids: Vec<&str> = catalog.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(
            ids,
            [
                "abu-dhabi",
                "dubai",
                "sharjah",
                "ajman",
                "umm-al-quwain",
                "fujairah",
                "ras-al-khaimah"
            ]
        );
        assert!(catalog.iter().all(|r| r.total_stamp_slots() == DEFAULT_STAMP_SLOTS));
        assert_eq!(
            catalog.get(&RegionId::new("ajman")).map(RegionDefinition::name),
            Some("Ajman")
        );
    }

    #[test]
    fn require_reports_unknown_region() {
        let catalog = RegionCatalog::explorer_passport();
        let err = catalog.require(&RegionId::new("atlantis")).unwrap_err();
        assert_eq!(err, RegionError::UnknownRegion(RegionId::new("atlantis")));
    }
}
