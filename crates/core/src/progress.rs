//! Derived progress for the passport home screen.
//!
//! Everything here is a pure projection of the region catalog and a stamp
//! record. Nothing is persisted; callers rebuild on every reload.

use crate::model::{ImageLookup, ImageRef, RegionCatalog, RegionDefinition, RegionId, StampRecord};

/// A region annotated with how many stamps the user holds there.
///
/// `collected_count` may exceed the slot count; over-collection is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRegionView {
    pub region: RegionDefinition,
    pub collected_count: u32,
    pub image: Option<ImageRef>,
}

impl DerivedRegionView {
    #[must_use]
    pub fn id(&self) -> &RegionId {
        self.region.id()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.region.name()
    }

    #[must_use]
    pub fn total_stamp_slots(&self) -> u32 {
        self.region.total_stamp_slots()
    }
}

/// Totals across all catalog regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateProgress {
    pub total_collected: u32,
    pub total_possible: u32,
    /// Rounded, always within `0..=100`.
    pub percentage: u8,
}

impl AggregateProgress {
    #[must_use]
    pub fn new(total_collected: u32, total_possible: u32) -> Self {
        Self {
            total_collected,
            total_possible,
            percentage: completion_percentage(total_collected, total_possible),
        }
    }
}

/// Rounded completion percentage (half rounds up).
///
/// Zero collected is always 0%, and no division happens in that case. The
/// result is capped at 100; a positive count against zero possible slots
/// reads as complete.
#[must_use]
pub fn completion_percentage(total_collected: u32, total_possible: u32) -> u8 {
    if total_collected == 0 {
        return 0;
    }
    if total_possible == 0 {
        return 100;
    }

    let collected = u64::from(total_collected);
    let possible = u64::from(total_possible);
    let rounded = (collected * 200 + possible) / (2 * possible);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Build the per-region views and the aggregate for one reload.
///
/// Regions come out in catalog order. Record entries for ids outside the
/// catalog are ignored, and a missing record reads as empty. In restricted
/// mode every count is zero regardless of what is stored.
#[must_use]
pub fn build_progress(
    catalog: &RegionCatalog,
    record: Option<&StampRecord>,
    images: &dyn ImageLookup,
    restricted: bool,
) -> (Vec<DerivedRegionView>, AggregateProgress) {
    let views: Vec<DerivedRegionView> = catalog
        .iter()
        .map(|region| {
            let stored = record.map_or(0, |record| record.collected_in(region.id()));
            let collected_count = if restricted {
                0
            } else {
                u32::try_from(stored).unwrap_or(u32::MAX)
            };
            DerivedRegionView {
                region: region.clone(),
                collected_count,
                image: images.image_for(region.id()),
            }
        })
        .collect();

    let total_collected = if restricted {
        0
    } else {
        views
            .iter()
            .fold(0_u32, |sum, view| sum.saturating_add(view.collected_count))
    };
    let total_possible = views
        .iter()
        .fold(0_u32, |sum, view| sum.saturating_add(view.total_stamp_slots()));

    (views, AggregateProgress::new(total_collected, total_possible))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::{RegionImages, StampId};

    fn two_regions() -> RegionCatalog {
        RegionCatalog::new(vec![
            RegionDefinition::new("abu-dhabi", "Abu Dhabi", 5).unwrap(),
            RegionDefinition::new("dubai", "Dubai", 5).unwrap(),
        ])
        .unwrap()
    }

    fn no_images() -> HashMap<RegionId, ImageRef> {
        HashMap::new()
    }

    #[test]
    fn counts_stamps_per_region_in_catalog_order() {
        let record = StampRecord::from_json(r#"{"abu-dhabi":["s1","s2"]}"#).unwrap();
        let (views, aggregate) = build_progress(&two_regions(), Some(&record), &no_images(), false);

        let counts: Vec<(&str, u32)> = views
            .iter()
            .map(|view| (view.id().as_str(), view.collected_count))
            .collect();
        assert_eq!(counts, [("abu-dhabi", 2), ("dubai", 0)]);
        assert_eq!(
            aggregate,
            AggregateProgress {
                total_collected: 2,
                total_possible: 10,
                percentage: 20,
            }
        );
    }

    #[test]
    fn restricted_mode_reads_zero() {
        let record = StampRecord::from_json(r#"{"abu-dhabi":["s1","s2"]}"#).unwrap();
        let (views, aggregate) = build_progress(&two_regions(), Some(&record), &no_images(), true);

        assert!(views.iter().all(|view| view.collected_count == 0));
        assert_eq!(
            aggregate,
            AggregateProgress {
                total_collected: 0,
                total_possible: 10,
                percentage: 0,
            }
        );
    }

    #[test]
    fn missing_record_matches_empty_record() {
        let catalog = RegionCatalog::explorer_passport();
        let images = RegionImages::bundled();
        let empty = StampRecord::from_json("{}").unwrap();

        let missing = build_progress(&catalog, None, &images, false);
        let explicit = build_progress(&catalog, Some(&empty), &images, false);
        assert_eq!(missing, explicit);
        assert_eq!(missing.1.total_possible, 35);
        assert_eq!(missing.1.percentage, 0);
    }

    #[test]
    fn ignores_unknown_regions_and_storage_order() {
        let record = StampRecord::from_json(
            r#"{"dubai":["a"],"atlantis":["x","y","z"],"abu-dhabi":["b","c","d"]}"#,
        )
        .unwrap();
        let (views, aggregate) = build_progress(&two_regions(), Some(&record), &no_images(), false);

        assert_eq!(views[0].id().as_str(), "abu-dhabi");
        assert_eq!(views[1].id().as_str(), "dubai");
        assert_eq!(aggregate.total_collected, 4);
        assert_eq!(aggregate.percentage, 40);
    }

    #[test]
    fn odd_entry_shapes_count_as_empty() {
        let catalog = two_regions();
        let odd = StampRecord::from_json(r#"{"abu-dhabi":null,"dubai":{"a":1},"atlantis":3}"#)
            .unwrap();
        let empty = StampRecord::from_json("{}").unwrap();

        assert_eq!(
            build_progress(&catalog, Some(&odd), &no_images(), false),
            build_progress(&catalog, Some(&empty), &no_images(), false)
        );
    }

    #[test]
    fn tolerates_over_collection() {
        let mut record = StampRecord::new();
        for n in 0..12 {
            record.push(RegionId::new("dubai"), StampId::new(format!("s{n}")));
        }
        let (views, aggregate) = build_progress(&two_regions(), Some(&record), &no_images(), false);

        assert_eq!(views[1].collected_count, 12);
        assert_eq!(aggregate.total_collected, 12);
        assert_eq!(aggregate.percentage, 100);
    }

    #[test]
    fn attaches_images_when_known() {
        let mut images = HashMap::new();
        images.insert(RegionId::new("dubai"), ImageRef::new("/dubai.jpg"));
        let (views, _) = build_progress(&two_regions(), None, &images, false);

        assert_eq!(views[0].image, None);
        assert_eq!(views[1].image, Some(ImageRef::new("/dubai.jpg")));
    }

    #[test]
    fn percentage_rounds_half_up_and_stays_in_range() {
        assert_eq!(completion_percentage(0, 0), 0);
        assert_eq!(completion_percentage(0, 35), 0);
        assert_eq!(completion_percentage(1, 35), 3);
        assert_eq!(completion_percentage(1, 200), 1);
        assert_eq!(completion_percentage(1, 201), 0);
        assert_eq!(completion_percentage(1, 8), 13);
        assert_eq!(completion_percentage(35, 35), 100);
        assert_eq!(completion_percentage(3, 0), 100);

        for possible in 0..=40 {
            for collected in 0..=60 {
                let pct = completion_percentage(collected, possible);
                assert!(pct <= 100, "{collected}/{possible} gave {pct}");
                if collected == 0 {
                    assert_eq!(pct, 0);
                }
            }
        }
    }
}
