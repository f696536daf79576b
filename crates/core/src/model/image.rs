use std::collections::HashMap;

use phf::phf_map;

use crate::model::ids::RegionId;

/// Shown when a region image reference fails to load.
pub const FALLBACK_REGION_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1466442929976-97f336a657be?auto=format&fit=crop&w=800&q=80";

static BUNDLED_REGION_IMAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "abu-dhabi" => "/assets/regions/abu-dhabi.jpg",
    "dubai" => "/assets/regions/dubai.jpg",
    "sharjah" => "/assets/regions/sharjah.jpg",
    "ajman" => "/assets/regions/ajman.jpg",
    "umm-al-quwain" => "/assets/regions/umm-al-quwain.jpg",
    "fujairah" => "/assets/regions/fujairah.jpg",
    "ras-al-khaimah" => "/assets/regions/ras-al-khaimah.jpg",
};

/// Location of a region picture (asset path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolves the picture for a region, if one exists.
pub trait ImageLookup {
    fn image_for(&self, id: &RegionId) -> Option<ImageRef>;
}

/// Static id → image table shipped with the app.
#[derive(Debug, Clone, Copy)]
pub struct RegionImages {
    table: &'static phf::Map<&'static str, &'static str>,
}

impl RegionImages {
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            table: &BUNDLED_REGION_IMAGES,
        }
    }
}

impl Default for RegionImages {
    fn default() -> Self {
        Self::bundled()
    }
}

impl ImageLookup for RegionImages {
    fn image_for(&self, id: &RegionId) -> Option<ImageRef> {
        self.table.get(id.as_str()).map(|path| ImageRef::new(*path))
    }
}

impl ImageLookup for HashMap<RegionId, ImageRef> {
    fn image_for(&self, id: &RegionId) -> Option<ImageRef> {
        self.get(id).cloned()
    }
}
