mod ids;
mod image;
mod region;
mod session;
mod stamps;

pub use ids::{RegionId, StampId};
pub use image::{FALLBACK_REGION_IMAGE_URL, ImageLookup, ImageRef, RegionImages};
pub use region::{DEFAULT_STAMP_SLOTS, RegionCatalog, RegionDefinition, RegionError};
pub use session::{
    CURRENT_USER_KEY, DEMO_DISPLAY_NAME, POINTS_KEY, STAMPS_KEY, SessionContext, USER_NAME_KEY,
};
pub use stamps::{StampRecord, StampRecordError};
