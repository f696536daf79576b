#![forbid(unsafe_code)]

pub mod model;
pub mod navigation;
pub mod progress;
pub mod tips;

pub use navigation::Destination;
pub use progress::{AggregateProgress, DerivedRegionView, build_progress, completion_percentage};
pub use tips::{EXPLORER_TIPS, TIP_ROTATION_PERIOD, TipRotator};
