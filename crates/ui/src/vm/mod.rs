mod home_vm;

pub use home_vm::{HomeVm, RegionCardVm, map_home_vm, map_region_card};
