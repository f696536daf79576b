mod home;
mod placeholders;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use placeholders::{PassportView, ProfileView, RegionPassportView, RewardsView, ScanView};
pub use state::{ViewState, view_state_from_resource};
