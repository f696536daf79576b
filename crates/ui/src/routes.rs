use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use passport_core::Destination;

use crate::views::{
    HomeView, PassportView, ProfileView, RegionPassportView, RewardsView, ScanView,
};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/passport", PassportView)] Passport {},
        #[route("/passport/:region_id", RegionPassportView)] PassportRegion { region_id: String },
        #[route("/scan", ScanView)] Scan {},
        #[route("/rewards", RewardsView)] Rewards {},
        #[route("/profile", ProfileView)] Profile {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Explore => Route::Home {},
            Destination::PassportOverview => Route::Passport {},
            Destination::RegionDetail(id) => Route::PassportRegion {
                region_id: id.as_str().to_string(),
            },
            Destination::Scan => Route::Scan {},
            Destination::Rewards => Route::Rewards {},
            Destination::Profile => Route::Profile {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
