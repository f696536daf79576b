use dioxus::prelude::*;
use dioxus_router::Link;
use passport_core::model::RegionId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::map_home_vm;

#[component]
fn BackHome() -> Element {
    rsx! {
        Link { class: "back-link", to: Route::Home {}, "Back to Explore" }
    }
}

/// Passport overview: every region with its stamp count.
#[component]
pub fn PassportView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let resource = use_resource(move || {
        let progress = progress.clone();
        async move { map_home_vm(&progress.load_home().await) }
    });

    rsx! {
        div { class: "page passport-page",
            BackHome {}
            h1 { "Explorer Passport" }
            match view_state_from_resource(&resource) {
                ViewState::Ready(vm) => rsx! {
                    p { class: "progress-value", "{vm.percentage_label} complete" }
                    ul { class: "region-list",
                        for card in vm.regions.iter().cloned() {
                            li { key: "{card.id}",
                                Link {
                                    to: Route::PassportRegion { region_id: card.id.as_str().to_string() },
                                    "{card.name}"
                                }
                                span { class: "stamp-count", " {card.count_label}" }
                            }
                        }
                    }
                },
                ViewState::Loading | ViewState::Idle => rsx! {
                    p { class: "loading", "Loading..." }
                },
            }
        }
    }
}

#[component]
pub fn RegionPassportView(region_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let id = RegionId::new(region_id);
    let resource = use_resource(use_reactive!(|(id,)| {
        let progress = progress.clone();
        async move {
            let vm = map_home_vm(&progress.load_home().await);
            vm.regions.into_iter().find(|card| card.id == id)
        }
    }));

    rsx! {
        div { class: "page region-page",
            BackHome {}
            match view_state_from_resource(&resource) {
                ViewState::Ready(Some(card)) => rsx! {
                    h1 { "{card.name}" }
                    p { class: "stamp-count", "{card.count_label} stamps" }
                },
                ViewState::Ready(None) => rsx! {
                    h1 { "Unknown region" }
                },
                ViewState::Loading | ViewState::Idle => rsx! {
                    p { class: "loading", "Loading..." }
                },
            }
        }
    }
}

#[component]
pub fn ScanView() -> Element {
    rsx! {
        div { class: "page scan-page",
            BackHome {}
            h1 { "Scan" }
            p { "Scan a landmark code to collect a stamp." }
        }
    }
}

#[component]
pub fn RewardsView() -> Element {
    rsx! {
        div { class: "page rewards-page",
            BackHome {}
            h1 { "Rewards" }
            p { "Spend your points on partner offers." }
        }
    }
}

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let session = use_resource(move || {
        let progress = progress.clone();
        async move {
            let session = progress.session().await;
            let name = session.display_name().unwrap_or("Guest explorer").to_string();
            (name, session.user_email().map(str::to_string))
        }
    });

    rsx! {
        div { class: "page profile-page",
            BackHome {}
            h1 { "Profile" }
            match view_state_from_resource(&session) {
                ViewState::Ready((name, email)) => rsx! {
                    p { "{name}" }
                    if let Some(email) = email {
                        p { class: "muted", "{email}" }
                    }
                },
                ViewState::Loading | ViewState::Idle => rsx! {
                    p { class: "loading", "Loading..." }
                },
            }
        }
    }
}
