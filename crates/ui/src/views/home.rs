use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use passport_core::model::FALLBACK_REGION_IMAGE_URL;
use passport_core::{Destination, TipRotator};
use services::HOME_SIGNALS;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{HomeVm, RegionCardVm, map_home_vm};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let events = ctx.events();
    let tip_period = ctx.tip_rotation_period().max(Duration::from_millis(1));

    let mut reloads = use_signal(|| 0_u64);
    let mut tips = use_signal(TipRotator::explorer);
    let mut active_region = use_signal(|| 0_usize);

    let resource = use_resource(move || {
        let progress = progress.clone();
        let generation = reloads();
        async move {
            tracing::debug!(generation, "reloading home progress");
            map_home_vm(&progress.load_home().await)
        }
    });

    // Both futures are owned by this scope and cancelled when it unmounts,
    // which drops the subscription and stops the rotation.
    use_future(move || {
        let events = events.clone();
        async move {
            let mut subscription = events.subscribe(&HOME_SIGNALS);
            while subscription.recv().await.is_some() {
                reloads += 1;
            }
        }
    });
    use_future(move || async move {
        loop {
            tokio::time::sleep(tip_period).await;
            tips.write().advance();
        }
    });

    let state = view_state_from_resource(&resource);
    let tip = tips.read().current().unwrap_or_default().to_string();

    rsx! {
        div { class: "page home-page",
            match state {
                ViewState::Ready(vm) => rsx! {
                    HomeHeader { vm: vm.clone() }
                    TipBanner { tip: tip.clone() }
                    PassportPreview { vm: vm.clone() }
                    section { class: "region-carousel",
                        h2 { class: "section-title", "Explore Emirates" }
                        div { class: "region-track",
                            for (index, card) in vm.regions.iter().cloned().enumerate() {
                                RegionCard {
                                    key: "{index}",
                                    card,
                                    active: active_region() == index,
                                    on_select: move |()| active_region.set(index),
                                }
                            }
                        }
                    }
                },
                ViewState::Loading | ViewState::Idle => rsx! {
                    TipBanner { tip: tip.clone() }
                    p { class: "loading", "Loading..." }
                },
            }
            BottomNav {}
        }
    }
}

#[component]
fn HomeHeader(vm: HomeVm) -> Element {
    rsx! {
        header { class: "home-header",
            span { class: "brand", "MASAR" }
            div { class: "header-stats",
                if let Some(points) = vm.points_label.as_ref() {
                    span { class: "points-pill", "{points}" }
                }
                span { class: "stamps-count", "{vm.stamps_label}" }
            }
        }
    }
}

#[component]
fn TipBanner(tip: String) -> Element {
    rsx! {
        div { class: "tip-banner",
            p { class: "tip-text", "{tip}" }
        }
    }
}

#[component]
fn PassportPreview(vm: HomeVm) -> Element {
    let navigator = use_navigator();
    let open_passport = move |_: MouseEvent| {
        let _ = navigator.push(Route::from(Destination::PassportOverview));
    };

    rsx! {
        section { class: "passport-preview",
            h2 { class: "section-title", "Your Explorer Passport" }
            div { class: "passport-cover", onclick: open_passport,
                p { "MASAR EXPLORER PASSPORT" }
            }
            div { class: "passport-progress",
                div { class: "progress-row",
                    span { "Progress" }
                    span { class: "progress-value", "{vm.percentage_label}" }
                }
                div { class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: "width: {vm.percentage}%",
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: open_passport,
                    "View"
                }
            }
        }
    }
}

#[component]
fn RegionCard(card: RegionCardVm, active: bool, on_select: EventHandler<()>) -> Element {
    let navigator = use_navigator();
    let mut image_src = use_signal(|| card.image_src.clone());
    let region_id = card.id.clone();
    let card_class = if active {
        "region-card region-card--active"
    } else {
        "region-card"
    };

    rsx! {
        div { class: card_class, onclick: move |_| on_select.call(()),
            div { class: "region-media",
                if let Some(src) = image_src() {
                    img {
                        src: "{src}",
                        alt: "{card.name}",
                        onerror: move |_| image_src.set(Some(FALLBACK_REGION_IMAGE_URL.to_string())),
                    }
                }
                div { class: "region-overlay",
                    h3 { "{card.name}" }
                    div { class: "stamp-dots",
                        for (slot, filled) in card.dots.iter().enumerate() {
                            span {
                                key: "{slot}",
                                class: if *filled { "stamp-dot stamp-dot--filled" } else { "stamp-dot" },
                            }
                        }
                    }
                    span { class: "stamp-count", "{card.count_label}" }
                }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |event: MouseEvent| {
                    event.stop_propagation();
                    let _ = navigator.push(Route::from(Destination::RegionDetail(region_id.clone())));
                },
                "View Stamps"
            }
        }
    }
}

#[component]
fn BottomNav() -> Element {
    let navigator = use_navigator();
    let items = [
        ("Explore", Destination::Explore),
        ("Scan", Destination::Scan),
        ("Rewards", Destination::Rewards),
        ("Profile", Destination::Profile),
    ];

    rsx! {
        nav { class: "bottom-nav",
            for (label, destination) in items {
                button {
                    key: "{label}",
                    class: "nav-item",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::from(destination.clone()));
                    },
                    "{label}"
                }
            }
        }
    }
}
