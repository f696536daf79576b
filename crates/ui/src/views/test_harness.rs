use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, PassportService, ProgressEvents, ProgressService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, PassportView, ProfileView, RegionPassportView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    tip_rotation_period: Duration,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn events(&self) -> ProgressEvents {
        self.services.events()
    }

    fn tip_rotation_period(&self) -> Duration {
        self.tip_rotation_period
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Passport,
    Region(String),
    Profile,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Passport => rsx! { PassportView {} },
        ViewKind::Region(region_id) => rsx! { RegionPassportView { region_id } },
        ViewKind::Profile => rsx! { ProfileView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub passport: Arc<PassportService>,
    pub events: ProgressEvents,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until `needle` shows up or the attempts run out.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = AppServices::new(&Storage::in_memory());
    let passport = services.passport();
    let events = services.events();
    let app = Arc::new(TestApp {
        services,
        tip_rotation_period: Duration::from_secs(3600),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        passport,
        events,
    }
}
