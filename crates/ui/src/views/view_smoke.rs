use passport_core::model::{RegionId, SessionContext, StampId};

use super::test_harness::{ViewKind, setup_view_harness};

async fn seed_sara(harness: &super::test_harness::ViewHarness) -> SessionContext {
    let session = harness
        .passport
        .sign_in("sara@example.com", Some("Sara"))
        .await
        .expect("sign in");
    for stamp in ["museum", "creek"] {
        harness
            .passport
            .record_stamp(&session, &RegionId::new("dubai"), StampId::new(stamp))
            .await
            .expect("record stamp");
    }
    harness
        .passport
        .add_points(&session, 150)
        .await
        .expect("add points");
    session
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_progress_and_points() {
    let mut harness = setup_view_harness(ViewKind::Home);
    seed_sara(&harness).await;

    harness.rebuild();
    let html = harness.drive_until("2/35 Stamps").await;
    assert!(html.contains("2/35 Stamps"), "missing stamp total in {html}");
    assert!(html.contains("6%"), "missing percentage in {html}");
    assert!(html.contains("150 Points"), "missing points in {html}");
    assert!(html.contains("2/5"), "missing dubai count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_every_region() {
    let mut harness = setup_view_harness(ViewKind::Home);

    harness.rebuild();
    let html = harness.drive_until("0/35 Stamps").await;
    for name in [
        "Abu Dhabi",
        "Dubai",
        "Sharjah",
        "Ajman",
        "Umm Al Quwain",
        "Fujairah",
        "Ras Al Khaimah",
    ] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(html.contains("Visit Al Ain Zoo"), "missing tip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_hides_points_for_demo_user() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let session = harness
        .passport
        .sign_in("demo@example.com", Some("Demo User"))
        .await
        .expect("sign in");
    harness
        .passport
        .add_points(&session, 500)
        .await
        .expect("add points");

    harness.rebuild();
    let html = harness.drive_until("0/35 Stamps").await;
    assert!(html.contains("0/35 Stamps"), "missing empty total in {html}");
    assert!(!html.contains("Points"), "points shown for demo user in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_reloads_when_a_stamp_is_recorded() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.drive_until("0/35 Stamps").await;
    assert!(html.contains("0/35 Stamps"), "missing initial total in {html}");
    for _ in 0..20 {
        if harness.events.subscriber_count() > 0 {
            break;
        }
        harness.drive_async().await;
    }
    assert_eq!(harness.events.subscriber_count(), 1);

    harness
        .passport
        .record_stamp(
            &SessionContext::anonymous(),
            &RegionId::new("fujairah"),
            StampId::new("fort"),
        )
        .await
        .expect("record stamp");

    let html = harness.drive_until("1/35 Stamps").await;
    assert!(html.contains("1/35 Stamps"), "home did not reload: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn region_view_smoke_renders_count() {
    let mut harness = setup_view_harness(ViewKind::Region("dubai".to_string()));
    seed_sara(&harness).await;

    harness.rebuild();
    let html = harness.drive_until("2/5 stamps").await;
    assert!(html.contains("Dubai"), "missing region name in {html}");
    assert!(html.contains("2/5 stamps"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn region_view_smoke_handles_unknown_region() {
    let mut harness = setup_view_harness(ViewKind::Region("atlantis".to_string()));
    harness.rebuild();
    let html = harness.drive_until("Unknown region").await;
    assert!(html.contains("Unknown region"), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn passport_and_profile_views_smoke() {
    let mut passport = setup_view_harness(ViewKind::Passport);
    seed_sara(&passport).await;
    passport.rebuild();
    let html = passport.drive_until("6% complete").await;
    assert!(html.contains("6% complete"), "missing overview in {html}");
    assert!(html.contains("Ras Al Khaimah"), "missing region list in {html}");

    let mut profile = setup_view_harness(ViewKind::Profile);
    seed_sara(&profile).await;
    profile.rebuild();
    let html = profile.drive_until("Sara").await;
    assert!(html.contains("sara@example.com"), "missing email in {html}");
}
