//! Behavior of the overview panel controller, driven tick by tick

use std::time::{Duration, Instant};

use chirp::core::toast::ToastKind;
use chirp::domain::model::{AnimationTarget, ExportFormat};
use chirp::domain::repository::DemoRepository;
use chirp::modules::export::{FileSaver, SaveError};
use chirp::modules::overview::{
    AudienceTab, Modal, NotificationKind, OverviewPanel, OverviewShortcut,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Saver that keeps payloads in memory
#[derive(Default)]
struct MemorySaver {
    saved: Vec<(String, String, Vec<u8>)>,
}

impl FileSaver for MemorySaver {
    fn save(&mut self, filename: &str, mime_type: &str, payload: &[u8]) -> Result<(), SaveError> {
        self.saved
            .push((filename.to_string(), mime_type.to_string(), payload.to_vec()));
        Ok(())
    }
}

/// Saver that always fails
struct FailingSaver;

impl FileSaver for FailingSaver {
    fn save(&mut self, filename: &str, _mime_type: &str, _payload: &[u8]) -> Result<(), SaveError> {
        Err(SaveError::Io {
            filename: filename.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }
}

fn mounted_panel(t0: Instant) -> OverviewPanel {
    let mut panel = OverviewPanel::new(&DemoRepository);
    panel.mount(t0);
    panel
}

#[test]
fn mount_seeds_the_notification_bar() {
    let panel = mounted_panel(Instant::now());
    let seeded: Vec<(&str, NotificationKind)> = panel
        .notifications
        .iter()
        .map(|n| (n.message.as_str(), n.kind))
        .collect();
    assert_eq!(
        seeded,
        vec![
            (
                "New follower milestone reached!",
                NotificationKind::Success
            ),
            ("Post scheduled for 2:00 PM", NotificationKind::Info),
        ]
    );
}

#[test]
fn metrics_start_at_zero_and_climb() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);
    assert_eq!(panel.metrics.followers, 0);
    assert_eq!(panel.metrics.reach, 0);

    panel.on_tick(t0 + Duration::from_millis(1000));
    assert!(panel.metrics.followers > 0);
    assert!(panel.metrics.followers < 278_534);
    assert!(panel.metrics.reach > 0);
    assert!(panel.metrics.reach < 5_192_879);
}

#[test]
fn animation_lands_exactly_on_targets() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);

    panel.on_tick(t0 + Duration::from_millis(2100));
    assert_eq!(panel.metrics.followers, 278_534);
    assert_eq!(panel.metrics.reach, 5_192_879);
    assert_eq!(panel.metrics.engagement, 98.2);

    // Further ticks never overshoot
    panel.on_tick(t0 + Duration::from_millis(10_000));
    assert_eq!(panel.metrics.followers, 278_534);
    assert_eq!(panel.metrics.engagement, 98.2);
}

#[test]
fn animation_snaps_on_the_step_where_all_targets_are_reached() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);
    panel.start_metric_animation(
        AnimationTarget {
            followers: 100,
            reach: 1000,
            engagement: 50.0,
        },
        Duration::from_millis(1000),
        10,
        t0,
    );

    // After 9 of 10 steps nothing has reached its target yet
    panel.on_tick(t0 + Duration::from_millis(950));
    assert_eq!(panel.metrics.followers, 90);
    assert_eq!(panel.metrics.reach, 900);

    // The tenth step reaches all three targets and snaps exactly
    panel.on_tick(t0 + Duration::from_millis(1000));
    assert_eq!(panel.metrics.followers, 100);
    assert_eq!(panel.metrics.reach, 1000);
    assert_eq!(panel.metrics.engagement, 50.0);
}

#[test]
fn refresh_is_not_reentrant() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);

    panel.request_refresh(t0);
    panel.request_refresh(t0 + Duration::from_millis(100));
    panel.request_refresh(t0 + Duration::from_millis(200));

    let announced = panel
        .toasts
        .records()
        .iter()
        .filter(|r| r.description == "Refreshing dashboard data...")
        .count();
    assert_eq!(announced, 1);
    assert!(panel.refreshing);

    // The dropped requests did not move the first request's deadline
    panel.on_tick(t0 + Duration::from_millis(1499));
    assert!(panel.refreshing);
    panel.on_tick(t0 + Duration::from_millis(1500));
    assert!(!panel.refreshing);
}

#[test]
fn refresh_completes_after_latency_with_a_success_toast() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);
    panel.request_refresh(t0);

    panel.on_tick(t0 + Duration::from_millis(1400));
    assert!(panel.refreshing);

    panel.on_tick(t0 + Duration::from_millis(1500));
    assert!(!panel.refreshing);
    assert!(panel
        .toasts
        .records()
        .iter()
        .any(|r| r.description == "Dashboard data refreshed successfully!"
            && r.kind == ToastKind::Success));

    // A fresh request is accepted once the previous one completed
    panel.request_refresh(t0 + Duration::from_millis(1600));
    assert!(panel.refreshing);
}

#[test]
fn unmount_cancels_pending_refresh_and_animation() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);
    panel.request_refresh(t0);
    let mid_metrics = {
        panel.on_tick(t0 + Duration::from_millis(500));
        panel.metrics
    };

    panel.unmount();
    panel.on_tick(t0 + Duration::from_millis(10_000));

    assert!(!panel.refreshing);
    assert_eq!(panel.metrics, mid_metrics);
    assert!(!panel
        .toasts
        .records()
        .iter()
        .any(|r| r.description == "Dashboard data refreshed successfully!"));
}

#[test]
fn modals_are_mutually_exclusive() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);

    panel.open_add_account_modal();
    assert_eq!(panel.modal, Modal::AddAccount);

    panel.open_help_modal();
    assert_eq!(panel.modal, Modal::Help);

    panel.close_modals();
    assert_eq!(panel.modal, Modal::None);
    // Closing again is harmless
    panel.close_modals();
    assert_eq!(panel.modal, Modal::None);
}

#[test]
fn dismissing_notifications_is_idempotent() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);
    let id = panel.notifications[0].id;

    panel.dismiss_notification(id, t0);
    assert_eq!(panel.notifications.len(), 1);

    // Same id again: silent success, no second toast
    let toasts_before = panel.toasts.len();
    panel.dismiss_notification(id, t0);
    assert_eq!(panel.notifications.len(), 1);
    assert_eq!(panel.toasts.len(), toasts_before);
}

#[test]
fn shortcuts_resolve_to_the_documented_actions() {
    let panel = mounted_panel(Instant::now());

    let cases = [
        (
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            OverviewShortcut::Refresh,
        ),
        (
            KeyEvent::new(
                KeyCode::Char('a'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            ),
            OverviewShortcut::OpenAddAccount,
        ),
        (
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            OverviewShortcut::CloseModals,
        ),
        (
            KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE),
            OverviewShortcut::LocationsTab,
        ),
        (
            KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE),
            OverviewShortcut::AgeTab,
        ),
        (
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL),
            OverviewShortcut::OpenHelp,
        ),
    ];
    for (key, expected) in cases {
        assert_eq!(panel.dispatch(&key), Some(expected), "chord {key:?}");
    }

    // An unbound key resolves to nothing
    let unbound = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
    assert_eq!(panel.dispatch(&unbound), None);
}

#[test]
fn tab_shortcuts_switch_the_audience_breakdown() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);
    let mut saver = MemorySaver::default();

    assert_eq!(panel.active_tab, AudienceTab::Locations);
    panel.apply_shortcut(OverviewShortcut::AgeTab, &mut saver, t0);
    assert_eq!(panel.active_tab, AudienceTab::Age);
    panel.apply_shortcut(OverviewShortcut::LocationsTab, &mut saver, t0);
    assert_eq!(panel.active_tab, AudienceTab::Locations);
}

#[test]
fn json_export_writes_the_wire_shape() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);
    panel.on_tick(t0 + Duration::from_millis(2100));

    let mut saver = MemorySaver::default();
    panel.export_data(ExportFormat::Json, &mut saver, t0);

    let (filename, mime, payload) = &saver.saved[0];
    assert!(filename.starts_with("overview-data-"));
    assert!(filename.ends_with(".json"));
    assert_eq!(mime, "application/json");

    let parsed: serde_json::Value = serde_json::from_slice(payload).unwrap();
    assert_eq!(parsed["followers"], 278_534);
    assert_eq!(parsed["reach"], 5_192_879);
    assert_eq!(parsed["engagement"], 98.2);
    assert_eq!(parsed["locations"][0]["country"], "United States");
    assert_eq!(parsed["ageGroups"][1]["range"], "25-34");
    assert!(parsed["exportedAt"].is_string());

    assert!(panel
        .toasts
        .records()
        .iter()
        .any(|r| r.description == "Data exported as JSON"));
}

#[test]
fn failed_export_surfaces_an_error_toast() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);
    let tab_before = panel.active_tab;

    panel.export_data(ExportFormat::Csv, &mut FailingSaver, t0);

    assert!(panel
        .toasts
        .records()
        .iter()
        .any(|r| r.kind == ToastKind::Error && r.description.starts_with("Export failed")));
    assert_eq!(panel.active_tab, tab_before);
    assert_eq!(panel.modal, Modal::None);
}

#[test]
fn notification_ids_are_never_reused() {
    let t0 = Instant::now();
    let mut panel = mounted_panel(t0);

    let first = panel.notifications[0].id;
    panel.dismiss_notification(first, t0);
    panel.on_calendar_click(0);
    panel.on_calendar_click(1);

    let mut ids: Vec<u64> = panel.notifications.iter().map(|n| n.id).collect();
    assert!(ids.iter().all(|id| *id != first));
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), panel.notifications.len());
}

#[test]
fn connectivity_signal_flips_the_online_flag() {
    let mut panel = mounted_panel(Instant::now());
    assert!(panel.online);
    panel.on_connectivity_change(false);
    assert!(!panel.online);
    panel.on_connectivity_change(true);
    assert!(panel.online);
}

#[test]
fn calendar_activation_appends_a_notification() {
    let mut panel = mounted_panel(Instant::now());
    let before = panel.notifications.len();
    panel.on_calendar_click(3);
    assert_eq!(panel.notifications.len(), before + 1);
    assert!(panel.notifications.last().unwrap().message.starts_with("Day 4:"));
}
