//! Overview panel controller
//!
//! Owns every piece of interactive state on the overview section: audience
//! tab, modal visibility, the animated headline metrics, the notification
//! list, the online flag, the wall clock, and the simulated refresh. All
//! mutation happens on the UI thread; periodic behavior is driven by
//! `on_tick`, which the event loop calls at its tick rate. `mount` arms the
//! panel's logical timers and `unmount` cancels them on every path, so a
//! tick after unmount can never touch freed state.

pub mod view;

use std::time::{Duration, Instant};

use arboard::Clipboard;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::core::command::DashboardCommand;
use crate::core::shortcut::ShortcutDispatcher;
use crate::core::toast::{ToastKind, ToastQueue};
use crate::domain::model::{
    AgeStat, AnimationTarget, ExportFormat, LocationStat, MetricSnapshot, Platform,
};
use crate::domain::repository::AudienceRepository;
use crate::modules::export::{self, FileSaver};

/// Which audience breakdown the profile card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudienceTab {
    #[default]
    Locations,
    Age,
}

impl AudienceTab {
    pub fn title(&self) -> &'static str {
        match self {
            AudienceTab::Locations => "Top Locations",
            AudienceTab::Age => "Age Range",
        }
    }
}

/// Modal visibility. A three-state enum: the two modals are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    AddAccount,
    Help,
}

pub use crate::domain::model::NotificationKind;

/// A longer-lived entry in the notifications bar, dismissed explicitly
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Local>,
}

/// Action tokens the panel's shortcut table resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewShortcut {
    Refresh,
    OpenAddAccount,
    CloseModals,
    LocationsTab,
    AgeTab,
    OpenHelp,
    ExportJson,
    ExportCsv,
    CopyMetrics,
    ToggleOnline,
}

/// In-flight metric animation
#[derive(Debug)]
struct MetricAnimation {
    target: AnimationTarget,
    followers: f64,
    reach: f64,
    engagement: f64,
    step_followers: f64,
    step_reach: f64,
    step_engagement: f64,
    interval: Duration,
    next_step_at: Instant,
}

impl MetricAnimation {
    fn start(target: AnimationTarget, duration: Duration, steps: u32, now: Instant) -> Self {
        let steps = steps.max(1);
        let interval = duration / steps;
        Self {
            target,
            followers: 0.0,
            reach: 0.0,
            engagement: 0.0,
            step_followers: target.followers as f64 / steps as f64,
            step_reach: target.reach as f64 / steps as f64,
            step_engagement: target.engagement / steps as f64,
            interval,
            next_step_at: now + interval,
        }
    }

    /// Advance one step. Returns true once the animation has finished and
    /// the running values have been snapped exactly onto the target.
    fn step(&mut self) -> bool {
        self.followers += self.step_followers;
        self.reach += self.step_reach;
        self.engagement += self.step_engagement;
        let done = self.followers >= self.target.followers as f64
            && self.reach >= self.target.reach as f64
            && self.engagement >= self.target.engagement;
        if done {
            self.followers = self.target.followers as f64;
            self.reach = self.target.reach as f64;
            self.engagement = self.target.engagement;
        }
        done
    }

    fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            followers: self.followers.floor() as u64,
            reach: self.reach.floor() as u64,
            engagement: self.engagement.min(self.target.engagement),
        }
    }
}

pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_ANIMATION_STEPS: u32 = 60;
pub const DEFAULT_REFRESH_LATENCY: Duration = Duration::from_millis(1500);

/// The overview panel controller
pub struct OverviewPanel {
    mounted: bool,
    pub handle: String,
    pub active_tab: AudienceTab,
    pub modal: Modal,
    pub add_account_platform: Platform,
    pub add_account_input: String,
    pub refreshing: bool,
    refresh_done_at: Option<Instant>,
    refresh_latency: Duration,
    pub online: bool,
    pub current_time: DateTime<Local>,
    next_clock_at: Option<Instant>,
    pub metrics: MetricSnapshot,
    animation: Option<MetricAnimation>,
    animation_duration: Duration,
    animation_steps: u32,
    pub notifications: Vec<NotificationRecord>,
    next_notification_id: u64,
    pub toasts: ToastQueue,
    shortcuts: ShortcutDispatcher<OverviewShortcut>,
    targets: AnimationTarget,
    locations: Vec<LocationStat>,
    age_groups: Vec<AgeStat>,
    pub calendar: [[u8; 7]; 5],
}

impl OverviewPanel {
    pub fn new(audience: &dyn AudienceRepository) -> Self {
        let mut shortcuts = ShortcutDispatcher::new();
        shortcuts.register("ctrl+r", OverviewShortcut::Refresh);
        shortcuts.register("ctrl+shift+a", OverviewShortcut::OpenAddAccount);
        shortcuts.register("escape", OverviewShortcut::CloseModals);
        shortcuts.register("1", OverviewShortcut::LocationsTab);
        shortcuts.register("2", OverviewShortcut::AgeTab);
        shortcuts.register("ctrl+h", OverviewShortcut::OpenHelp);
        shortcuts.register("j", OverviewShortcut::ExportJson);
        shortcuts.register("c", OverviewShortcut::ExportCsv);
        shortcuts.register("y", OverviewShortcut::CopyMetrics);
        shortcuts.register("o", OverviewShortcut::ToggleOnline);

        Self {
            mounted: false,
            handle: crate::domain::fixtures::PRIMARY_HANDLE.to_string(),
            active_tab: AudienceTab::default(),
            modal: Modal::default(),
            add_account_platform: Platform::ALL[0],
            add_account_input: String::new(),
            refreshing: false,
            refresh_done_at: None,
            refresh_latency: DEFAULT_REFRESH_LATENCY,
            online: true,
            current_time: Local::now(),
            next_clock_at: None,
            metrics: MetricSnapshot::ZERO,
            animation: None,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            animation_steps: DEFAULT_ANIMATION_STEPS,
            notifications: Vec::new(),
            next_notification_id: 1,
            toasts: ToastQueue::default(),
            shortcuts,
            targets: audience.metric_targets(),
            locations: audience.locations(),
            age_groups: audience.age_groups(),
            calendar: audience.activity_calendar(),
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = handle.into();
        self
    }

    pub fn with_timings(
        mut self,
        refresh_latency: Duration,
        animation_duration: Duration,
        animation_steps: u32,
        toast_ttl: Duration,
    ) -> Self {
        self.refresh_latency = refresh_latency;
        self.animation_duration = animation_duration;
        self.animation_steps = animation_steps.max(1);
        self.toasts = ToastQueue::new(toast_ttl);
        self
    }

    /// Arm the panel: seed the notification bar and start the metric
    /// animation and clock. Idempotent while mounted.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        for (message, kind) in crate::domain::fixtures::seed_notifications() {
            self.push_notification(message, kind);
        }
        let targets = self.targets;
        self.start_metric_animation(targets, self.animation_duration, self.animation_steps, now);
        self.next_clock_at = Some(now + Duration::from_secs(1));
        self.current_time = Local::now();
    }

    /// Cancel every periodic behavior. After this, `on_tick` is a no-op
    /// until the panel is mounted again.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.animation = None;
        self.next_clock_at = None;
        self.refresh_done_at = None;
        self.refreshing = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Begin interpolating the headline metrics from zero to `target`.
    /// Each step adds `target/steps`; the first step where all three
    /// running values have reached their targets snaps exactly onto
    /// `target` and stops the timer.
    pub fn start_metric_animation(
        &mut self,
        target: AnimationTarget,
        duration: Duration,
        steps: u32,
        now: Instant,
    ) {
        self.metrics = MetricSnapshot::ZERO;
        self.animation = Some(MetricAnimation::start(target, duration, steps, now));
    }

    /// Periodic driver, called from the event loop. Advances the clock,
    /// the animation, a pending refresh, and the toast expiry sweep.
    pub fn on_tick(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }

        if let Some(due) = self.next_clock_at {
            if now >= due {
                self.current_time = Local::now();
                self.next_clock_at = Some(due + Duration::from_secs(1));
            }
        }

        if let Some(animation) = self.animation.as_mut() {
            let mut finished = false;
            while now >= animation.next_step_at {
                animation.next_step_at += animation.interval;
                if animation.step() {
                    finished = true;
                    break;
                }
            }
            self.metrics = animation.snapshot();
            if finished {
                self.animation = None;
            }
        }

        if let Some(done_at) = self.refresh_done_at {
            if now >= done_at {
                self.refresh_done_at = None;
                self.refreshing = false;
                self.toasts.push(
                    "Dashboard data refreshed successfully!",
                    ToastKind::Success,
                    now,
                );
            }
        }

        self.toasts.tick(now);
    }

    /// Host connectivity signal
    pub fn on_connectivity_change(&mut self, online: bool) {
        self.online = online;
    }

    pub fn set_active_tab(&mut self, tab: AudienceTab) {
        self.active_tab = tab;
    }

    /// Simulated data refresh. Non-reentrant: while a refresh is pending,
    /// further requests are dropped without side effects.
    pub fn request_refresh(&mut self, now: Instant) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;
        self.refresh_done_at = Some(now + self.refresh_latency);
        self.toasts
            .push("Refreshing dashboard data...", ToastKind::Info, now);
    }

    /// Remove a notification; a missing id is a silent success
    pub fn dismiss_notification(&mut self, id: u64, now: Instant) {
        let before = self.notifications.len();
        self.notifications.retain(|record| record.id != id);
        if self.notifications.len() != before {
            self.toasts
                .push("Notification dismissed", ToastKind::Info, now);
        }
    }

    pub fn push_notification(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(NotificationRecord {
            id,
            message: message.into(),
            kind,
            created_at: self.current_time,
        });
        id
    }

    /// Activity-calendar cell activation appends a notification
    pub fn on_calendar_click(&mut self, day_index: usize) {
        let level = self
            .calendar
            .iter()
            .flatten()
            .nth(day_index)
            .copied()
            .unwrap_or(0);
        self.push_notification(
            format!("Day {}: {} posts", day_index + 1, level),
            NotificationKind::Info,
        );
    }

    /// Serialize the current snapshot plus the audience fixtures and hand
    /// the payload to the save collaborator. A save failure surfaces as an
    /// error toast; the panel state is unaffected either way.
    pub fn export_data(&mut self, format: ExportFormat, saver: &mut dyn FileSaver, now: Instant) {
        let exported_at = self.current_time;
        let payload = export::overview_payload(
            format,
            &self.metrics,
            &self.locations,
            &self.age_groups,
            exported_at,
        );
        let filename = export::overview_filename(format, exported_at);
        match saver.save(&filename, format.mime_type(), payload.as_bytes()) {
            Ok(()) => {
                self.toasts.push(
                    format!("Data exported as {}", format.title()),
                    ToastKind::Success,
                    now,
                );
            }
            Err(err) => {
                self.toasts.push(format!("Export failed: {err}"), ToastKind::Error, now);
            }
        }
    }

    /// Open the add-account form with a fresh platform selection and an
    /// empty handle
    pub fn open_add_account_modal(&mut self) {
        self.modal = Modal::AddAccount;
        self.add_account_platform = Platform::ALL[0];
        self.add_account_input.clear();
    }

    /// Key handling while the add-account modal is open. Digits pick the
    /// platform, printable characters build the handle, Enter submits.
    /// Returns the connect command once the form is complete.
    pub fn on_modal_key(&mut self, key: &KeyEvent, now: Instant) -> Option<DashboardCommand> {
        match key.code {
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.add_account_platform = Platform::ALL[index];
                None
            }
            KeyCode::Char(c) => {
                self.add_account_input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.add_account_input.pop();
                None
            }
            KeyCode::Enter => {
                if self.add_account_input.is_empty() {
                    return None;
                }
                let platform = self.add_account_platform;
                let username = std::mem::take(&mut self.add_account_input);
                self.close_modals();
                self.toasts.push(
                    format!("Connecting {} account @{username}...", platform.title()),
                    ToastKind::Info,
                    now,
                );
                Some(DashboardCommand::ConnectAccount { platform, username })
            }
            _ => None,
        }
    }

    pub fn open_help_modal(&mut self) {
        self.modal = Modal::Help;
    }

    /// Close whichever modal is open; idempotent
    pub fn close_modals(&mut self) {
        self.modal = Modal::None;
    }

    pub fn locations(&self) -> &[LocationStat] {
        &self.locations
    }

    pub fn age_groups(&self) -> &[AgeStat] {
        &self.age_groups
    }

    /// Resolve a key press against the panel's shortcut table
    pub fn dispatch(&self, key: &KeyEvent) -> Option<OverviewShortcut> {
        self.shortcuts.dispatch(key)
    }

    /// Apply a resolved shortcut. Export and clipboard shortcuts need the
    /// save collaborator, so they are applied here where both are in
    /// scope.
    pub fn apply_shortcut(
        &mut self,
        shortcut: OverviewShortcut,
        saver: &mut dyn FileSaver,
        now: Instant,
    ) {
        match shortcut {
            OverviewShortcut::Refresh => self.request_refresh(now),
            OverviewShortcut::OpenAddAccount => self.open_add_account_modal(),
            OverviewShortcut::CloseModals => self.close_modals(),
            OverviewShortcut::LocationsTab => self.set_active_tab(AudienceTab::Locations),
            OverviewShortcut::AgeTab => self.set_active_tab(AudienceTab::Age),
            OverviewShortcut::OpenHelp => self.open_help_modal(),
            OverviewShortcut::ExportJson => self.export_data(ExportFormat::Json, saver, now),
            OverviewShortcut::ExportCsv => self.export_data(ExportFormat::Csv, saver, now),
            OverviewShortcut::CopyMetrics => self.copy_metrics_to_clipboard(now),
            OverviewShortcut::ToggleOnline => {
                let online = !self.online;
                self.on_connectivity_change(online);
            }
        }
    }

    fn copy_metrics_to_clipboard(&mut self, now: Instant) {
        let text = format!(
            "followers={} reach={} engagement={}%",
            self.metrics.followers, self.metrics.reach, self.metrics.engagement
        );
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(text.as_str()).is_ok() {
                    self.toasts
                        .push(format!("Copied: {text}"), ToastKind::Info, now);
                } else {
                    self.toasts
                        .push("Failed to copy to clipboard", ToastKind::Error, now);
                }
            }
            Err(_) => {
                self.toasts
                    .push("Clipboard not available", ToastKind::Error, now);
            }
        }
    }
}
