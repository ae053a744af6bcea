//! Application root
//!
//! Owns the section modules, the overview panel, and the cross-section
//! state (context, toast queue, responsive classifier). The event loop
//! feeds it key, resize, and tick events; everything else is internal.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::core::toast::{ToastKind, ToastQueue};
use crate::core::{Action, Context, Module};
use crate::domain::model::ExportFormat;
use crate::domain::repository::DemoRepository;
use crate::modules::export::{csv_export, DiskSaver};
use crate::modules::overview::{Modal, OverviewPanel};
use crate::modules::sections::{
    AnalyticsSection, CampaignsSection, CustomersSection, DashboardSection, EngagementSection,
    PostsSection, UsersSection,
};
use crate::ui::layout::ResponsiveClassifier;

/// Sidebar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Dashboard,
    Posts,
    Analytics,
    Engagement,
    Campaigns,
    Customers,
    Users,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Overview,
        Section::Dashboard,
        Section::Posts,
        Section::Analytics,
        Section::Engagement,
        Section::Campaigns,
        Section::Customers,
        Section::Users,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Dashboard => "Dashboard",
            Section::Posts => "Posts",
            Section::Analytics => "Analytics",
            Section::Engagement => "Engagement",
            Section::Campaigns => "Campaigns",
            Section::Customers => "Customers",
            Section::Users => "Users",
        }
    }

    /// Look up a section by its title, case-insensitively
    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.title().eq_ignore_ascii_case(name))
    }

    fn next(&self) -> Section {
        let i = Section::ALL.iter().position(|s| s == self).unwrap_or(0);
        Section::ALL[(i + 1) % Section::ALL.len()]
    }

    fn previous(&self) -> Section {
        let i = Section::ALL.iter().position(|s| s == self).unwrap_or(0);
        Section::ALL[(i + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

pub struct App {
    pub section: Section,
    pub overview: OverviewPanel,
    pub dashboard: DashboardSection,
    pub posts: PostsSection,
    pub analytics: AnalyticsSection,
    pub engagement: EngagementSection,
    pub campaigns: CampaignsSection,
    pub customers: CustomersSection,
    pub users: UsersSection,
    pub ctx: Context,
    pub classifier: ResponsiveClassifier,
    pub toasts: ToastQueue,
    pub should_quit: bool,
    saver: DiskSaver,
    export_dir: PathBuf,
}

impl App {
    pub fn new(config: &Config, now: Instant) -> Self {
        let repo = DemoRepository;
        let overview = OverviewPanel::new(&repo)
            .with_handle(config.handle.clone())
            .with_timings(
                config.refresh_latency(),
                config.animation_duration(),
                config.animation_steps,
                config.toast_ttl(),
            );
        let export_dir = config.export_dir();

        let mut app = Self {
            section: Section::Overview,
            overview,
            dashboard: DashboardSection::new(&repo),
            posts: PostsSection::new(&repo),
            analytics: AnalyticsSection::new(&repo),
            engagement: EngagementSection::new(&repo),
            campaigns: CampaignsSection::new(&repo),
            customers: CustomersSection::new(&repo),
            users: UsersSection::new(&repo),
            ctx: Context::new(),
            classifier: ResponsiveClassifier::new(),
            toasts: ToastQueue::new(config.toast_ttl()),
            should_quit: false,
            saver: DiskSaver::new(export_dir.clone()),
            export_dir,
        };
        app.overview.mount(now);
        app
    }

    /// Switch the active section, mounting and unmounting the overview
    /// panel so its timers only run while it is on screen
    pub fn select_section(&mut self, section: Section, now: Instant) {
        if self.section == section {
            return;
        }
        if self.section == Section::Overview {
            self.overview.unmount();
        }
        self.section = section;
        if section == Section::Overview {
            self.overview.mount(now);
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.ctx.now = Local::now();
        self.overview.on_tick(now);
        self.toasts.tick(now);
    }

    pub fn on_resize(&mut self, cols: u16) {
        if let Some(tier) = self.classifier.observe(cols) {
            self.ctx.tier = tier;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if (key.code, key.modifiers) == (KeyCode::Char('c'), KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An open add-account form captures typing before the chrome keys
        // see it; Esc still closes it through the shortcut table below
        if self.section == Section::Overview
            && self.overview.modal == Modal::AddAccount
            && key.code != KeyCode::Esc
        {
            if let Some(command) = self.overview.on_modal_key(&key, now) {
                self.ctx.submit(command);
            }
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab, _) => {
                self.select_section(self.section.next(), now);
                return;
            }
            (KeyCode::BackTab, _) => {
                self.select_section(self.section.previous(), now);
                return;
            }
            _ => {}
        }

        if self.section == Section::Overview {
            if let Some(shortcut) = self.overview.dispatch(&key) {
                self.overview.apply_shortcut(shortcut, &mut self.saver, now);
            }
            return;
        }

        let action = match self.section {
            Section::Overview => Action::None,
            Section::Dashboard => self.dashboard.handle_key(key, &mut self.ctx),
            Section::Posts => self.posts.handle_key(key, &mut self.ctx),
            Section::Analytics => self.analytics.handle_key(key, &mut self.ctx),
            Section::Engagement => self.engagement.handle_key(key, &mut self.ctx),
            Section::Campaigns => self.campaigns.handle_key(key, &mut self.ctx),
            Section::Customers => self.customers.handle_key(key, &mut self.ctx),
            Section::Users => self.users.handle_key(key, &mut self.ctx),
        };
        self.apply_action(action, now);
    }

    fn apply_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Notify(message, kind) => {
                self.toasts.push(message, kind, now);
            }
            Action::ExportList(format) => self.export_active_list(format, now),
            Action::Quit => self.should_quit = true,
        }
    }

    fn export_active_list(&mut self, format: ExportFormat, now: Instant) {
        if format != ExportFormat::Csv {
            self.toasts
                .push("Only CSV list export is supported", ToastKind::Warning, now);
            return;
        }
        let date = self.ctx.now.format("%Y-%m-%d");
        let result = match self.section {
            Section::Campaigns => {
                let path = self.export_dir.join(format!("campaigns-{date}.csv"));
                csv_export::write_campaigns(&path, self.campaigns.campaigns())
            }
            Section::Customers => {
                let path = self.export_dir.join(format!("customers-{date}.csv"));
                csv_export::write_customers(&path, self.customers.customers())
            }
            _ => {
                self.toasts
                    .push("This section has no list export", ToastKind::Warning, now);
                return;
            }
        };
        match result {
            Ok(count) => self.toasts.push(
                format!("Exported {count} rows ({})", self.section.title()),
                ToastKind::Success,
                now,
            ),
            Err(err) => self
                .toasts
                .push(format!("Export failed: {err}"), ToastKind::Error, now),
        };
    }

    /// The active section as a module, None for the overview panel which
    /// has its own richer surface
    pub fn active_module(&self) -> Option<&dyn Module> {
        match self.section {
            Section::Overview => None,
            Section::Dashboard => Some(&self.dashboard),
            Section::Posts => Some(&self.posts),
            Section::Analytics => Some(&self.analytics),
            Section::Engagement => Some(&self.engagement),
            Section::Campaigns => Some(&self.campaigns),
            Section::Customers => Some(&self.customers),
            Section::Users => Some(&self.users),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_app() -> (App, Instant) {
        let t0 = Instant::now();
        (App::new(&Config::default(), t0), t0)
    }

    #[test]
    fn leaving_overview_unmounts_the_panel() {
        let (mut app, t0) = test_app();
        assert!(app.overview.is_mounted());

        app.select_section(Section::Campaigns, t0);
        assert!(!app.overview.is_mounted());

        app.select_section(Section::Overview, t0 + Duration::from_secs(1));
        assert!(app.overview.is_mounted());
    }

    #[test]
    fn add_account_form_submits_a_connect_command() {
        use crate::core::{DashboardCommand, SharedSink};
        use crate::domain::model::Platform;

        let (mut app, t0) = test_app();
        let sink = SharedSink::default();
        app.ctx.sink = Box::new(sink.clone());

        app.on_key(
            KeyEvent::new(
                KeyCode::Char('a'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            ),
            t0,
        );
        assert_eq!(app.overview.modal, Modal::AddAccount);

        // Pick Instagram, type a handle, submit
        app.on_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE), t0);
        for c in "sam".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), t0);
        }
        app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), t0);

        assert_eq!(app.overview.modal, Modal::None);
        assert_eq!(
            sink.drain(),
            vec![DashboardCommand::ConnectAccount {
                platform: Platform::Instagram,
                username: "sam".to_string(),
            }]
        );
    }

    #[test]
    fn add_account_form_captures_chrome_keys_while_open() {
        let (mut app, t0) = test_app();
        app.overview.open_add_account_modal();

        // 'q' is typed into the handle instead of quitting
        app.on_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), t0);
        assert!(!app.should_quit);
        assert_eq!(app.overview.add_account_input, "q");

        // Esc still falls through to close the form
        app.on_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), t0);
        assert_eq!(app.overview.modal, Modal::None);
    }

    #[test]
    fn tab_cycles_through_every_section_and_wraps() {
        let (mut app, t0) = test_app();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        for expected in Section::ALL.into_iter().cycle().skip(1).take(Section::ALL.len()) {
            app.on_key(tab, t0);
            assert_eq!(app.section, expected);
        }
    }
}
