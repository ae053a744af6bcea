//! Sidebar sections
//!
//! Each section implements the `Module` trait: it owns its list data and
//! cursor, maps keys to actions, and renders into the content area the app
//! hands it. Mutating gestures submit a `DashboardCommand` through the
//! shared context instead of touching the fixtures.

pub mod analytics;
pub mod campaigns;
pub mod customers;
pub mod dashboard;
pub mod engagement;
pub mod posts;
pub mod users;

pub use analytics::AnalyticsSection;
pub use campaigns::CampaignsSection;
pub use customers::CustomersSection;
pub use dashboard::DashboardSection;
pub use engagement::EngagementSection;
pub use posts::PostsSection;
pub use users::UsersSection;

/// Move a list cursor down, clamped to the last row
pub(crate) fn select_next(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + 1).min(len - 1)
    }
}

/// Move a list cursor up, clamped to the first row
pub(crate) fn select_previous(selected: usize) -> usize {
    selected.saturating_sub(1)
}
