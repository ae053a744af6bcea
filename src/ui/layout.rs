//! Layout tiers and the responsive classifier
//!
//! The dashboard adapts its chrome to three width tiers. Terminal columns
//! are scaled by a nominal cell width so the breakpoints stay meaningful
//! pixel values regardless of the host terminal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Nominal width of one terminal cell in pixels
pub const CELL_PX: u16 = 8;

pub const MOBILE_MAX_PX: u32 = 767;
pub const TABLET_MAX_PX: u32 = 1023;

/// Width tier the chrome adapts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Mobile,
    Tablet,
    Desktop,
}

impl Tier {
    /// Classify a width in pixels. Boundaries are exact: 767 px is mobile,
    /// 768 px is tablet, 1023 px is tablet, 1024 px is desktop.
    pub fn from_width(px: u32) -> Tier {
        if px <= MOBILE_MAX_PX {
            Tier::Mobile
        } else if px <= TABLET_MAX_PX {
            Tier::Tablet
        } else {
            Tier::Desktop
        }
    }

    /// Classify a terminal width in columns
    pub fn from_columns(cols: u16) -> Tier {
        Tier::from_width(cols as u32 * CELL_PX as u32)
    }

    /// Whether the sidebar collapses into the header
    pub fn sidebar_collapsed(&self) -> bool {
        matches!(self, Tier::Mobile)
    }
}

/// Tracks the last classified tier and reports only transitions, so resize
/// storms do not re-trigger tier-dependent work.
#[derive(Debug, Default)]
pub struct ResponsiveClassifier {
    last: Option<Tier>,
}

impl ResponsiveClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a width; `Some` only when the tier changed
    pub fn observe(&mut self, cols: u16) -> Option<Tier> {
        let tier = Tier::from_columns(cols);
        if self.last == Some(tier) {
            None
        } else {
            self.last = Some(tier);
            Some(tier)
        }
    }

    pub fn current(&self) -> Option<Tier> {
        self.last
    }
}

/// Split the frame into sidebar and content per the active tier
pub fn chrome_split(area: Rect, tier: Tier) -> (Option<Rect>, Rect) {
    if tier.sidebar_collapsed() {
        return (None, area);
    }
    let sidebar_width = match tier {
        Tier::Tablet => 14,
        _ => 22,
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(area);
    (Some(chunks[0]), chunks[1])
}

/// Split the content column into body and the one-line status bar
pub fn status_split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_exact() {
        assert_eq!(Tier::from_width(767), Tier::Mobile);
        assert_eq!(Tier::from_width(768), Tier::Tablet);
        assert_eq!(Tier::from_width(1023), Tier::Tablet);
        assert_eq!(Tier::from_width(1024), Tier::Desktop);
    }

    #[test]
    fn classifier_reports_transitions_only() {
        let mut classifier = ResponsiveClassifier::new();
        assert_eq!(classifier.observe(200), Some(Tier::Desktop));
        assert_eq!(classifier.observe(210), None);
        assert_eq!(classifier.observe(100), Some(Tier::Tablet));
        assert_eq!(classifier.observe(100), None);
        assert_eq!(classifier.observe(80), Some(Tier::Mobile));
    }
}
