//! Horizontal percentage meter used by the audience breakdown card

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

/// A labelled single-row bar, filled proportionally to `percentage`
pub struct PercentMeter<'a> {
    label: &'a str,
    value_label: String,
    percentage: u8,
    color: Color,
}

impl<'a> PercentMeter<'a> {
    pub fn new(label: &'a str, value_label: String, percentage: u8) -> Self {
        Self {
            label,
            value_label,
            percentage: percentage.min(100),
            color: Color::Cyan,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for PercentMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 4 {
            return;
        }
        let label_width = (area.width / 3).max(8).min(area.width);
        buf.set_stringn(
            area.x,
            area.y,
            self.label,
            label_width as usize,
            Style::default(),
        );

        let value_width = self.value_label.len() as u16;
        let bar_start = area.x + label_width;
        let bar_width = area
            .width
            .saturating_sub(label_width)
            .saturating_sub(value_width + 1);
        let filled = (bar_width as u32 * self.percentage as u32 / 100) as u16;

        for i in 0..bar_width {
            let symbol = if i < filled { "█" } else { "░" };
            buf.set_string(
                bar_start + i,
                area.y,
                symbol,
                Style::default().fg(self.color),
            );
        }
        if value_width > 0 && area.width > value_width {
            buf.set_string(
                area.x + area.width - value_width,
                area.y,
                &self.value_label,
                Style::default(),
            );
        }
    }
}
