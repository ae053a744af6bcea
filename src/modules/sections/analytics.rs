//! Analytics section: growth trends, rate comparisons, audience breakdowns

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::fixtures::GROWTH_MONTHS;
use crate::domain::model::{
    AgeShare, CountryShare, EngagementLevel, GrowthSeries, KeyMetric, PeakTime, Platform,
    ReachSlice,
};
use crate::domain::repository::AnalyticsRepository;
use crate::ui::widgets::PercentMeter;

pub struct AnalyticsSection {
    key_metrics: Vec<KeyMetric>,
    growth: Vec<GrowthSeries>,
    rates: Vec<(Platform, f64)>,
    reach: Vec<ReachSlice>,
    demographics: Vec<AgeShare>,
    countries: Vec<CountryShare>,
    peak_times: Vec<PeakTime>,
    /// Which growth series the sparkline shows
    focused_series: usize,
}

impl AnalyticsSection {
    pub fn new(repo: &dyn AnalyticsRepository) -> Self {
        Self {
            key_metrics: repo.key_metrics(),
            growth: repo.growth_series(),
            rates: repo.engagement_rates(),
            reach: repo.reach_distribution(),
            demographics: repo.demographics(),
            countries: repo.country_shares(),
            peak_times: repo.peak_times(),
            focused_series: 0,
        }
    }

    pub fn focused_series(&self) -> Option<&GrowthSeries> {
        self.growth.get(self.focused_series)
    }
}

impl Module for AnalyticsSection {
    fn title(&self) -> &'static str {
        "Analytics"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.focused_series = super::select_next(self.focused_series, self.growth.len());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.focused_series = super::select_previous(self.focused_series);
            }
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Min(8),
            ])
            .split(area);

        self.render_key_metrics(frame, rows[0]);
        self.render_growth(frame, rows[1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);
        self.render_rates(frame, left[0]);
        self.render_reach(frame, left[1]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(columns[1]);
        self.render_demographics(frame, right[0]);
        self.render_countries(frame, right[1]);
        self.render_peak_times(frame, right[2]);
    }
}

impl AnalyticsSection {
    fn render_key_metrics(&self, frame: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = self
            .key_metrics
            .iter()
            .map(|_| Constraint::Ratio(1, self.key_metrics.len() as u32))
            .collect();
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);
        for (metric, card_area) in self.key_metrics.iter().zip(cards.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    metric.value.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    metric.delta.clone(),
                    Style::default().fg(Color::Green),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", metric.label)),
            );
            frame.render_widget(card, *card_area);
        }
    }

    fn render_growth(&self, frame: &mut Frame, area: Rect) {
        let Some(series) = self.focused_series() else {
            return;
        };
        let months = format!("{} - {}", GROWTH_MONTHS[0], GROWTH_MONTHS[GROWTH_MONTHS.len() - 1]);
        let sparkline = Sparkline::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                " Follower Growth: {} ({months})  [j/k] platform ",
                series.platform.title()
            )))
            .data(&series.followers)
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(sparkline, area);
    }

    fn render_rates(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Platform Engagement Rates ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Bars scaled against a 10% ceiling so the ordering stays visible
        let mut y = inner.y;
        for (platform, rate) in &self.rates {
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            let percentage = ((rate * 10.0).round() as u8).min(100);
            frame.render_widget(
                PercentMeter::new(platform.title(), format!("{rate}%"), percentage),
                row,
            );
            y += 1;
        }
    }

    fn render_reach(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Reach Distribution ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let total: u64 = self.reach.iter().map(|slice| slice.count).sum();
        let mut y = inner.y;
        for slice in &self.reach {
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            let percentage = if total == 0 {
                0
            } else {
                (slice.count * 100 / total) as u8
            };
            frame.render_widget(
                PercentMeter::new(&slice.source, format!("{percentage}%"), percentage)
                    .color(Color::Green),
                row,
            );
            y += 1;
        }
    }

    fn render_demographics(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Audience Demographics ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut y = inner.y;
        for share in &self.demographics {
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            frame.render_widget(
                PercentMeter::new(&share.range, format!("{}%", share.percentage), share.percentage)
                    .color(Color::Magenta),
                row,
            );
            y += 1;
        }
    }

    fn render_countries(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Top Performing Countries ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut y = inner.y;
        for share in &self.countries {
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            frame.render_widget(
                PercentMeter::new(
                    &share.country,
                    format!("{}% {}", share.percentage, share.followers),
                    share.percentage,
                ),
                row,
            );
            y += 1;
        }
    }

    fn render_peak_times(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .peak_times
            .iter()
            .map(|peak| {
                let level_color = match peak.level {
                    EngagementLevel::VeryHigh => Color::Green,
                    EngagementLevel::High => Color::Blue,
                    EngagementLevel::Medium => Color::Yellow,
                };
                Line::from(vec![
                    Span::raw(format!("{}  {}  ", peak.window, peak.platform.title())),
                    Span::styled(peak.level.title(), Style::default().fg(level_color)),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Peak Engagement Times "),
            ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn series_focus_cycles_and_clamps() {
        let mut section = AnalyticsSection::new(&crate::domain::repository::DemoRepository);
        let mut ctx = Context::default();

        assert_eq!(
            section.focused_series().unwrap().platform,
            Platform::Facebook
        );
        section.handle_key(key(KeyCode::Down), &mut ctx);
        assert_eq!(
            section.focused_series().unwrap().platform,
            Platform::Instagram
        );
        for _ in 0..10 {
            section.handle_key(key(KeyCode::Down), &mut ctx);
        }
        assert_eq!(section.focused_series().unwrap().platform, Platform::TikTok);
    }
}
