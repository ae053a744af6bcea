//! Dashboard section: per-platform headline figures

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::model::PlatformMetric;
use crate::domain::repository::PlatformRepository;

pub struct DashboardSection {
    metrics: Vec<PlatformMetric>,
    selected: usize,
}

impl DashboardSection {
    pub fn new(repo: &dyn PlatformRepository) -> Self {
        Self {
            metrics: repo.platform_metrics(),
            selected: 0,
        }
    }

    pub fn metrics(&self) -> &[PlatformMetric] {
        &self.metrics
    }
}

impl Module for DashboardSection {
    fn title(&self) -> &'static str {
        "Dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = super::select_next(self.selected, self.metrics.len());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = super::select_previous(self.selected);
            }
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let header = Row::new(["Platform", "Followers", "Engagement", "Reach", "Posts/wk"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .metrics
            .iter()
            .enumerate()
            .map(|(i, metric)| {
                let style = if i == self.selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    metric.platform.title().to_string(),
                    metric.followers.clone(),
                    metric.engagement.clone(),
                    metric.reach.clone(),
                    metric.posts_this_week.to_string(),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(11),
                Constraint::Length(11),
                Constraint::Length(9),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Platform Performance "),
        );

        frame.render_widget(table, area);
    }
}
