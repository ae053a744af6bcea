//! Engagement section: recent interactions feed

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::model::{EngagementEvent, EngagementKind};
use crate::domain::repository::EngagementRepository;

pub struct EngagementSection {
    events: Vec<EngagementEvent>,
    offset: usize,
}

impl EngagementSection {
    pub fn new(repo: &dyn EngagementRepository) -> Self {
        Self {
            events: repo.events(),
            offset: 0,
        }
    }

    pub fn events(&self) -> &[EngagementEvent] {
        &self.events
    }
}

impl Module for EngagementSection {
    fn title(&self) -> &'static str {
        "Engagement"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.offset = super::select_next(self.offset, self.events.len());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.offset = super::select_previous(self.offset);
            }
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let items: Vec<ListItem> = self
            .events
            .iter()
            .skip(self.offset)
            .map(|event| {
                let (glyph, color) = match event.kind {
                    EngagementKind::Like => ("♥", Color::Red),
                    EngagementKind::Comment => ("✎", Color::Blue),
                    EngagementKind::Share => ("↗", Color::Green),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{glyph} "), Style::default().fg(color)),
                    Span::raw(format!(
                        "{} {}d \"{}\"  ",
                        event.user,
                        event.kind.title().to_lowercase(),
                        event.post
                    )),
                    Span::styled(event.time.clone(), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent Engagement "),
        );
        frame.render_widget(list, area);
    }
}
